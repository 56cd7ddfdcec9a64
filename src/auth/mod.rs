// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! Cookie-based session authentication.
//!
//! Flow:
//!
//! 1. `POST /jwt` accepts an email and sets an HTTP-only cookie carrying a
//!    signed HS256 token ([`TokenCodec`], [`CookiePolicy`]).
//! 2. Protected routes run [`require_auth`], which verifies the cookie and
//!    attaches the [`Identity`] to the request.
//! 3. Handlers take the [`Auth`] extractor to read that identity and call
//!    [`require_owner`] where a resource is owner-scoped.
//! 4. `POST /logout` clears the cookie. Tokens are not revoked; a copied
//!    token stays valid until its expiry.
//!
//! The signing secret is read once at startup, is never logged and never
//! appears in tokens or responses.

pub mod claims;
pub mod cookie;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod ownership;
pub mod token;

pub use claims::Identity;
pub use cookie::{token_from_jar, CookiePolicy, TOKEN_COOKIE};
pub use error::AuthError;
pub use extractor::Auth;
pub use middleware::require_auth;
pub use ownership::require_owner;
pub use token::TokenCodec;
