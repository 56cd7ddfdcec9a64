// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! Token claims and verified identity representation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims embedded in a session token.
///
/// The whole session state lives in these three fields; there is no
/// server-side session store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the caller's email, the canonical identity key.
    pub sub: String,

    /// Issued at (seconds since epoch).
    pub iat: i64,

    /// Expiration (seconds since epoch).
    pub exp: i64,
}

/// The authenticated subject extracted from a verified session token.
///
/// Reconstructed from the token claims on every request; it is not
/// re-validated against any user store. This is the type handlers read from
/// the request context.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Identity {
    /// Email uniquely identifying the caller.
    pub email: String,
}

impl Identity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Reconstruct the identity from verified claims.
    pub fn from_claims(claims: Claims) -> Self {
        Self { email: claims.sub }
    }
}
