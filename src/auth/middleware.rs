// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! Authentication middleware for protected routes.
//!
//! Apply with `axum::middleware::from_fn_with_state(state, require_auth)` on
//! the routes that need it. On success the verified [`Identity`] is attached
//! to the request extensions, so downstream handlers only read it and never
//! re-verify.
//!
//! Enforcement is strict: a missing cookie or a failed verification
//! terminates the request with 401 before the handler runs.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use super::cookie::token_from_jar;
use super::error::AuthError;
use crate::state::AppState;

/// Authentication middleware function.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let jar = CookieJar::from_headers(request.headers());

    let Some(token) = token_from_jar(&jar) else {
        return AuthError::MissingToken.into_response();
    };

    match state.tokens.verify(&token) {
        Ok(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Err(e) => e.into_response(),
    }
}
