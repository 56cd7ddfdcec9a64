// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! Session endpoints: token issuance and logout.
//!
//! Login is identity assertion, not credential verification. Any email is
//! accepted and a token is minted for it; downstream routes only trust the
//! email because the cookie is signed with the server secret.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;

use crate::error::ApiError;
use crate::models::{LoginRequest, SessionResponse};
use crate::state::AppState;

/// Issue a session token for the supplied email and set the session cookie.
#[utoipa::path(
    post,
    path = "/jwt",
    tag = "session",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session cookie set", body = SessionResponse),
        (status = 500, description = "Token creation failed")
    )
)]
pub async fn issue_token(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<SessionResponse>), ApiError> {
    let identity = crate::auth::Identity::new(request.email);
    let token = state.tokens.issue(&identity)?;

    tracing::debug!(email = %identity.email, "session token issued");

    let jar = jar.add(state.cookies.session_cookie(token));
    Ok((jar, Json(SessionResponse { success: true })))
}

/// Clear the session cookie. Idempotent; the token itself is not revoked.
#[utoipa::path(
    post,
    path = "/logout",
    tag = "session",
    responses(
        (status = 200, description = "Session cookie cleared", body = SessionResponse)
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SessionResponse>) {
    let jar = jar.add(state.cookies.clear_cookie());
    (jar, Json(SessionResponse { success: true }))
}
