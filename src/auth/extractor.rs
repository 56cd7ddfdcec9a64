// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! Extractor giving handlers the verified identity.
//!
//! Behind [`require_auth`](super::middleware::require_auth) the identity is
//! already in the request extensions and the extractor just reads it. On a
//! route without the middleware it falls back to verifying the session
//! cookie itself, so a handler can opt into authentication by taking an
//! `Auth` argument.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use super::claims::Identity;
use super::cookie::token_from_jar;
use super::error::AuthError;
use crate::state::AppState;

/// Extractor for the authenticated identity.
pub struct Auth(pub Identity);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>() {
            return Ok(Auth(identity.clone()));
        }

        let jar = CookieJar::from_headers(&parts.headers);
        let token = token_from_jar(&jar).ok_or(AuthError::MissingToken)?;
        let identity = state.tokens.verify(&token)?;

        Ok(Auth(identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::cookie::TOKEN_COOKIE;
    use axum::{
        body::Body,
        http::{header, Request},
    };

    fn parts_with_cookie(cookie: Option<String>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = cookie {
            builder = builder.header(header::COOKIE, value);
        }
        builder.body(Body::empty()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn reads_identity_from_extensions() {
        let (state, _temp_dir) = crate::state::test_support::test_state();
        let mut parts = parts_with_cookie(None);
        parts.extensions.insert(Identity::new("a@x.com"));

        let Auth(identity) = Auth::from_request_parts(&mut parts, &state).await.unwrap();
        assert_eq!(identity.email, "a@x.com");
    }

    #[tokio::test]
    async fn falls_back_to_cookie_verification() {
        let (state, _temp_dir) = crate::state::test_support::test_state();
        let token = state.tokens.issue(&Identity::new("a@x.com")).unwrap();
        let mut parts = parts_with_cookie(Some(format!("{TOKEN_COOKIE}={token}")));

        let Auth(identity) = Auth::from_request_parts(&mut parts, &state).await.unwrap();
        assert_eq!(identity.email, "a@x.com");
    }

    #[tokio::test]
    async fn missing_cookie_is_rejected() {
        let (state, _temp_dir) = crate::state::test_support::test_state();
        let mut parts = parts_with_cookie(None);

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MissingToken)));
    }

    #[tokio::test]
    async fn invalid_token_is_rejected() {
        let (state, _temp_dir) = crate::state::test_support::test_state();
        let mut parts = parts_with_cookie(Some(format!("{TOKEN_COOKIE}=garbage")));

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MalformedToken)));
    }
}
