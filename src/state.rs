// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! Shared application state.

use std::sync::Arc;

use crate::auth::{CookiePolicy, TokenCodec};
use crate::storage::DocumentStorage;

/// State shared across all request handlers.
///
/// Cloned per request by axum; the heavy members sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Filesystem-backed document store.
    pub storage: Arc<DocumentStorage>,
    /// Session token codec holding the signing secret.
    pub tokens: Arc<TokenCodec>,
    /// Transport attributes for the session cookie.
    pub cookies: CookiePolicy,
}

impl AppState {
    pub fn new(storage: DocumentStorage, tokens: TokenCodec, cookies: CookiePolicy) -> Self {
        Self {
            storage: Arc::new(storage),
            tokens: Arc::new(tokens),
            cookies,
        }
    }
}
