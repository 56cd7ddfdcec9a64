// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! API error type shared by all handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::auth::AuthError;
use crate::storage::StorageError;

/// An error returned to API clients as a JSON body with a status code.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                message: self.message,
            }),
        )
            .into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(name) => {
                Self::not_found(format!("Document not found: {name}"))
            }
            StorageError::AlreadyExists(name) => Self::new(
                StatusCode::CONFLICT,
                format!("Document already exists: {name}"),
            ),
            other => {
                tracing::error!(error = %other, "storage operation failed");
                Self::internal("Storage operation failed")
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::new(err.status_code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn error_serializes_message_body() {
        let response = ApiError::bad_request("missing field").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["message"], "missing field");
    }

    #[test]
    fn storage_not_found_maps_to_404() {
        let err = ApiError::from(StorageError::NotFound("jobs/abc.json".into()));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_io_maps_to_500() {
        let io = std::io::Error::other("disk gone");
        let err = ApiError::from(StorageError::Io(io));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        // Internal detail is logged, not leaked to the client.
        assert_eq!(err.message, "Storage operation failed");
    }

    #[test]
    fn auth_error_keeps_its_status() {
        let err = ApiError::from(AuthError::NotResourceOwner);
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }
}
