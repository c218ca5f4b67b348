//! # API Errors
//!
//! Error types for the HTTP API layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Invalid configuration key
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Invalid configuration value
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Invalid pagination parameter
    #[error("Invalid page parameter: {0}")]
    InvalidPage(String),

    /// No item with the requested key
    #[error("Configuration item with key \"{0}\" not found")]
    NotFound(String),

    /// An item with the requested key already exists
    #[error("Configuration item with key \"{0}\" already exists")]
    Conflict(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Internal error during store access
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::InvalidKey(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidValue(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidPage(_) => StatusCode::BAD_REQUEST,

            // 404 Not Found
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,

            // 409 Conflict
            ApiError::Conflict(_) => StatusCode::CONFLICT,

            // 500 Internal Server Error
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// One translation rule for every store operation: the two domain failures
/// map to their status codes, everything else becomes a generic 500.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(key) => ApiError::NotFound(key),
            StoreError::Conflict(key) => ApiError::Conflict(key),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidPage("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("k".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Conflict("k".to_string()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_translation() {
        let not_found = ApiError::from(StoreError::NotFound("k".to_string()));
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let conflict = ApiError::from(StoreError::Conflict("k".to_string()));
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

        let internal = ApiError::from(StoreError::Internal("boom".to_string()));
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_body() {
        let body = ErrorResponse::from(ApiError::Conflict("dup".to_string()));
        assert_eq!(body.code, 409);
        assert!(body.error.contains("dup"));
    }
}
