//! # HTTP API Errors
//!
//! Error types for the employee endpoints.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::employee::StoreError;

/// Result type for handler operations
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Create with an identifier that is already stored
    #[error("employee with ID {0} already exists")]
    DuplicateKey(i64),

    /// Update, delete or lookup of an absent identifier
    #[error("Employee not found")]
    NotFound,

    /// Undecodable body or non-numeric identifier
    #[error("{0}")]
    MalformedInput(String),

    /// Verb not served by this endpoint
    #[error("Method Not Allowed")]
    MethodNotSupported,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Encoding failure or store failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::DuplicateKey(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotSupported => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn invalid_body(err: impl std::fmt::Display) -> Self {
        ApiError::MalformedInput(format!("Invalid request body: {}", err))
    }

    pub fn invalid_id(raw: &str) -> Self {
        ApiError::MalformedInput(format!("Invalid employee ID: {:?}", raw))
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey(id) => ApiError::DuplicateKey(id),
            StoreError::LockPoisoned => ApiError::Internal(err.to_string()),
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
        assert_eq!(ApiError::DuplicateKey(1).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MalformedInput("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MethodNotSupported.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_conversion() {
        assert_eq!(
            ApiError::from(StoreError::DuplicateKey(3)),
            ApiError::DuplicateKey(3)
        );
        assert!(matches!(
            ApiError::from(StoreError::LockPoisoned),
            ApiError::Internal(_)
        ));
    }

    #[test]
    fn test_error_response_body() {
        let body = ErrorResponse::from(ApiError::DuplicateKey(9));
        assert_eq!(body.code, 400);
        assert_eq!(body.error, "employee with ID 9 already exists");
    }
}
