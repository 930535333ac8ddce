//! Error types for the property service
//!
//! Backend faults (cache, store) are kept apart from the HTTP-facing
//! `ApiError` so that each layer decides what it absorbs and what it
//! propagates.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Faults raised by a cache backend.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Backend cannot be reached or refused the command
    #[error("Cache backend unavailable: {0}")]
    Unavailable(String),

    /// Key or value outside the backend's limits
    #[error("Invalid cache request: {0}")]
    InvalidRequest(String),

    /// Capacity exhausted and nothing could be evicted
    #[error("Cache full: {0}")]
    CacheFull(String),
}

// == Store Error Enum ==
/// Faults raised by the property store.
///
/// An absent record is not a fault; lookups report it as `Ok(None)`.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Store cannot be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Record rejected by a store constraint
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Stored row cannot be mapped back to a property
    #[error("Corrupt row: {0}")]
    Corrupt(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        match &err {
            sqlx::Error::Database(db)
                if matches!(
                    db.kind(),
                    ErrorKind::CheckViolation | ErrorKind::NotNullViolation
                ) =>
            {
                StoreError::Constraint(db.message().to_string())
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::ColumnNotFound(_) => {
                StoreError::Corrupt(err.to_string())
            }
            _ => StoreError::Unavailable(err.to_string()),
        }
    }
}

// == API Error Enum ==
/// Error type returned by HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Requested property does not exist
    #[error("Property not found")]
    PropertyNotFound,

    /// Request body failed validation
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Store fault on the critical path
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Malformed or mistyped JSON bodies are validation failures too.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::PropertyNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::PropertyNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_fault_maps_to_500() {
        let err: ApiError = StoreError::Unavailable("connection refused".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_request_maps_to_400() {
        let response = ApiError::InvalidRequest("title is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_error_message_is_transparent() {
        let err: ApiError = StoreError::Unavailable("down".to_string()).into();
        assert_eq!(err.to_string(), "Store unavailable: down");
    }
}
