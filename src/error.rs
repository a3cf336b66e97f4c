//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache engine and its HTTP adapter.
///
/// The engine itself only fails at construction. Misses, expirations and
/// evictions are ordinary outcomes, never errors.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Capacity of zero entries
    #[error("Invalid capacity: max entries must be greater than zero")]
    InvalidCapacity,

    /// Default TTL of zero or beyond the supported maximum
    #[error("Invalid TTL: default TTL must be greater than zero and at most ten years")]
    InvalidTtl,

    /// Key not found in cache (absent or expired)
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::InvalidCapacity | CacheError::InvalidTtl => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
