//! Error types for the price lookup service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Price Error Enum ==
/// Unified error type for the price lookup service.
///
/// An unknown key is a `NotFound`, never a panic or a sentinel price of
/// zero. This keeps "no price available" distinguishable from a genuinely
/// zero-priced entry at the type level.
#[derive(Error, Debug)]
pub enum PriceError {
    /// No price is known for the requested key
    #[error("No price known for key: {0}")]
    NotFound(String),

    /// Key failed validation before lookup
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for PriceError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            PriceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            PriceError::InvalidKey(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            PriceError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(ErrorResponse::new(message));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the price lookup service.
pub type Result<T> = std::result::Result<T, PriceError>;
