//! Mapping of service errors onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::types::ErrorResponse;
use crate::error::{DatabaseError, EvalError};

/// Errors returned by the HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid operands")]
    InvalidOperands,

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] DatabaseError),
}

impl From<EvalError> for ApiError {
    fn from(e: EvalError) -> Self {
        match e {
            EvalError::InvalidOperands => ApiError::InvalidOperands,
            EvalError::DivisionByZero => ApiError::DivisionByZero,
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidOperands | ApiError::DivisionByZero => StatusCode::BAD_REQUEST,
            ApiError::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::StorageUnavailable(e) => {
                // Details stay in the logs.
                tracing::error!(error = %e, "Calculation storage failed");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (self.status(), Json(ErrorResponse { error: message })).into_response()
    }
}
