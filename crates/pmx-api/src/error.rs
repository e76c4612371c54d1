//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Domain errors from pmx-core map to HTTP status codes and a JSON body
//! with a machine-readable code and a message. Handlers only read an
//! in-memory dataset, so every failure is a client error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use pmx_core::PmxError;

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code, e.g. `"NOT_FOUND"`.
    pub code: String,
    pub message: String,
}

/// Application-level error type returned by every handler.
#[derive(Error, Debug)]
pub enum AppError {
    /// Unknown country (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed query parameters (400).
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        tracing::debug!(error = %self, %status, "request rejected");

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<PmxError> for AppError {
    fn from(err: PmxError) -> Self {
        match err {
            PmxError::NotFound(_) => Self::NotFound(err.to_string()),
            PmxError::InvalidCountry(_)
            | PmxError::UnknownCategory(_)
            | PmxError::UnknownFocus(_) => Self::BadRequest(err.to_string()),
        }
    }
}
