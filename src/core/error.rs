//! Typed errors for the payments service
//!
//! Every failure a handler can produce is a [`PaymentsError`]. Each variant
//! maps to one HTTP status, and the response body has the same shape for all
//! of them:
//!
//! ```json
//! { "status": 404, "error": "Not Found", "message": "Payment with id '7' was not found." }
//! ```
//!
//! Storage backends return `anyhow::Error`; those convert into
//! [`PaymentsError::Internal`] and surface as 500s.
//!
//! # Example
//!
//! ```rust,ignore
//! async fn find(service: &dyn PaymentService, id: i64) -> Result<Payment, PaymentsError> {
//!     service.get(id).await?.ok_or(PaymentsError::NotFound { id })
//! }
//! ```

use crate::core::validation::Rejection;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// The main error type for the payments service
#[derive(Debug, thiserror::Error)]
pub enum PaymentsError {
    /// No payment with this id
    #[error("Payment with id '{id}' was not found.")]
    NotFound { id: i64 },

    /// The path segment is not a payment id at all
    #[error("Payment with id '{0}' was not found.")]
    InvalidId(String),

    /// The payload failed payment validation
    #[error(transparent)]
    Validation(#[from] Rejection),

    /// Malformed request (body is not JSON, bad query string)
    #[error("{0}")]
    BadRequest(String),

    #[error("Content-Type must be {expected}")]
    UnsupportedMediaType { expected: &'static str },

    #[error("The method is not allowed for the requested URL.")]
    MethodNotAllowed,

    #[error("No route matches '{0}'.")]
    RouteNotFound(String),

    /// Storage or other unexpected failures
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error body returned to HTTP clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Numeric HTTP status
    pub status: u16,
    /// Reason phrase of the status
    pub error: String,
    /// Human-readable message
    pub message: String,
}

impl PaymentsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PaymentsError::NotFound { .. } => StatusCode::NOT_FOUND,
            PaymentsError::InvalidId(_) => StatusCode::NOT_FOUND,
            PaymentsError::Validation(_) => StatusCode::BAD_REQUEST,
            PaymentsError::BadRequest(_) => StatusCode::BAD_REQUEST,
            PaymentsError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            PaymentsError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            PaymentsError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            PaymentsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        let status = self.status_code();
        ErrorResponse {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.to_string(),
        }
    }
}

impl From<anyhow::Error> for PaymentsError {
    fn from(err: anyhow::Error) -> Self {
        PaymentsError::Internal(format!("{:#}", err))
    }
}

impl IntoResponse for PaymentsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", self);
        }
        (status, Json(self.to_response())).into_response()
    }
}
