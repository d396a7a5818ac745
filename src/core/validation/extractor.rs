//! Axum extractor for validated payment payloads
//!
//! `ValidatedPayment` checks the request's content type, decodes the JSON body
//! and runs it through [`parse_payment`](super::parse_payment) before the
//! handler is called.

use super::parse_payment;
use crate::core::error::PaymentsError;
use crate::core::payment::NewPayment;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde_json::Value;

/// Media type accepted for request bodies
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Axum extractor yielding a validated [`NewPayment`]
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_payment(
///     State(state): State<PaymentsState>,
///     ValidatedPayment(payment): ValidatedPayment,
/// ) -> Result<Json<Payment>, PaymentsError> {
///     // payment is already validated
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedPayment(pub NewPayment);

impl ValidatedPayment {
    pub fn into_inner(self) -> NewPayment {
        self.0
    }
}

impl std::ops::Deref for ValidatedPayment {
    type Target = NewPayment;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequest<S> for ValidatedPayment
where
    S: Send + Sync,
{
    type Rejection = PaymentsError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        check_content_type(req.headers())?;

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| PaymentsError::BadRequest(e.body_text()))?;

        let payload: Value = serde_json::from_slice(&body)
            .map_err(|e| PaymentsError::BadRequest(format!("Invalid JSON: {}", e)))?;

        let payment = parse_payment(&payload)?;
        Ok(ValidatedPayment(payment))
    }
}

/// Require `application/json`, allowing parameters such as `charset`
pub fn check_content_type(headers: &HeaderMap) -> Result<(), PaymentsError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let essence = content_type.split(';').next().unwrap_or_default().trim();
    if essence.eq_ignore_ascii_case(JSON_CONTENT_TYPE) {
        Ok(())
    } else {
        tracing::error!(content_type, "Invalid Content-Type");
        Err(PaymentsError::UnsupportedMediaType {
            expected: JSON_CONTENT_TYPE,
        })
    }
}
