//! HTTP handlers for payment operations
//!
//! Every handler receives the shared [`PaymentsState`] and returns either a
//! JSON body or a [`PaymentsError`], which renders the common error body.

use axum::{
    Json,
    extract::{FromRequestParts, Path, Query, State, rejection::QueryRejection},
    http::{StatusCode, Uri, header, request::Parts},
    response::IntoResponse,
};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::core::{Payment, PaymentFilter, PaymentService, PaymentsError, ValidatedPayment};

/// Application state shared across handlers
#[derive(Clone)]
pub struct PaymentsState {
    pub service: Arc<dyn PaymentService>,
}

impl PaymentsState {
    pub fn new(service: Arc<dyn PaymentService>) -> Self {
        Self { service }
    }
}

/// Payment id taken from the `{id}` path segment
///
/// A segment that is not an integer cannot name a payment, so it is reported
/// as not found rather than as a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentId(pub i64);

impl<S> FromRequestParts<S> for PaymentId
where
    S: Send + Sync,
{
    type Rejection = PaymentsError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| PaymentsError::BadRequest(e.body_text()))?;

        raw.parse::<i64>()
            .map(PaymentId)
            .map_err(|_| PaymentsError::InvalidId(raw))
    }
}

/// Root URL response
pub async fn index() -> Json<Value> {
    Json(json!({
        "name": "Payment REST API Service",
        "version": "1.0",
        "paths": "/payments"
    }))
}

/// Health check endpoint handler
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "payments"
    }))
}

/// List payments, optionally filtered by query parameters
pub async fn list_payments(
    State(state): State<PaymentsState>,
    query: Result<Query<PaymentFilter>, QueryRejection>,
) -> Result<Json<Vec<Payment>>, PaymentsError> {
    let Query(filter) = query.map_err(|e| PaymentsError::BadRequest(e.body_text()))?;
    tracing::info!(?filter, "Request to list payments");

    let payments = state.service.list(&filter).await?;
    Ok(Json(payments))
}

pub async fn get_payment(
    State(state): State<PaymentsState>,
    PaymentId(id): PaymentId,
) -> Result<Json<Payment>, PaymentsError> {
    tracing::info!(id, "Request to get payment");

    let payment = state
        .service
        .get(id)
        .await?
        .ok_or(PaymentsError::NotFound { id })?;
    Ok(Json(payment))
}

/// Create a payment; responds 201 with a `Location` header
pub async fn create_payment(
    State(state): State<PaymentsState>,
    ValidatedPayment(payment): ValidatedPayment,
) -> Result<impl IntoResponse, PaymentsError> {
    tracing::info!(order_id = payment.order_id, "Request to create payment");

    let created = state.service.create(payment).await?;
    let location = format!("/payments/{}", created.id);
    tracing::info!(id = created.id, "Payment created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Replace every client-controlled field of an existing payment
pub async fn update_payment(
    State(state): State<PaymentsState>,
    PaymentId(id): PaymentId,
    ValidatedPayment(payment): ValidatedPayment,
) -> Result<Json<Payment>, PaymentsError> {
    tracing::info!(id, "Request to update payment");

    let updated = state
        .service
        .update(id, payment)
        .await?
        .ok_or(PaymentsError::NotFound { id })?;
    Ok(Json(updated))
}

/// Delete a payment; unknown ids still answer 204
pub async fn delete_payment(
    State(state): State<PaymentsState>,
    PaymentId(id): PaymentId,
) -> Result<StatusCode, PaymentsError> {
    tracing::info!(id, "Request to delete payment");

    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Flip the `available` flag of a payment
pub async fn toggle_availability(
    State(state): State<PaymentsState>,
    PaymentId(id): PaymentId,
) -> Result<Json<Payment>, PaymentsError> {
    tracing::info!(id, "Request to toggle payment availability");

    let payment = state
        .service
        .toggle_availability(id)
        .await?
        .ok_or(PaymentsError::NotFound { id })?;
    Ok(Json(payment))
}

/// Remove all payments (test environments)
pub async fn reset_payments(
    State(state): State<PaymentsState>,
) -> Result<StatusCode, PaymentsError> {
    tracing::info!("Request to reset payments");

    state.service.reset().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn route_not_found(uri: Uri) -> PaymentsError {
    PaymentsError::RouteNotFound(uri.path().to_string())
}

pub async fn method_not_allowed() -> PaymentsError {
    PaymentsError::MethodNotAllowed
}
