//! Persistence contract for payments

use crate::core::payment::{NewPayment, Payment};
use crate::core::query::PaymentFilter;
use anyhow::Result;
use async_trait::async_trait;

/// Service trait for storing payments
///
/// Implementations own every storage concern; callers hand them payloads that
/// already passed validation. The REST layer is agnostic to the backend.
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Store a new payment and assign its id
    async fn create(&self, payment: NewPayment) -> Result<Payment>;

    /// Get a payment by id
    async fn get(&self, id: i64) -> Result<Option<Payment>>;

    /// List payments matching the filter, ordered by id
    async fn list(&self, filter: &PaymentFilter) -> Result<Vec<Payment>>;

    /// Replace a payment's fields, returning `None` when it does not exist
    async fn update(&self, id: i64, payment: NewPayment) -> Result<Option<Payment>>;

    /// Delete a payment; deleting an unknown id is not an error
    async fn delete(&self, id: i64) -> Result<()>;

    /// Flip `available`, returning `None` when the payment does not exist
    async fn toggle_availability(&self, id: i64) -> Result<Option<Payment>>;

    /// Remove every payment and restart id assignment
    ///
    /// Meant for test environments.
    async fn reset(&self) -> Result<()>;
}
