//! In-memory implementation of PaymentService for testing and development

use crate::core::{NewPayment, Payment, PaymentFilter, PaymentService};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Payment>,
    last_id: i64,
}

/// In-memory payment service implementation
///
/// Clones share the same table. Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryPaymentService {
    table: Arc<RwLock<Table>>,
}

impl InMemoryPaymentService {
    /// Create a new, empty in-memory payment service
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentService for InMemoryPaymentService {
    async fn create(&self, payment: NewPayment) -> Result<Payment> {
        let mut table = self
            .table
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        table.last_id += 1;
        let payment = Payment::from_new(table.last_id, payment);
        table.rows.insert(payment.id, payment.clone());

        tracing::info!(id = payment.id, "Saved payment");
        Ok(payment)
    }

    async fn get(&self, id: i64) -> Result<Option<Payment>> {
        let table = self
            .table
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(table.rows.get(&id).cloned())
    }

    async fn list(&self, filter: &PaymentFilter) -> Result<Vec<Payment>> {
        let table = self
            .table
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(table
            .rows
            .values()
            .filter(|payment| filter.matches(payment))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, payment: NewPayment) -> Result<Option<Payment>> {
        let mut table = self
            .table
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let Some(existing) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        existing.apply(payment);

        tracing::info!(id, "Updated payment");
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut table = self
            .table
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if table.rows.remove(&id).is_some() {
            tracing::info!(id, "Deleted payment");
        }
        Ok(())
    }

    async fn toggle_availability(&self, id: i64) -> Result<Option<Payment>> {
        let mut table = self
            .table
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        Ok(table.rows.get_mut(&id).map(|payment| {
            payment.available = !payment.available;
            payment.clone()
        }))
    }

    async fn reset(&self) -> Result<()> {
        let mut table = self
            .table
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        *table = Table::default();
        tracing::info!("Removed all payments");
        Ok(())
    }
}
