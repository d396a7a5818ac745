//! List filters for payments

use crate::core::payment::{Payment, PaymentType};
use serde::{Deserialize, Serialize};

/// Criteria for listing payments
///
/// Every criterion is optional; present ones are combined with AND and absent
/// ones are ignored.
///
/// # Example
/// ```text
/// GET /payments?customer_id=4
/// GET /payments?order_id=1&available=true
/// GET /payments?type=credit%20card
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
}

impl PaymentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_id(mut self, order_id: i64) -> Self {
        self.order_id = Some(order_id);
        self
    }

    pub fn customer_id(mut self, customer_id: i64) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    pub fn payment_type(mut self, payment_type: PaymentType) -> Self {
        self.payment_type = Some(payment_type);
        self
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check a payment against every criterion that is set
    pub fn matches(&self, payment: &Payment) -> bool {
        self.order_id.is_none_or(|v| payment.order_id == v)
            && self.customer_id.is_none_or(|v| payment.customer_id == v)
            && self.available.is_none_or(|v| payment.available == v)
            && self
                .payment_type
                .is_none_or(|v| payment.payment_type() == v)
    }
}
