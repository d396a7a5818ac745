//! Fixture factory producing well-formed payments
//!
//! Each factory keeps its own sequence for `order_id` and `customer_id`, so
//! payments from one factory are distinguishable without being fully random.
//!
//! ```rust,ignore
//! let factory = PaymentFactory::new();
//! let payment = factory.build();          // random type and availability
//! let card = factory.credit_card();       // always "credit card"
//! let body = factory.build_json();        // wire shape for POST /payments
//! ```

use crate::core::{CreditCardInfo, NewPayment, PaymentMethod, PaypalInfo};
use rand::Rng;
use serde_json::Value;
use std::sync::atomic::{AtomicI64, Ordering};

/// Builds valid [`NewPayment`]s for tests and seeding
#[derive(Debug)]
pub struct PaymentFactory {
    order_seq: AtomicI64,
    customer_seq: AtomicI64,
}

impl PaymentFactory {
    pub fn new() -> Self {
        Self {
            order_seq: AtomicI64::new(1),
            customer_seq: AtomicI64::new(1),
        }
    }

    /// A payment with a random type and availability
    pub fn build(&self) -> NewPayment {
        if rand::thread_rng().gen_bool(0.5) {
            self.credit_card()
        } else {
            self.paypal()
        }
    }

    pub fn credit_card(&self) -> NewPayment {
        self.with_method(PaymentMethod::CreditCard(credit_card_info()))
    }

    pub fn paypal(&self) -> NewPayment {
        self.with_method(PaymentMethod::Paypal(paypal_info()))
    }

    /// `count` payments from [`build`](Self::build)
    pub fn batch(&self, count: usize) -> Vec<NewPayment> {
        (0..count).map(|_| self.build()).collect()
    }

    /// A payment in its request-body form
    pub fn build_json(&self) -> Value {
        serde_json::to_value(self.build()).unwrap_or(Value::Null)
    }

    fn with_method(&self, method: PaymentMethod) -> NewPayment {
        NewPayment {
            order_id: self.order_seq.fetch_add(1, Ordering::Relaxed),
            customer_id: self.customer_seq.fetch_add(1, Ordering::Relaxed),
            available: rand::thread_rng().gen_bool(0.5),
            method,
        }
    }
}

impl Default for PaymentFactory {
    fn default() -> Self {
        Self::new()
    }
}

pub fn credit_card_info() -> CreditCardInfo {
    CreditCardInfo {
        credit_card_number: "1234567890".to_string(),
        card_holder_name: "John Doe".to_string(),
        expiration_month: 4,
        expiration_year: 2022,
        security_code: "1234".to_string(),
    }
}

pub fn paypal_info() -> PaypalInfo {
    PaypalInfo {
        email: Some("john@example.com".to_string()),
        phone_number: Some("123456789".to_string()),
        token: "abc".to_string(),
    }
}
