//! Payment record and its payment-method variants
//!
//! A payment's `type` and `info` always travel together inside
//! [`PaymentMethod`], so a record can never carry info shaped for another type.
//! On the wire the method is flattened into the record as two keys:
//!
//! ```json
//! {
//!   "id": 1, "order_id": 1, "customer_id": 1, "available": true,
//!   "type": "credit card",
//!   "info": { "credit_card_number": "1234567890", "...": "..." }
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Discriminant of a payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    #[serde(rename = "credit card")]
    CreditCard,
    #[serde(rename = "paypal")]
    Paypal,
}

impl PaymentType {
    /// Every accepted discriminant, in wire order
    pub const ALL: [PaymentType; 2] = [PaymentType::CreditCard, PaymentType::Paypal];

    /// Wire name of the discriminant
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::CreditCard => "credit card",
            PaymentType::Paypal => "paypal",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown payment type '{}', expected 'credit card' or 'paypal'",
                    s
                )
            })
    }
}

/// Card details carried by a `"credit card"` payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreditCardInfo {
    #[validate(length(min = 1, max = 30, message = "must be between 1 and 30 characters"))]
    pub credit_card_number: String,

    #[validate(length(min = 1, max = 30, message = "must be between 1 and 30 characters"))]
    pub card_holder_name: String,

    #[validate(range(min = 1, max = 12, message = "must be between 1 and 12"))]
    pub expiration_month: i64,

    #[validate(range(min = 2020, max = 2099, message = "must be between 2020 and 2099"))]
    pub expiration_year: i64,

    #[validate(length(min = 1, max = 4, message = "must be between 1 and 4 characters"))]
    pub security_code: String,
}

/// Account details carried by a `"paypal"` payment
///
/// At least one of `email` or `phone_number` must be present; that rule spans
/// two fields and is checked by [`PaypalInfo::has_contact`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PaypalInfo {
    #[serde(
        default,
        deserialize_with = "present_string",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(max = 30, message = "must be at most 30 characters"))]
    pub email: Option<String>,

    #[serde(
        default,
        deserialize_with = "present_string",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(max = 20, message = "must be at most 20 characters"))]
    pub phone_number: Option<String>,

    #[validate(length(min = 1, max = 30, message = "must be between 1 and 30 characters"))]
    pub token: String,
}

impl PaypalInfo {
    /// Whether the account can be reached by email or phone
    pub fn has_contact(&self) -> bool {
        self.email.is_some() || self.phone_number.is_some()
    }
}

/// An optional field that, when present, must be a string
///
/// A missing key falls back to `None` through `#[serde(default)]`; an explicit
/// `null` is a type error.
fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

/// A payment method: the discriminant together with its matching info
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "info")]
pub enum PaymentMethod {
    #[serde(rename = "credit card")]
    CreditCard(CreditCardInfo),
    #[serde(rename = "paypal")]
    Paypal(PaypalInfo),
}

impl PaymentMethod {
    pub fn payment_type(&self) -> PaymentType {
        match self {
            PaymentMethod::CreditCard(_) => PaymentType::CreditCard,
            PaymentMethod::Paypal(_) => PaymentType::Paypal,
        }
    }

    /// Serialize only the info part, as stored next to the discriminant
    pub fn info_json(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            PaymentMethod::CreditCard(info) => serde_json::to_value(info),
            PaymentMethod::Paypal(info) => serde_json::to_value(info),
        }
    }
}

/// A validated payment that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPayment {
    pub order_id: i64,
    pub customer_id: i64,
    pub available: bool,
    #[serde(flatten)]
    pub method: PaymentMethod,
}

impl NewPayment {
    pub fn payment_type(&self) -> PaymentType {
        self.method.payment_type()
    }
}

/// A persisted payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub order_id: i64,
    pub customer_id: i64,
    pub available: bool,
    #[serde(flatten)]
    pub method: PaymentMethod,
}

impl Payment {
    /// Attach a storage-assigned id to a validated payload
    pub fn from_new(id: i64, payment: NewPayment) -> Self {
        Self {
            id,
            order_id: payment.order_id,
            customer_id: payment.customer_id,
            available: payment.available,
            method: payment.method,
        }
    }

    pub fn payment_type(&self) -> PaymentType {
        self.method.payment_type()
    }

    /// Replace every client-controlled field, keeping the id
    pub fn apply(&mut self, payment: NewPayment) {
        self.order_id = payment.order_id;
        self.customer_id = payment.customer_id;
        self.available = payment.available;
        self.method = payment.method;
    }
}
