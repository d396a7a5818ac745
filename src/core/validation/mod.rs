//! Payment payload validation
//!
//! Turns an untyped JSON payload into a typed [`NewPayment`] or a
//! [`Rejection`] explaining why it was refused. The `type` field is decoded
//! first into a closed [`PaymentType`]; `info` is then decoded into the info
//! struct of that variant only, so fields belonging to another variant are
//! rejected as unknown.
//!
//! Checks run in stages and the first failing stage is reported:
//!
//! 1. the payload is a JSON object
//! 2. top-level fields decode (presence, JSON types, no unknown keys, known `type`)
//! 3. top-level bounds (`order_id`, `customer_id` >= 1)
//! 4. `info` decodes into the variant's struct
//! 5. info bounds (lengths and ranges)
//! 6. paypal contact rule (`email` or `phone_number`)
//!
//! Within stages 3 and 5 every violation is reported, sorted, so the same
//! payload always yields the same reason.

pub mod extractor;

pub use extractor::ValidatedPayment;

use crate::core::payment::{
    CreditCardInfo, NewPayment, PaymentMethod, PaymentType, PaypalInfo,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

/// Reason a payload was refused
///
/// The message is meant to be returned verbatim to the API client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct Rejection {
    reason: String,
}

impl Rejection {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Top-level shape shared by every payment type
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
struct PaymentPayload {
    // Echoed back by clients on update; the path id is authoritative.
    #[serde(default)]
    #[allow(dead_code)]
    id: Option<i64>,

    #[validate(range(min = 1, message = "must be at least 1"))]
    order_id: i64,

    #[validate(range(min = 1, message = "must be at least 1"))]
    customer_id: i64,

    available: bool,

    #[serde(rename = "type")]
    payment_type: PaymentType,

    info: Value,
}

/// Check a payload without keeping the decoded record
pub fn validate(payload: &Value) -> Result<(), Rejection> {
    parse_payment(payload).map(|_| ())
}

/// Decode and validate a payment payload
pub fn parse_payment(payload: &Value) -> Result<NewPayment, Rejection> {
    if !payload.is_object() {
        return Err(Rejection::new(format!(
            "Invalid payment: body must be a JSON object, got {}",
            json_kind(payload)
        )));
    }

    let top = PaymentPayload::deserialize(payload)
        .map_err(|e| Rejection::new(format!("Invalid payment: {}", e)))?;

    top.validate()
        .map_err(|e| Rejection::new(format!("Invalid payment: {}", describe(&e, ""))))?;

    let method = parse_method(top.payment_type, &top.info)?;

    Ok(NewPayment {
        order_id: top.order_id,
        customer_id: top.customer_id,
        available: top.available,
        method,
    })
}

/// Decode `info` as the shape required by `payment_type`
///
/// Also used by storage backends to rebuild a method from its stored columns.
pub fn parse_method(payment_type: PaymentType, info: &Value) -> Result<PaymentMethod, Rejection> {
    if !info.is_object() {
        return Err(info_rejection(
            payment_type,
            format!("info must be a JSON object, got {}", json_kind(info)),
        ));
    }

    match payment_type {
        PaymentType::CreditCard => {
            let card: CreditCardInfo = decode_info(payment_type, info)?;
            Ok(PaymentMethod::CreditCard(card))
        }
        PaymentType::Paypal => {
            let account: PaypalInfo = decode_info(payment_type, info)?;
            if !account.has_contact() {
                return Err(info_rejection(
                    payment_type,
                    "at least one of `email` or `phone_number` is required",
                ));
            }
            Ok(PaymentMethod::Paypal(account))
        }
    }
}

fn decode_info<T>(payment_type: PaymentType, info: &Value) -> Result<T, Rejection>
where
    T: DeserializeOwned + Validate,
{
    let decoded = T::deserialize(info).map_err(|e| info_rejection(payment_type, e))?;
    decoded
        .validate()
        .map_err(|e| info_rejection(payment_type, describe(&e, "info.")))?;
    Ok(decoded)
}

fn info_rejection(payment_type: PaymentType, detail: impl std::fmt::Display) -> Rejection {
    Rejection::new(format!(
        "Invalid payment info for type '{}': {}",
        payment_type, detail
    ))
}

/// Flatten field errors into `field: message` pairs, sorted
fn describe(errors: &ValidationErrors, prefix: &str) -> String {
    let mut reasons = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for err in field_errors.iter() {
            let message = err.message.as_deref().unwrap_or(&*err.code);
            reasons.push(format!("{}{}: {}", prefix, field, message));
        }
    }
    reasons.sort();
    reasons.join("; ")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
