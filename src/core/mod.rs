//! Core module containing the payment model, validation and service contract

pub mod error;
pub mod payment;
pub mod query;
pub mod service;
pub mod validation;

pub use error::{ErrorResponse, PaymentsError};
pub use payment::{CreditCardInfo, NewPayment, Payment, PaymentMethod, PaymentType, PaypalInfo};
pub use query::PaymentFilter;
pub use service::PaymentService;
pub use validation::{Rejection, ValidatedPayment, parse_method, parse_payment, validate};
