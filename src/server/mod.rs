//! HTTP server for the payments resource
//!
//! `ServerBuilder` wires a [`PaymentService`](crate::core::PaymentService)
//! into the REST routes, health checks and JSON error fallbacks.

pub mod builder;
pub mod handlers;
pub mod rest;

pub use builder::ServerBuilder;
pub use handlers::{PaymentId, PaymentsState};
pub use rest::RestExposure;
