//! # Payments
//!
//! A REST service storing payment records whose payment info is checked
//! against the payment's type before it is accepted.
//!
//! ## Features
//!
//! - **Typed payment methods**: `type` and `info` decode into one tagged union,
//!   so a credit card record can never carry paypal info
//! - **Staged validation**: the first failing stage is reported with every
//!   violation found in that stage
//! - **Pluggable storage**: in-memory by default, PostgreSQL behind the
//!   `postgres` feature
//! - **Configuration-Based**: YAML file plus environment overrides
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use payments::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_payment_service(InMemoryPaymentService::new())
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! ```
//!
//! Validation can also be used on its own:
//!
//! ```rust
//! use payments::core::validate;
//! use serde_json::json;
//!
//! let payload = json!({
//!     "order_id": 1,
//!     "customer_id": 1,
//!     "available": true,
//!     "type": "paypal",
//!     "info": { "token": "abc", "phone_number": "5551234" }
//! });
//! assert!(validate(&payload).is_ok());
//! ```

pub mod config;
pub mod core;
pub mod factory;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        CreditCardInfo, NewPayment, Payment, PaymentFilter, PaymentMethod, PaymentService,
        PaymentType, PaymentsError, PaypalInfo, Rejection, ValidatedPayment, parse_payment,
        validate,
    };

    // === Storage ===
    pub use crate::storage::InMemoryPaymentService;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresPaymentService;

    // === Config ===
    pub use crate::config::{ServiceConfig, StorageBackend};

    // === Server ===
    pub use crate::server::{PaymentsState, ServerBuilder};

    // === Fixtures ===
    pub use crate::factory::PaymentFactory;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::{
        Router,
        routing::{delete, get, post, put},
    };
}
