//! Payments REST service binary
//!
//! Reads the YAML file named by `PAYMENTS_CONFIG` (optional), applies
//! environment overrides, then serves until Ctrl+C or SIGTERM.

use anyhow::Result;
use payments::config::{ServiceConfig, StorageBackend, init_logging};
use payments::core::PaymentService;
use payments::server::ServerBuilder;
use payments::storage::InMemoryPaymentService;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::var("PAYMENTS_CONFIG").ok();
    let config = ServiceConfig::load(config_path.as_deref())?;

    init_logging(&config.logging);
    tracing::info!(backend = ?config.database.backend, "Configuration loaded");

    let service = build_service(&config).await?;
    let addr = config.server.address();

    ServerBuilder::new()
        .with_shared_service(service)
        .serve(&addr)
        .await
}

async fn build_service(config: &ServiceConfig) -> Result<Arc<dyn PaymentService>> {
    match config.database.backend {
        StorageBackend::InMemory => Ok(Arc::new(InMemoryPaymentService::new())),
        StorageBackend::Postgres => connect_postgres(config).await,
    }
}

#[cfg(feature = "postgres")]
async fn connect_postgres(config: &ServiceConfig) -> Result<Arc<dyn PaymentService>> {
    use anyhow::Context;
    use payments::storage::{PostgresPaymentService, postgres::ensure_schema};
    use sqlx::postgres::PgPoolOptions;

    let url = config
        .database
        .url
        .as_deref()
        .context("database.url is required for the postgres backend")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(url)
        .await
        .context("Failed to connect to PostgreSQL")?;
    ensure_schema(&pool).await?;

    tracing::info!("Connected to PostgreSQL");
    Ok(Arc::new(PostgresPaymentService::new(pool)))
}

#[cfg(not(feature = "postgres"))]
async fn connect_postgres(_config: &ServiceConfig) -> Result<Arc<dyn PaymentService>> {
    anyhow::bail!("the postgres backend requires building with the `postgres` feature")
}
