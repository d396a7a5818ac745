//! ServerBuilder for fluent API to build HTTP servers

use super::handlers::PaymentsState;
use super::rest::RestExposure;
use crate::core::PaymentService;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the payments HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_payment_service(InMemoryPaymentService::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    payment_service: Option<Arc<dyn PaymentService>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            payment_service: None,
            custom_routes: Vec::new(),
        }
    }

    /// Set the payment service (required)
    pub fn with_payment_service(mut self, service: impl PaymentService + 'static) -> Self {
        self.payment_service = Some(Arc::new(service));
        self
    }

    /// Set a payment service that is already shared
    ///
    /// Useful when the caller keeps a handle to the same backend, e.g. to
    /// pick a backend at runtime in `main`.
    pub fn with_shared_service(mut self, service: Arc<dyn PaymentService>) -> Self {
        self.payment_service = Some(service);
        self
    }

    /// Add custom routes to the server
    ///
    /// Routes are merged next to the payment routes; their paths must not
    /// collide with `/`, `/health`, `/healthz` or `/payments/...`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use axum::{Router, routing::get};
    ///
    /// let extra = Router::new().route("/version", get(|| async { "1.0" }));
    ///
    /// ServerBuilder::new()
    ///     .with_payment_service(service)
    ///     .with_custom_routes(extra)
    ///     .build()?;
    /// ```
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final REST router
    pub fn build(self) -> Result<Router> {
        let service = self.payment_service.ok_or_else(|| {
            anyhow::anyhow!("PaymentService is required. Call .with_payment_service()")
        })?;

        RestExposure::build_router(PaymentsState::new(service), self.custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
