//! REST exposure for the payments service
//!
//! Turns a [`PaymentsState`] into an Axum `Router` carrying the health routes,
//! the payment resource routes and any custom routes, with JSON fallbacks for
//! unknown paths and unsupported methods.

use super::handlers::{self, PaymentsState};
use anyhow::Result;
use axum::{
    Router,
    routing::{delete, get, put},
};
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    ///
    /// # Arguments
    ///
    /// * `state` - Shared state holding the payment service
    /// * `custom_routes` - Additional custom routes to merge
    pub fn build_router(state: PaymentsState, custom_routes: Vec<Router>) -> Result<Router> {
        let mut app = Self::health_routes().merge(Self::payment_routes(state));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        // Must come after every merge: only routes present now get the fallback
        let app = app
            .method_not_allowed_fallback(handlers::method_not_allowed)
            .fallback(handlers::route_not_found)
            .layer(TraceLayer::new_for_http());

        Ok(app)
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(handlers::health_check))
            .route("/healthz", get(handlers::health_check))
    }

    fn payment_routes(state: PaymentsState) -> Router {
        Router::new()
            .route("/", get(handlers::index))
            .route(
                "/payments",
                get(handlers::list_payments).post(handlers::create_payment),
            )
            .route("/payments/reset", delete(handlers::reset_payments))
            .route(
                "/payments/{id}",
                get(handlers::get_payment)
                    .put(handlers::update_payment)
                    .delete(handlers::delete_payment),
            )
            .route("/payments/{id}/toggle", put(handlers::toggle_availability))
            .with_state(state)
    }
}
