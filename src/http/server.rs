//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the product dispatch table
//! - Wire up middleware (request log + counters, tracing)
//! - Bind the server to a listener and serve until shutdown
//!
//! # Design Decisions
//! - The dispatch table is fixed at construction; both DELETE routes are
//!   registered independently, exactly once
//! - The log/count middleware is a `route_layer`: unmatched requests get the
//!   plain 404 fallback without touching the middleware or the counters
//! - No request timeouts and no retries; a stalled store call stalls only
//!   that request

use std::sync::Arc;

use axum::routing::get;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::http::middleware::request_log_middleware;
use crate::observability::RequestCounters;
use crate::products::handlers::{
    create_product, delete_product, delete_products, get_product, list_products,
};
use crate::store::ProductStore;

/// Application state injected into handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
    pub counters: Arc<RequestCounters>,
}

/// Build the Axum router with the product dispatch table and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/products",
            get(list_products)
                .post(create_product)
                .delete(delete_products),
        )
        .route("/products/{id}", get(get_product).delete(delete_product))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            request_log_middleware,
        ))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// HTTP server for the product service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server around the given store.
    pub fn new(config: ServiceConfig, store: Arc<dyn ProductStore>) -> Self {
        let state = AppState {
            store,
            counters: Arc::new(RequestCounters::new()),
        };
        let router = build_router(state);
        Self { router, config }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            server_name = %self.config.server.server_name,
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
