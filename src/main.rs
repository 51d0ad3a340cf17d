//! Product CRUD HTTP Service
//!
//! A minimal create/read/delete service over a single product resource,
//! built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                PRODUCT SERVICE                │
//!                      │                                               │
//!   Client Request     │  ┌────────┐   ┌────────────┐   ┌──────────┐  │
//!   ──────────────────▶│  │  http  │──▶│ middleware │──▶│ products │  │
//!                      │  │ server │   │ log+count  │   │ handlers │  │
//!                      │  └────────┘   └────────────┘   └────┬─────┘  │
//!                      │                                      │        │
//!                      │                                      ▼        │
//!   Client Response    │                               ┌──────────┐   │
//!   ◀──────────────────│◀──────────────────────────────│  store   │   │
//!                      │                               │ (trait)  │   │
//!                      │                               └──────────┘   │
//!                      │  ┌─────────────────────────────────────────┐ │
//!                      │  │ config        observability (counters)  │ │
//!                      │  └─────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod products;
pub mod store;

// Cross-cutting concerns
pub mod observability;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::loader::load_config;
use crate::config::ServiceConfig;
use crate::http::HttpServer;
use crate::store::MemoryStore;

#[derive(Debug, Parser)]
#[command(name = "product-api", about = "Product CRUD HTTP service")]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    // Initialize tracing subscriber; RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(config.observability.env_filter_directives())
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("product-api v0.1.0 starting");

    tracing::info!(
        server_name = %config.server.server_name,
        bind_address = %config.server.bind_address(),
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(config.server.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        server_name = %config.server.server_name,
        address = %local_addr,
        "Listening for connections"
    );
    print_resource_banner();

    // Create and run HTTP server against the in-memory engine
    let store = Arc::new(MemoryStore::new());
    let server = HttpServer::new(config, store);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Log the mounted resource table at startup.
fn print_resource_banner() {
    tracing::info!("**** Resources: ****");
    tracing::info!(" GET    /products");
    tracing::info!(" GET    /products/{{id}}");
    tracing::info!(" POST   /products");
    tracing::info!(" DELETE /products/{{id}}");
    tracing::info!(" DELETE /products");
}
