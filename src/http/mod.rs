//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, dispatch table)
//!     → middleware.rs (receipt log, GET/POST counters, completion log)
//!     → products handlers
//!     → error.rs (status mapping for failures)
//!     → Send to client
//! ```

pub mod error;
pub mod middleware;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, HttpServer};
