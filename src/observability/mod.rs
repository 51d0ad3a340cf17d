//! Observability subsystem.
//!
//! # Responsibilities
//! - Track GET/POST traffic counters for the request-log middleware
//!
//! # Design Decisions
//! - Counters are owned by the application state and injected, never global
//! - Uses tracing crate for structured logging (initialized in main)

pub mod counters;

pub use counters::RequestCounters;
