//! Product CRUD HTTP Service Library

pub mod config;
pub mod http;
pub mod observability;
pub mod products;
pub mod store;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use observability::RequestCounters;
pub use store::{MemoryStore, ProductStore};
