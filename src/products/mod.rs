//! Product resource subsystem.
//!
//! # Data Flow
//! ```text
//! routed request
//!     → handlers.rs (extract path/body, orchestrate store calls)
//!     → validation.rs (required-field check, create only)
//!     → store (find / find_one / create / delete)
//!     → HTTP response (status + JSON body)
//! ```

pub mod handlers;
pub mod model;
pub mod validation;

pub use model::{CreateProduct, Product, ProductFields};
