//! Persistence subsystem.
//!
//! # Responsibilities
//! - Define the storage seam the handlers depend on (`ProductStore`)
//! - Provide the default in-memory engine (`MemoryStore`)
//!
//! # Design Decisions
//! - Handlers only see the trait; any engine (in-memory, file, database)
//!   substitutes behind it without touching handler logic
//! - Every operation completes exactly once, with a value or a `StoreError`
//! - Errors are opaque to callers: the HTTP layer wraps them, it never
//!   interprets them

pub mod memory;

use async_trait::async_trait;

use crate::products::model::{Product, ProductFields};

pub use memory::MemoryStore;

/// Error returned by a storage engine.
///
/// The HTTP layer does not distinguish subtypes; anything here surfaces as a
/// server error, never silently swallowed.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Storage seam for the product collection.
///
/// The store owns product storage outright; the service holds no copy of the
/// collection across requests. `create` assigns the product id.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Return every stored product, in whatever order the engine keeps them.
    async fn find(&self) -> Result<Vec<Product>, StoreError>;

    /// Return the product with the given id, if any.
    async fn find_one(&self, id: &str) -> Result<Option<Product>, StoreError>;

    /// Persist a new product, assigning its id.
    async fn create(&self, fields: ProductFields) -> Result<Product, StoreError>;

    /// Remove the product with the given id. Removing an absent id is not an
    /// error.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Remove every stored product.
    async fn delete_all(&self) -> Result<(), StoreError>;
}
