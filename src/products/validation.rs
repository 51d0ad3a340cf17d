//! Creation payload validation.
//!
//! # Design Decisions
//! - Pure function over the typed payload; no I/O, no store access
//! - Presence check only: empty strings and zeros are valid values
//! - Runs before any store call; on failure the store is never invoked

use crate::http::error::ApiError;
use crate::products::model::{CreateProduct, ProductFields};

/// Check that name, price, and quantity are all supplied.
pub fn validate_create(payload: CreateProduct) -> Result<ProductFields, ApiError> {
    match (payload.name, payload.price, payload.quantity) {
        (Some(name), Some(price), Some(quantity)) => Ok(ProductFields {
            name,
            price,
            quantity,
        }),
        _ => Err(ApiError::MissingFields),
    }
}
