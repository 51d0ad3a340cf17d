//! Product data model.

use serde::{Deserialize, Serialize};

/// The persisted product resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque identifier, assigned by the store on creation.
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: f64,
}

/// Creation payload as received on the wire.
///
/// Every field is optional so that an absent field deserializes rather than
/// rejecting the request outright; the validator decides what is missing.
/// An explicit empty string or zero counts as present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProduct {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
}

/// A creation payload that passed validation: all fields present.
/// The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub quantity: f64,
}
