//! Product resource handlers.
//!
//! One handler per (method, path) binding. Each orchestrates the validator
//! and the store, then maps the outcome to an HTTP status:
//! - list:          GET /products          → 200 array
//! - get:           GET /products/{id}     → 200 object, 404 if absent
//! - create:        POST /products         → 201 created, 400 on missing fields
//! - delete by id:  DELETE /products/{id}  → 204, no existence check
//! - delete all:    DELETE /products       → 204
//!
//! Store errors are not interpreted here; they bubble up as `ApiError::Store`
//! and surface as a server error.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::products::model::{CreateProduct, Product};
use crate::products::validation::validate_create;

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.store.find().await?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    debug!(id = %id, "looking up product");
    match state.store.find_one(&id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProduct>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    // Validation precedes the store call; on failure the store is never hit.
    let fields = validate_create(payload)?;
    let product = state.store.create(fields).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    // No existence check: deleting an absent id still answers 204.
    state.store.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_products(
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    if let Err(e) = state.store.delete_all().await {
        tracing::error!(error = %e, "failed to delete all products");
        return Err(e.into());
    }
    Ok(StatusCode::NO_CONTENT)
}
