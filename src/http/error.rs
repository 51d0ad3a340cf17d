//! API error type and its HTTP response mapping.
//!
//! # Design Decisions
//! - Validation and not-found cases map to specific statuses with fixed shapes
//! - Store errors are wrapped, logged, and answered with a bare 500; they are
//!   never interpreted and never silently swallowed
//! - 404 responses carry an empty body (the resource simply is not there)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::store::StoreError;

/// Failure outcome of a product handler.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required creation field was absent.
    #[error("Name, Price, and Quantity must be supplied")]
    MissingFields,

    /// The requested product id is not in storage.
    #[error("product not found")]
    NotFound,

    /// The storage engine reported a failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Body shape for 400-class responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingFields => {
                let body = ErrorBody {
                    code: "BadRequest",
                    message: self.to_string(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Store(e) => {
                tracing::error!(error = %e, "store operation failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
