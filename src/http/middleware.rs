//! Request logging and counting middleware.
//!
//! Applied with `route_layer`, so it only runs for matched routes; requests
//! that hit the 404 fallback bypass it entirely. Per matched request, in
//! order:
//! 1. log receipt (method + path)
//! 2. bump the GET or POST counter and log the snapshot (other methods,
//!    DELETE included, are deliberately not counted)
//! 3. after the handler's response is produced, log completion exactly once,
//!    whether the handler succeeded or answered with an error status

use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

use crate::http::server::AppState;

pub async fn request_log_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    info!(method = %method, path = %path, "received request");

    if method == Method::GET {
        state.counters.record_get();
    } else if method == Method::POST {
        state.counters.record_post();
    }
    let (get_count, post_count) = state.counters.snapshot();
    info!(get_count, post_count, "processed request count");

    let response = next.run(req).await;

    info!(
        method = %method,
        path = %path,
        status = %response.status(),
        "sending response"
    );

    response
}
