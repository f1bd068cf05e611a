//! Request metrics middleware.
//!
//! Times every request and records one histogram observation plus one
//! counter increment labeled `(method, route, status_code)`. The route
//! label is the matched pattern (`/api/products/{id}`), so per-id URLs do
//! not explode label cardinality. Downstream failures have already been
//! materialized into responses by the error mapping, so the observation
//! runs exactly once per request on every path.

use std::time::Instant;

use axum::extract::{MatchedPath, Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::state::AppState;

/// Observe duration and count for one request.
pub async fn record_request_metrics(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());
    let start = Instant::now();

    let response = next.run(request).await;

    state.metrics.observe_request(
        method.as_str(),
        &route,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}
