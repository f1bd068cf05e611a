//! Route definitions for the catalog HTTP API.
//!
//! The route table is static: each (method, path) pair binds to exactly one
//! handler. The router receives `AppState` and passes it to all handlers
//! via Axum's `State` extractor.

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Layer order (outermost first): access log, metrics, CORS, trace. Both
/// instrumentation wrappers therefore observe the final response for every
/// request, including error responses produced further in.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", product_routes())
        .route("/metrics", get(handlers::metrics::scrape))
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::metrics::record_request_metrics,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::logging::access_log,
        ))
        .with_state(state)
}

/// Product CRUD endpoints.
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(handlers::product::list_products).post(handlers::product::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::product::get_product)
                .put(handlers::product::update_product)
                .delete(handlers::product::delete_product),
        )
}

/// Health check endpoints.
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
