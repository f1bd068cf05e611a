//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use catalog_core::config::AppConfig;
use catalog_database::DatabasePool;
use catalog_database::repositories::ProductRepository;
use catalog_telemetry::{AccessLogWriter, HttpMetrics};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All components are
/// constructed once at process init and injected here; nothing lives in an
/// ad-hoc global. Fields are `Arc`-wrapped (or internally reference-counted)
/// for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db: DatabasePool,
    /// Product repository.
    pub product_repo: Arc<ProductRepository>,
    /// HTTP metrics registry.
    pub metrics: Arc<HttpMetrics>,
    /// Append-only access-log sink.
    pub access_log: Arc<AccessLogWriter>,
}
