//! # catalog-telemetry
//!
//! Observability singletons for the catalog service: the Prometheus metric
//! registry, structured-logging initialization, and the append-only HTTP
//! access-log writer. All three are constructed once at startup and injected
//! into the HTTP layer through application state.

pub mod access_log;
pub mod logging;
pub mod metrics;

pub use access_log::{AccessLogRecord, AccessLogWriter};
pub use metrics::HttpMetrics;
