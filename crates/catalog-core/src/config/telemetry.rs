//! Tracing export configuration.
//!
//! The span collector is an external collaborator; only its coordinates live
//! here. Spans themselves are emitted through the `tracing` subscriber
//! installed at startup.

use serde::{Deserialize, Serialize};

/// Trace exporter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name attached to exported spans.
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// OTLP collector endpoint (e.g. `http://jaeger:4318/v1/traces`).
    /// When unset, spans stay local to the logging subscriber.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            otlp_endpoint: None,
        }
    }
}

fn default_service_name() -> String {
    "catalog-api".to_string()
}
