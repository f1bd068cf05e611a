//! Tracing subscriber initialization.

use tracing_subscriber::{EnvFilter, fmt};

use catalog_core::config::logging::LoggingConfig;
use catalog_core::config::telemetry::TelemetryConfig;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` overrides the configured level. The collector endpoint is an
/// external collaborator; when configured it is surfaced at startup so
/// operators can see where spans are headed.
pub fn init(logging: &LoggingConfig, telemetry: &TelemetryConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    match logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }

    if let Some(endpoint) = &telemetry.otlp_endpoint {
        tracing::info!(
            endpoint = %endpoint,
            service = %telemetry.service_name,
            "Trace collector endpoint configured"
        );
    }
}
