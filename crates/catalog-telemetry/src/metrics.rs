//! HTTP request metrics.
//!
//! A single [`HttpMetrics`] instance owns the registry and both metric
//! families. It is created at process init and shared through application
//! state rather than living in a global.

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};

use catalog_core::error::{AppError, ErrorKind};
use catalog_core::result::AppResult;

/// Histogram buckets for request durations, in seconds.
const DURATION_BUCKETS: &[f64] = &[0.1, 0.5, 1.0, 2.0, 5.0];

/// Process-wide HTTP metrics registry.
///
/// Both families are labeled `(method, route, status_code)` where `route`
/// is the matched route pattern, not the raw request path. Samples
/// accumulate monotonically for the process lifetime.
#[derive(Clone)]
pub struct HttpMetrics {
    registry: Registry,
    request_duration: HistogramVec,
    requests_total: IntCounterVec,
}

impl HttpMetrics {
    /// Build the registry and register both metric families.
    pub fn new() -> AppResult<Self> {
        let registry = Registry::new();

        let request_duration = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "Duration of HTTP requests in seconds",
            )
            .buckets(DURATION_BUCKETS.to_vec()),
            &["method", "route", "status_code"],
        )
        .map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Failed to build duration histogram", e)
        })?;

        let requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "route", "status_code"],
        )
        .map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Failed to build request counter", e)
        })?;

        registry
            .register(Box::new(request_duration.clone()))
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to register histogram", e)
            })?;
        registry
            .register(Box::new(requests_total.clone()))
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to register counter", e)
            })?;

        Ok(Self {
            registry,
            request_duration,
            requests_total,
        })
    }

    /// Record one completed request: one histogram observation and one
    /// counter increment with identical labels.
    pub fn observe_request(&self, method: &str, route: &str, status: u16, elapsed_seconds: f64) {
        let status = status.to_string();
        let labels = [method, route, status.as_str()];

        self.request_duration
            .with_label_values(&labels)
            .observe(elapsed_seconds);
        self.requests_total.with_label_values(&labels).inc();
    }

    /// Render the registry in Prometheus text exposition format.
    ///
    /// Returns `(content_type, body)`; the content type comes from the
    /// encoder so the scrape endpoint never hardcodes it.
    pub fn encode(&self) -> AppResult<(String, String)> {
        let encoder = TextEncoder::new();
        let families = self.registry.gather();

        let mut buffer = Vec::new();
        encoder.encode(&families, &mut buffer).map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Failed to encode metrics", e)
        })?;
        let body = String::from_utf8(buffer).map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Metrics exposition was not UTF-8", e)
        })?;

        Ok((encoder.format_type().to_string(), body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_and_histogram_grow_together() {
        let metrics = HttpMetrics::new().unwrap();

        for _ in 0..3 {
            metrics.observe_request("GET", "/api/products", 200, 0.05);
        }
        metrics.observe_request("GET", "/api/products", 500, 0.2);

        let count = metrics
            .requests_total
            .with_label_values(&["GET", "/api/products", "200"])
            .get();
        assert_eq!(count, 3);

        let (_, body) = metrics.encode().unwrap();
        assert!(body.contains(
            r#"http_request_duration_seconds_count{method="GET",route="/api/products",status_code="200"} 3"#
        ));
        assert!(body.contains(
            r#"http_request_duration_seconds_count{method="GET",route="/api/products",status_code="500"} 1"#
        ));
    }

    #[test]
    fn test_exposition_contains_both_families() {
        let metrics = HttpMetrics::new().unwrap();
        metrics.observe_request("DELETE", "/api/products/{id}", 204, 0.01);

        let (content_type, body) = metrics.encode().unwrap();
        assert!(content_type.starts_with("text/plain"));
        assert!(body.contains("http_requests_total"));
        assert!(body.contains("http_request_duration_seconds"));
        assert!(body.contains(r#"route="/api/products/{id}""#));
    }
}
