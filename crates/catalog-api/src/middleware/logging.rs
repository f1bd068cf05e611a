//! Access-log middleware.
//!
//! Buffers the request and response bodies so one structured record per
//! completed request can be appended to the durable sink. Both bodies are
//! reconstructed byte-for-byte afterwards; the client always receives
//! exactly what the handler produced. Every failure inside this wrapper is
//! confined to it: the record may be degraded or dropped, the request is
//! never affected.

use std::net::SocketAddr;
use std::time::Instant;

use axum::body::{Body, Bytes};
use axum::extract::{ConnectInfo, Request, State};
use axum::http::header::USER_AGENT;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use tracing::warn;

use catalog_telemetry::AccessLogRecord;

use crate::state::AppState;

/// Append one access-log record per completed request.
pub async fn access_log(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let url = request.uri().to_string();
    let user_agent = request
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let client_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.to_string());

    let (parts, body) = request.into_parts();
    let request_bytes = buffer_body(body, "request").await;
    let request = Request::from_parts(parts, Body::from(request_bytes.clone()));

    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let response_bytes = buffer_body(body, "response").await;
    let response = Response::from_parts(parts, Body::from(response_bytes.clone()));

    let capture_limit = state.config.logging.body_capture_limit;
    let record = AccessLogRecord {
        timestamp: Utc::now(),
        method,
        url,
        status: response.status().as_u16(),
        duration_ms: start.elapsed().as_millis() as u64,
        request_body: capture_body(&request_bytes, capture_limit),
        response_body: capture_body(&response_bytes, capture_limit),
        user_agent,
        client_addr,
    };
    state.access_log.append(&record);

    response
}

/// Collect a body into memory. A stream failure yields an empty buffer and
/// a diagnostic warning instead of an error response.
async fn buffer_body(body: Body, direction: &str) -> Bytes {
    match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, direction, "Failed to buffer body for access log");
            Bytes::new()
        }
    }
}

/// Render captured bytes for the log record: JSON when parseable, a string
/// otherwise, truncated past the capture limit.
fn capture_body(bytes: &Bytes, limit: usize) -> serde_json::Value {
    if bytes.is_empty() {
        return serde_json::Value::Null;
    }
    if bytes.len() > limit {
        return serde_json::Value::String(format!("<{} bytes truncated>", bytes.len()));
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
