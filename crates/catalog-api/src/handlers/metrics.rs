//! Metrics scrape endpoint.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /metrics
///
/// Serves the registry in text exposition format; the content type comes
/// from the encoder rather than being hardcoded here.
pub async fn scrape(State(state): State<AppState>) -> Response {
    match state.metrics.encode() {
        Ok((content_type, body)) => {
            ([(header::CONTENT_TYPE, content_type)], body).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}
