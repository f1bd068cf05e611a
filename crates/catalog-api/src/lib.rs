//! # catalog-api
//!
//! Axum HTTP layer for the catalog service: application state, route table,
//! request handlers, DTOs, error-to-status mapping, and the metrics and
//! access-log middleware that observe every request exactly once.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
