//! # catalog-database
//!
//! PostgreSQL connection management, idempotent schema bootstrap, and the
//! span-instrumented product repository.

pub mod connection;
pub mod repositories;
pub mod schema;

pub use connection::DatabasePool;
