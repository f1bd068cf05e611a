//! Idempotent startup schema bootstrap.
//!
//! The service owns a single table and creates it on boot rather than
//! shipping migration tooling. `updated_at` is maintained by the
//! repository's UPDATE statements.

use sqlx::PgPool;
use tracing::info;

use catalog_core::error::{AppError, ErrorKind};

const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id          BIGSERIAL PRIMARY KEY,
    name        VARCHAR(255) NOT NULL,
    description TEXT,
    price       NUMERIC(10, 2) NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

/// Create the `products` table if it does not already exist.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(CREATE_PRODUCTS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to create products table: {e}"),
                e,
            )
        })?;

    info!("Products table created or already exists");
    Ok(())
}
