//! Product repository implementation.
//!
//! Every operation runs inside its own tracing span. The span is created
//! before any I/O and closed by drop on every exit path, so a failed query
//! can never leak an open span. Query failures are annotated on the span
//! (`otel.status_code` / `otel.status_message`) and re-raised unchanged as
//! [`AppError`]; absence of a row is a `None` sentinel, not an error.

use sqlx::PgPool;
use tracing::field::{Empty, display};
use tracing::{Instrument, Span, info_span};

use catalog_core::error::{AppError, ErrorKind};
use catalog_core::result::AppResult;
use catalog_entity::product::{Product, ProductDraft};

/// Repository for product CRUD operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all products in storage order.
    pub async fn find_all(&self) -> AppResult<Vec<Product>> {
        let span = info_span!(
            "product.find_all",
            db.table = "products",
            db.operation = "SELECT",
            db.rows = Empty,
            otel.status_code = Empty,
            otel.status_message = Empty,
        );

        async {
            let products = sqlx::query_as::<_, Product>("SELECT * FROM products")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| annotate(e, "Failed to list products"))?;

            Span::current().record("db.rows", products.len() as u64);
            Ok(products)
        }
        .instrument(span)
        .await
    }

    /// Find a product by primary key. Returns `None` when no row matches.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        let span = info_span!(
            "product.find_by_id",
            db.table = "products",
            db.operation = "SELECT",
            product.id = id,
            db.rows = Empty,
            otel.status_code = Empty,
            otel.status_message = Empty,
        );

        async {
            let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| annotate(e, "Failed to load product"))?;

            Span::current().record("db.rows", product.is_some() as u64);
            Ok(product)
        }
        .instrument(span)
        .await
    }

    /// Insert a new product and return the stored row, including the
    /// generated id and timestamps.
    pub async fn create(&self, draft: &ProductDraft) -> AppResult<Product> {
        let span = info_span!(
            "product.create",
            db.table = "products",
            db.operation = "INSERT",
            product.name = %draft.name,
            product.price = %draft.price,
            product.id = Empty,
            otel.status_code = Empty,
            otel.status_message = Empty,
        );

        async {
            let product = sqlx::query_as::<_, Product>(
                "INSERT INTO products (name, description, price) \
                 VALUES ($1, $2, $3) \
                 RETURNING *",
            )
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(draft.price)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| annotate(e, "Failed to create product"))?;

            Span::current().record("product.id", product.id);
            Ok(product)
        }
        .instrument(span)
        .await
    }

    /// Replace `name`, `description`, and `price` for the given product.
    ///
    /// Returns the persisted row (so `updated_at` reflects the write), or
    /// `None` when no row matched the id.
    pub async fn update(&self, id: i64, draft: &ProductDraft) -> AppResult<Option<Product>> {
        let span = info_span!(
            "product.update",
            db.table = "products",
            db.operation = "UPDATE",
            product.id = id,
            product.name = %draft.name,
            product.price = %draft.price,
            db.rows_affected = Empty,
            otel.status_code = Empty,
            otel.status_message = Empty,
        );

        async {
            let product = sqlx::query_as::<_, Product>(
                "UPDATE products SET name = $2, description = $3, price = $4, \
                                     updated_at = NOW() \
                 WHERE id = $1 RETURNING *",
            )
            .bind(id)
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(draft.price)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| annotate(e, "Failed to update product"))?;

            Span::current().record("db.rows_affected", product.is_some() as u64);
            Ok(product)
        }
        .instrument(span)
        .await
    }

    /// Delete a product by id. Returns `true` iff exactly one row was
    /// removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let span = info_span!(
            "product.delete",
            db.table = "products",
            db.operation = "DELETE",
            product.id = id,
            db.rows_affected = Empty,
            otel.status_code = Empty,
            otel.status_message = Empty,
        );

        async {
            let result = sqlx::query("DELETE FROM products WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| annotate(e, "Failed to delete product"))?;

            Span::current().record("db.rows_affected", result.rows_affected());
            Ok(result.rows_affected() == 1)
        }
        .instrument(span)
        .await
    }
}

/// Record the failure on the current operation span and wrap the sqlx error.
fn annotate(err: sqlx::Error, message: &str) -> AppError {
    let span = Span::current();
    span.record("otel.status_code", "ERROR");
    span.record("otel.status_message", display(&err));
    AppError::with_source(ErrorKind::Database, message, err)
}
