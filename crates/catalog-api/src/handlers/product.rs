//! Product CRUD handlers.
//!
//! Handlers translate HTTP input into repository calls and map the outcome:
//! `None` from the repository becomes 404, validation failures become 400,
//! and any repository error propagates as a 500 with its message in the
//! body via the shared [`ApiError`] response mapping.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use catalog_core::error::AppError;
use catalog_entity::product::Product;

use crate::dto::request::ProductPayload;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.product_repo.find_all().await?;
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
    match state.product_repo.find_by_id(id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(AppError::not_found("Product not found").into()),
    }
}

/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let draft = payload.into_draft()?;
    let product = state.product_repo.create(&draft).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>, ApiError> {
    let draft = payload.into_draft()?;
    match state.product_repo.update(id, &draft).await? {
        Some(product) => Ok(Json(product)),
        None => Err(AppError::not_found("Product not found").into()),
    }
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.product_repo.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Product not found").into())
    }
}
