//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::product;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::{Product, ProductCreate, ProductUpdate};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Restrict to the attendant-facing catalog view
    #[serde(default)]
    pub active_only: bool,
}

/// GET /api/products
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Product>>> {
    let products = product::find_all(&state.pool, params.active_only).await?;
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let product = product::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {id}")))?;
    Ok(Json(product))
}

/// POST /api/products
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    let created = product::create(&state.pool, data).await?;
    Ok(Json(created))
}

/// PUT /api/products/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(data): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    if let Some(ref name) = data.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    let updated = product::update(&state.pool, id, data).await?;
    Ok(Json(updated))
}

/// DELETE /api/products/{id}
///
/// Soft delete; the product stays referenced by historical orders.
pub async fn deactivate(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let removed = product::deactivate(&state.pool, id).await?;
    if !removed {
        return Err(AppError::not_found(format!("Product {id}")));
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}
