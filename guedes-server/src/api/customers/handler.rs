//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::customer;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{Customer, CustomerCreate, CustomerUpdate};

/// GET /api/customers
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = customer::find_all(&state.pool).await?;
    Ok(Json(customers))
}

/// GET /api/customers/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Customer>> {
    let customer = customer::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Customer {id}")))?;
    Ok(Json(customer))
}

/// POST /api/customers
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<CustomerCreate>,
) -> AppResult<Json<Customer>> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&data.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&data.address, "address", MAX_ADDRESS_LEN)?;
    let created = customer::create(&state.pool, data).await?;
    Ok(Json(created))
}

/// PUT /api/customers/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(data): Json<CustomerUpdate>,
) -> AppResult<Json<Customer>> {
    if let Some(ref name) = data.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&data.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&data.address, "address", MAX_ADDRESS_LEN)?;
    let updated = customer::update(&state.pool, id, data).await?;
    Ok(Json(updated))
}

/// DELETE /api/customers/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let removed = customer::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::not_found(format!("Customer {id}")));
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}
