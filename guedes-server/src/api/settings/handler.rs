//! Store settings API Handlers
//!
//! One singleton row: store identity plus printer address.

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::settings;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_ADDRESS_LEN, MAX_NAME_LEN, validate_optional_text};
use shared::models::{StoreSettings, StoreSettingsUpdate};

/// GET /api/settings
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<StoreSettings>> {
    let store = settings::get_or_create(&state.pool).await?;
    Ok(Json(store))
}

/// PUT /api/settings
pub async fn update(
    State(state): State<ServerState>,
    Json(data): Json<StoreSettingsUpdate>,
) -> AppResult<Json<StoreSettings>> {
    validate_optional_text(&data.store_name, "store_name", MAX_NAME_LEN)?;
    validate_optional_text(&data.store_address, "store_address", MAX_ADDRESS_LEN)?;
    let updated = settings::update(&state.pool, data).await?;
    Ok(Json(updated))
}
