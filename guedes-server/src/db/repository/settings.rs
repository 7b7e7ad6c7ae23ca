//! Store Settings Repository (Singleton)

use super::{RepoError, RepoResult};
use shared::models::{StoreSettings, StoreSettingsUpdate};
use sqlx::SqlitePool;

const SINGLETON_ID: i64 = 1;

const SETTINGS_SELECT: &str =
    "SELECT id, store_name, store_address, printer_ip, printer_port, updated_at FROM store_settings WHERE id = ?";

pub async fn get(pool: &SqlitePool) -> RepoResult<Option<StoreSettings>> {
    let row = sqlx::query_as::<_, StoreSettings>(SETTINGS_SELECT)
        .bind(SINGLETON_ID)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Fetch the settings row, creating the default one on first access
pub async fn get_or_create(pool: &SqlitePool) -> RepoResult<StoreSettings> {
    if let Some(settings) = get(pool).await? {
        return Ok(settings);
    }

    let defaults = StoreSettings::default();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT OR IGNORE INTO store_settings (id, store_name, store_address, printer_ip, printer_port, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(SINGLETON_ID)
    .bind(&defaults.store_name)
    .bind(&defaults.store_address)
    .bind(&defaults.printer_ip)
    .bind(defaults.printer_port)
    .bind(now)
    .execute(pool)
    .await?;

    get(pool)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create store settings".into()))
}

pub async fn update(pool: &SqlitePool, data: StoreSettingsUpdate) -> RepoResult<StoreSettings> {
    // Make sure the row exists before patching it
    get_or_create(pool).await?;

    let now = shared::util::now_millis();
    sqlx::query(
        "UPDATE store_settings SET store_name = COALESCE(?1, store_name), store_address = COALESCE(?2, store_address), printer_ip = COALESCE(?3, printer_ip), printer_port = COALESCE(?4, printer_port), updated_at = ?5 WHERE id = ?6",
    )
    .bind(&data.store_name)
    .bind(&data.store_address)
    .bind(&data.printer_ip)
    .bind(data.printer_port)
    .bind(now)
    .bind(SINGLETON_ID)
    .execute(pool)
    .await?;

    get(pool)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to read settings after update".into()))
}
