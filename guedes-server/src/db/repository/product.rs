//! Product Repository

use super::{RepoError, RepoResult};
use shared::models::{Product, ProductCreate, ProductUpdate};
use sqlx::SqlitePool;

const PRODUCT_SELECT: &str =
    "SELECT id, name, type, price_p, price_m, price_g, price, is_active, created_at, updated_at FROM product";

/// Find all products, optionally restricted to active ones
pub async fn find_all(pool: &SqlitePool, active_only: bool) -> RepoResult<Vec<Product>> {
    let sql = if active_only {
        format!("{PRODUCT_SELECT} WHERE is_active = 1 ORDER BY type, name")
    } else {
        format!("{PRODUCT_SELECT} ORDER BY type, name")
    };
    let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

/// Find active products (the attendant-facing catalog view)
pub async fn find_active(pool: &SqlitePool) -> RepoResult<Vec<Product>> {
    find_all(pool, true).await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Product>> {
    let sql = format!("{PRODUCT_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Product>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: ProductCreate) -> RepoResult<Product> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO product (id, name, type, price_p, price_m, price_g, price, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 1, ?8, ?8)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(data.product_type)
    .bind(data.price_p.unwrap_or(0.0))
    .bind(data.price_m.unwrap_or(0.0))
    .bind(data.price_g.unwrap_or(0.0))
    .bind(data.price.unwrap_or(0.0))
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create product".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ProductUpdate) -> RepoResult<Product> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE product SET name = COALESCE(?1, name), price_p = COALESCE(?2, price_p), price_m = COALESCE(?3, price_m), price_g = COALESCE(?4, price_g), price = COALESCE(?5, price), is_active = COALESCE(?6, is_active), updated_at = ?7 WHERE id = ?8",
    )
    .bind(&data.name)
    .bind(data.price_p)
    .bind(data.price_m)
    .bind(data.price_g)
    .bind(data.price)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
}

/// Soft-delete: historical orders keep referencing the product by name
pub async fn deactivate(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query("UPDATE product SET is_active = 0, updated_at = ? WHERE id = ? AND is_active = 1")
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
