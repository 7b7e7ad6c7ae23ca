//! Order number sequence (singleton counter row)
//!
//! Order numbers are strictly increasing, gap-free and unique across
//! the whole installation. The increment runs against the counter row
//! inside the caller's transaction: the assigned number commits (or
//! rolls back) atomically with the order insert, and two concurrent
//! submissions can never observe the same number.

use super::{RepoError, RepoResult};
use sqlx::SqliteConnection;

const SINGLETON_ID: i64 = 1;

/// Atomically increment the counter and return the assigned number
///
/// Takes a transaction connection: number assignment and order insert
/// must commit together.
pub async fn next_order_number(conn: &mut SqliteConnection) -> RepoResult<i64> {
    let now = shared::util::now_millis();
    let number = sqlx::query_scalar::<_, i64>(
        "UPDATE order_counter SET next_number = next_number + 1, updated_at = ?1 WHERE id = ?2 RETURNING next_number",
    )
    .bind(now)
    .bind(SINGLETON_ID)
    .fetch_one(conn)
    .await
    .map_err(|e| match e {
        // The counter row is seeded by the migration; its absence is a
        // broken installation, not a per-request condition.
        sqlx::Error::RowNotFound => {
            RepoError::Database("order_counter row missing (schema not migrated?)".into())
        }
        other => RepoError::Database(other.to_string()),
    })?;
    Ok(number)
}

/// Current value of the counter (last assigned number)
pub async fn current(conn: &mut SqliteConnection) -> RepoResult<i64> {
    let number =
        sqlx::query_scalar::<_, i64>("SELECT next_number FROM order_counter WHERE id = ?")
            .bind(SINGLETON_ID)
            .fetch_one(conn)
            .await?;
    Ok(number)
}
