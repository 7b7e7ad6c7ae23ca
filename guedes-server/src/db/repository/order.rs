//! Order Repository
//!
//! Orders are append-only. A row is written once at creation (items,
//! shared selections and the frozen total together, in one
//! transaction with the number assignment) and afterwards only the
//! `status` and `printed` columns change. Nothing is ever deleted.

use super::{RepoError, RepoResult, order_counter};
use shared::models::{CartItem, Order, OrderDraft, OrderStatus, OrderType};
use sqlx::SqlitePool;

const ORDER_SELECT: &str = "SELECT id, order_number, customer_name, is_company_order, order_type, delivery_address, items, salads, beverages, observations, total_price, status, attendant_code, attendant_name, printed, created_at FROM orders";

/// Raw row: the JSON columns come back as TEXT
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    order_number: i64,
    customer_name: String,
    is_company_order: bool,
    order_type: OrderType,
    delivery_address: Option<String>,
    items: String,
    salads: String,
    beverages: String,
    observations: Option<String>,
    total_price: f64,
    status: OrderStatus,
    attendant_code: String,
    attendant_name: String,
    printed: bool,
    created_at: i64,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepoError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let items: Vec<CartItem> = serde_json::from_str(&row.items)?;
        let salads: Vec<String> = serde_json::from_str(&row.salads)?;
        let beverages: Vec<String> = serde_json::from_str(&row.beverages)?;
        Ok(Order {
            id: row.id,
            order_number: row.order_number,
            customer_name: row.customer_name,
            is_company_order: row.is_company_order,
            order_type: row.order_type,
            delivery_address: row.delivery_address,
            items,
            salads,
            beverages,
            observations: row.observations,
            total_price: row.total_price,
            status: row.status,
            attendant_code: row.attendant_code,
            attendant_name: row.attendant_name,
            printed: row.printed,
            created_at: row.created_at,
        })
    }
}

/// Optional listing filters; both may combine
#[derive(Debug, Default, Clone)]
pub struct OrderFilter {
    pub attendant_code: Option<String>,
    pub status: Option<OrderStatus>,
}

/// Create an order from a validated draft with a precomputed total
///
/// Runs in a single transaction: number assignment, stamp and insert
/// commit together, so no order is ever half-created and concurrent
/// submissions get distinct, gap-free numbers.
pub async fn create(pool: &SqlitePool, draft: &OrderDraft, total_price: f64) -> RepoResult<Order> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    let items_json = serde_json::to_string(&draft.items)?;
    let salads_json = serde_json::to_string(&draft.salads)?;
    let beverages_json = serde_json::to_string(&draft.beverages)?;

    let mut tx = pool.begin().await?;

    let order_number = order_counter::next_order_number(&mut *tx).await?;

    sqlx::query(
        "INSERT INTO orders (id, order_number, customer_name, is_company_order, order_type, delivery_address, items, salads, beverages, observations, total_price, status, attendant_code, attendant_name, printed, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, 'pending', ?12, ?13, 0, ?14)",
    )
    .bind(id)
    .bind(order_number)
    .bind(&draft.customer_name)
    .bind(draft.is_company_order)
    .bind(draft.order_type)
    .bind(&draft.delivery_address)
    .bind(&items_json)
    .bind(&salads_json)
    .bind(&beverages_json)
    .bind(&draft.observations)
    .bind(total_price)
    .bind(&draft.attendant_code)
    .bind(&draft.attendant_name)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(order_id = id, order_number, "Order created");

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to read back created order".into()))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let sql = format!("{ORDER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, OrderRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.map(Order::try_from).transpose()
}

/// List orders, recency-first, with optional attendant/status filters
pub async fn find_all(pool: &SqlitePool, filter: &OrderFilter) -> RepoResult<Vec<Order>> {
    let mut sql = String::from(ORDER_SELECT);
    let mut clauses = Vec::new();
    if filter.attendant_code.is_some() {
        clauses.push("attendant_code = ?");
    }
    if filter.status.is_some() {
        clauses.push("status = ?");
    }
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY created_at DESC");

    let mut query = sqlx::query_as::<_, OrderRow>(&sql);
    if let Some(code) = &filter.attendant_code {
        query = query.bind(code.clone());
    }
    if let Some(status) = filter.status {
        query = query.bind(status);
    }

    let rows = query.fetch_all(pool).await?;
    rows.into_iter().map(Order::try_from).collect()
}

/// The kitchen's live queue: status in {pending, preparing, ready}
///
/// Delivered orders never appear here, regardless of creation time.
pub async fn list_active(pool: &SqlitePool) -> RepoResult<Vec<Order>> {
    let sql = format!(
        "{ORDER_SELECT} WHERE status IN ('pending', 'preparing', 'ready') ORDER BY created_at ASC"
    );
    let rows = sqlx::query_as::<_, OrderRow>(&sql).fetch_all(pool).await?;
    rows.into_iter().map(Order::try_from).collect()
}

/// Apply a status transition after validating it against the current
/// row state
///
/// Only the adjacent forward step is accepted (plus the idempotent
/// delivered → delivered no-op). Concurrent transitions on the same
/// order are last-write-wins: each request validates inside its own
/// transaction against whatever status is current when it runs.
pub async fn set_status(pool: &SqlitePool, id: i64, target: OrderStatus) -> RepoResult<Order> {
    let mut tx = pool.begin().await?;

    let current = sqlx::query_scalar::<_, OrderStatus>("SELECT status FROM orders WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))?;

    if !current.can_transition_to(target) {
        return Err(RepoError::Validation(format!(
            "illegal status transition {} -> {}",
            current.as_str(),
            target.as_str()
        )));
    }

    sqlx::query("UPDATE orders SET status = ? WHERE id = ?")
        .bind(target)
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(
        order_id = id,
        from = current.as_str(),
        to = target.as_str(),
        "Order status updated"
    );

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
}

/// Record a successful print dispatch
pub async fn mark_printed(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    sqlx::query("UPDATE orders SET printed = 1 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
