//! Order API Handlers
//!
//! Creation is atomic: validation runs first, the total is recomputed
//! server-side against the current catalog, and the order row (items,
//! shared selections, frozen total, assigned number) commits in one
//! transaction. The automatic print attempt happens after commit and
//! its outcome rides along in the response; it never undoes creation.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::order::{self, OrderFilter};
use crate::orders::{compute_total, validate_draft};
use crate::printing::PrintOutcome;
use crate::services::CatalogSnapshot;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_RECEIPT_NAME_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{Order, OrderDraft, OrderStatus, OrderStatusUpdate};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub attendant_code: Option<String>,
    pub status: Option<OrderStatus>,
}

/// Creation response: the order plus how the automatic print went
#[derive(Debug, Serialize)]
pub struct OrderCreated {
    #[serde(flatten)]
    pub order: Order,
    pub print: PrintOutcome,
}

#[derive(Debug, Serialize)]
pub struct PrintResponse {
    pub printed: bool,
    pub outcome: PrintOutcome,
}

/// POST /api/orders
pub async fn create(
    State(state): State<ServerState>,
    Json(draft): Json<OrderDraft>,
) -> AppResult<Json<OrderCreated>> {
    validate_draft(&draft)?;
    validate_required_text(&draft.customer_name, "customer_name", MAX_NAME_LEN)?;
    validate_optional_text(&draft.delivery_address, "delivery_address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&draft.observations, "observations", MAX_NOTE_LEN)?;
    // Employee names are printed per marmita, so the tighter ticket
    // limit applies
    for item in &draft.items {
        validate_optional_text(&item.employee_name, "employee_name", MAX_RECEIPT_NAME_LEN)?;
    }

    let catalog = CatalogSnapshot::load(&state.pool).await?;
    let total = compute_total(&draft.items, &draft.salads, &draft.beverages, &catalog);

    let created = order::create(&state.pool, &draft, total).await?;

    // Automatic print attempt; failure is reported, never raised
    let print = match state.print_service.dispatch(created.id).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::warn!(order_number = created.order_number, error = %e, "Automatic print dispatch errored");
            PrintOutcome::Failed(e.to_string())
        }
    };

    // Re-read so the printed flag reflects the dispatch
    let order = order::find_by_id(&state.pool, created.id)
        .await?
        .unwrap_or(created);

    Ok(Json(OrderCreated { order, print }))
}

/// GET /api/orders
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Order>>> {
    let filter = OrderFilter {
        attendant_code: params.attendant_code,
        status: params.status,
    };
    let orders = order::find_all(&state.pool, &filter).await?;
    Ok(Json(orders))
}

/// GET /api/orders/active
///
/// The kitchen's live queue: pending, preparing, ready.
pub async fn list_active(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = order::list_active(&state.pool).await?;
    Ok(Json(orders))
}

/// GET /api/orders/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Order>> {
    let order = order::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {id}")))?;
    Ok(Json(order))
}

/// PATCH /api/orders/{id}/status
///
/// Only the adjacent forward step is accepted (plus delivered →
/// delivered as a no-op). Concurrent transitions on the same order are
/// last-write-wins.
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(update): Json<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let order = order::set_status(&state.pool, id, update.status).await?;
    Ok(Json(order))
}

/// POST /api/orders/{id}/print
pub async fn print(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PrintResponse>> {
    let outcome = state.print_service.dispatch(id).await?;
    Ok(Json(PrintResponse {
        printed: outcome.is_printed(),
        outcome,
    }))
}
