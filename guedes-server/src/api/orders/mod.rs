//! Order API module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/orders | GET | list, optional attendant/status filter |
//! | /api/orders | POST | create order, triggers automatic print |
//! | /api/orders/active | GET | kitchen live queue |
//! | /api/orders/{id} | GET | single order |
//! | /api/orders/{id}/status | PATCH | lifecycle transition |
//! | /api/orders/{id}/print | POST | reprint, no state change |

mod handler;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", order_routes())
}

fn order_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/active", get(handler::list_active))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/status", patch(handler::update_status))
        .route("/{id}/print", post(handler::print))
}
