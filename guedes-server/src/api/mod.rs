//! API routes
//!
//! # Structure
//!
//! - [`health`] health check
//! - [`products`] catalog management
//! - [`customers`] customer autocomplete records
//! - [`orders`] order lifecycle (create, list, status, print)
//! - [`settings`] store and printer settings

pub mod customers;
pub mod health;
pub mod orders;
pub mod products;
pub mod settings;

use axum::Router;

use crate::core::ServerState;

/// Compose the full API router
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(products::router())
        .merge(customers::router())
        .merge(orders::router())
        .merge(settings::router())
}

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppResult};
