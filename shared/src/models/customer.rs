//! Customer Model
//!
//! Read side of order history, used for autocomplete suggestions in
//! the attendant UI. Not owned by the order engine.

use serde::{Deserialize, Serialize};

/// Customer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: i64,
}

/// Create customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Update customer payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
