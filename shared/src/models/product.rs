//! Product Model

use serde::{Deserialize, Serialize};

/// Product type, determines the pricing shape
///
/// Proteins price by marmita size (P/M/G), accompaniments are bundled
/// into the protein price (free), salads and beverages carry a single
/// flat price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum ProductType {
    Protein,
    Accompaniment,
    Salad,
    Beverage,
}

impl ProductType {
    /// True for types priced by a single flat `price` field
    pub fn is_flat_priced(&self) -> bool {
        matches!(self, Self::Salad | Self::Beverage)
    }
}

/// Product entity
///
/// Inactive products disappear from attendant-facing catalog views but
/// stay in the table because historical orders reference them by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    #[cfg_attr(feature = "db", sqlx(rename = "type"))]
    pub product_type: ProductType,
    /// Per-size prices, only meaningful for proteins
    #[serde(default)]
    pub price_p: f64,
    #[serde(default)]
    pub price_m: f64,
    #[serde(default)]
    pub price_g: f64,
    /// Flat price, only meaningful for salads/beverages
    #[serde(default)]
    pub price: f64,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub price_p: Option<f64>,
    pub price_m: Option<f64>,
    pub price_g: Option<f64>,
    pub price: Option<f64>,
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price_p: Option<f64>,
    pub price_m: Option<f64>,
    pub price_g: Option<f64>,
    pub price: Option<f64>,
    pub is_active: Option<bool>,
}
