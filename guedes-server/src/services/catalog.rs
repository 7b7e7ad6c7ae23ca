//! Catalog Snapshot
//!
//! Read-only, in-memory view of the active product catalog, loaded
//! once per pricing run. The engine never mutates products; the admin
//! CRUD does that independently, which is why lookups may legitimately
//! miss (a product renamed or deactivated between cart construction
//! and submission).

use crate::db::repository::{RepoResult, product};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use shared::models::{MarmitaSize, Product, ProductType};
use sqlx::SqlitePool;
use std::collections::HashMap;

/// Immutable view of the active catalog, keyed for pricing lookups
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    /// Proteins by name
    proteins: HashMap<String, Product>,
    /// Flat-priced products (salads, beverages) by (type, name)
    flat: HashMap<(ProductType, String), Product>,
}

impl CatalogSnapshot {
    /// Load the active catalog from the database
    pub async fn load(pool: &SqlitePool) -> RepoResult<Self> {
        let products = product::find_active(pool).await?;
        Ok(Self::from_products(products))
    }

    /// Build a snapshot from an in-memory product list (tests, cache)
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut proteins = HashMap::new();
        let mut flat = HashMap::new();
        for p in products {
            if p.product_type == ProductType::Protein {
                proteins.insert(p.name.clone(), p);
            } else if p.product_type.is_flat_priced() {
                flat.insert((p.product_type, p.name.clone()), p);
            }
            // Accompaniments are free; the snapshot only needs priced
            // products
        }
        Self { proteins, flat }
    }

    /// Size-indexed price of a protein, if it is still in the catalog
    pub fn protein_price(&self, name: &str, size: MarmitaSize) -> Option<Decimal> {
        let product = self.proteins.get(name)?;
        let price = match size {
            MarmitaSize::P => product.price_p,
            MarmitaSize::M => product.price_m,
            MarmitaSize::G => product.price_g,
        };
        Decimal::from_f64(price)
    }

    /// Flat price of a salad/beverage, matched by name and type
    pub fn flat_price(&self, name: &str, product_type: ProductType) -> Option<Decimal> {
        let product = self.flat.get(&(product_type, name.to_string()))?;
        Decimal::from_f64(product.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protein(name: &str, p: f64, m: f64, g: f64) -> Product {
        Product {
            id: shared::util::snowflake_id(),
            name: name.into(),
            product_type: ProductType::Protein,
            price_p: p,
            price_m: m,
            price_g: g,
            price: 0.0,
            is_active: true,
            created_at: 0,
            updated_at: 0,
        }
    }

    fn flat(name: &str, product_type: ProductType, price: f64) -> Product {
        Product {
            id: shared::util::snowflake_id(),
            name: name.into(),
            product_type,
            price_p: 0.0,
            price_m: 0.0,
            price_g: 0.0,
            price,
            is_active: true,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn protein_lookup_is_size_indexed() {
        let snapshot = CatalogSnapshot::from_products(vec![protein("Frango", 12.0, 15.0, 18.0)]);
        assert_eq!(
            snapshot.protein_price("Frango", MarmitaSize::P),
            Decimal::from_f64(12.0)
        );
        assert_eq!(
            snapshot.protein_price("Frango", MarmitaSize::G),
            Decimal::from_f64(18.0)
        );
    }

    #[test]
    fn flat_lookup_requires_matching_type() {
        let snapshot =
            CatalogSnapshot::from_products(vec![flat("Suco", ProductType::Beverage, 5.0)]);
        assert!(snapshot.flat_price("Suco", ProductType::Beverage).is_some());
        assert!(snapshot.flat_price("Suco", ProductType::Salad).is_none());
    }

    #[test]
    fn missing_products_return_none() {
        let snapshot = CatalogSnapshot::from_products(vec![]);
        assert!(snapshot.protein_price("Picanha", MarmitaSize::M).is_none());
    }
}
