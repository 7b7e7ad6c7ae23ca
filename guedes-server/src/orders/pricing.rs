//! Pricing engine
//!
//! Derives an order total from cart items plus shared salad/beverage
//! selections, using a catalog snapshot. The total is computed once at
//! submission and frozen on the order row; later catalog price changes
//! never touch existing orders.
//!
//! # Resolution-gap policy
//!
//! A referenced product that no longer resolves (renamed, deactivated,
//! deleted since the attendant picked it) contributes zero instead of
//! failing the order. The kitchen must not lose an order over a stale
//! price lookup; the gap is logged so the mismatch is visible.

use crate::services::CatalogSnapshot;
use rust_decimal::prelude::*;
use shared::models::{CartItem, ProductType};

const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for precise calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Compute the order total
///
/// Per marmita: the protein's size-indexed price. Accompaniments are
/// bundled into the protein price and contribute nothing. Each
/// selected salad/beverage adds its flat price. Accumulation is done
/// in `Decimal` and rounded to 2 dp at the end.
pub fn compute_total(
    items: &[CartItem],
    salads: &[String],
    beverages: &[String],
    catalog: &CatalogSnapshot,
) -> f64 {
    let mut total = Decimal::ZERO;

    for item in items {
        match catalog.protein_price(&item.protein, item.size) {
            Some(price) => total += price,
            None => {
                tracing::warn!(
                    protein = %item.protein,
                    "Protein not in catalog at pricing time, contributing zero"
                );
            }
        }
    }

    total += sum_flat(salads, ProductType::Salad, catalog);
    total += sum_flat(beverages, ProductType::Beverage, catalog);

    to_f64(total)
}

fn sum_flat(names: &[String], product_type: ProductType, catalog: &CatalogSnapshot) -> Decimal {
    let mut sum = Decimal::ZERO;
    for name in names {
        match catalog.flat_price(name, product_type) {
            Some(price) => sum += price,
            None => {
                tracing::warn!(
                    product = %name,
                    ?product_type,
                    "Selection not in catalog at pricing time, contributing zero"
                );
            }
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{MarmitaSize, Product};

    fn catalog() -> CatalogSnapshot {
        CatalogSnapshot::from_products(vec![
            Product {
                id: 1,
                name: "Frango".into(),
                product_type: ProductType::Protein,
                price_p: 12.0,
                price_m: 15.0,
                price_g: 18.0,
                price: 0.0,
                is_active: true,
                created_at: 0,
                updated_at: 0,
            },
            Product {
                id: 2,
                name: "Carne".into(),
                product_type: ProductType::Protein,
                price_p: 14.0,
                price_m: 17.0,
                price_g: 20.0,
                price: 0.0,
                is_active: true,
                created_at: 0,
                updated_at: 0,
            },
            Product {
                id: 3,
                name: "Suco".into(),
                product_type: ProductType::Beverage,
                price_p: 0.0,
                price_m: 0.0,
                price_g: 0.0,
                price: 5.0,
                is_active: true,
                created_at: 0,
                updated_at: 0,
            },
            Product {
                id: 4,
                name: "Salada Mista".into(),
                product_type: ProductType::Salad,
                price_p: 0.0,
                price_m: 0.0,
                price_g: 0.0,
                price: 4.5,
                is_active: true,
                created_at: 0,
                updated_at: 0,
            },
        ])
    }

    fn marmita(size: MarmitaSize, protein: &str) -> CartItem {
        CartItem {
            size,
            protein: protein.into(),
            accompaniments: vec!["Arroz".into(), "Feijão".into()],
            employee_name: None,
        }
    }

    #[test]
    fn frango_m_plus_suco_is_twenty() {
        let items = vec![marmita(MarmitaSize::M, "Frango")];
        let total = compute_total(&items, &[], &["Suco".into()], &catalog());
        assert_eq!(total, 20.0);
    }

    #[test]
    fn total_is_sum_of_size_indexed_proteins_and_flat_selections() {
        let items = vec![
            marmita(MarmitaSize::P, "Frango"), // 12.00
            marmita(MarmitaSize::G, "Carne"),  // 20.00
        ];
        let total = compute_total(
            &items,
            &["Salada Mista".into()], // 4.50
            &["Suco".into()],         // 5.00
            &catalog(),
        );
        assert_eq!(total, 41.5);
    }

    #[test]
    fn accompaniments_never_contribute() {
        let mut item = marmita(MarmitaSize::M, "Frango");
        item.accompaniments = vec![
            "Arroz".into(),
            "Feijão".into(),
            "Farofa".into(),
            "Macarrão".into(),
        ];
        let total = compute_total(&[item], &[], &[], &catalog());
        assert_eq!(total, 15.0);
    }

    #[test]
    fn missing_protein_contributes_zero_not_error() {
        let items = vec![
            marmita(MarmitaSize::M, "Frango"),
            marmita(MarmitaSize::M, "Picanha"), // not in catalog
        ];
        let total = compute_total(&items, &[], &[], &catalog());
        assert_eq!(total, 15.0);
    }

    #[test]
    fn missing_selection_contributes_zero() {
        let total = compute_total(
            &[],
            &["Salada Extinta".into()],
            &["Refrigerante".into()],
            &catalog(),
        );
        assert_eq!(total, 0.0);
    }

    #[test]
    fn selection_must_match_product_type() {
        // "Suco" exists as a beverage; selecting it as a salad resolves
        // nothing
        let total = compute_total(&[], &["Suco".into()], &[], &catalog());
        assert_eq!(total, 0.0);
    }

    #[test]
    fn empty_cart_prices_to_zero() {
        assert_eq!(compute_total(&[], &[], &[], &catalog()), 0.0);
    }

    #[test]
    fn accumulation_has_no_float_drift() {
        // 0.1 + 0.2 style drift: three beverages at 0.10 each
        let snapshot = CatalogSnapshot::from_products(vec![Product {
            id: 9,
            name: "Bala".into(),
            product_type: ProductType::Beverage,
            price_p: 0.0,
            price_m: 0.0,
            price_g: 0.0,
            price: 0.1,
            is_active: true,
            created_at: 0,
            updated_at: 0,
        }]);
        let beverages = vec!["Bala".into(), "Bala".into(), "Bala".into()];
        assert_eq!(compute_total(&[], &[], &beverages, &snapshot), 0.3);
    }
}
