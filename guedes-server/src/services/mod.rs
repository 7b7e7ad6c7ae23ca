//! Services
//!
//! - [`CatalogSnapshot`] - read-only product view consumed by pricing

pub mod catalog;

pub use catalog::CatalogSnapshot;
