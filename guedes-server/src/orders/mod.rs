//! Order domain logic
//!
//! - [`cart`] - marmita cart building and draft validation
//! - [`pricing`] - total computation against a catalog snapshot
//! - [`kitchen_feed`] - periodic kitchen queue refresher

pub mod cart;
pub mod kitchen_feed;
pub mod pricing;

pub use cart::{CartBuilder, CartError, validate_draft};
pub use pricing::compute_total;
