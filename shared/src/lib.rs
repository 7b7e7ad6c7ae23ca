//! Shared types for the Dona Guedes POS
//!
//! Domain models used by both the server and any client crates:
//! products, orders, customers, store settings, and small utilities
//! (timestamps, ID generation).

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
