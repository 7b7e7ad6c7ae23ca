//! Dona Guedes POS server
//!
//! Backend for a takeout marmita restaurant: attendants build orders
//! from the product catalog, the kitchen display tracks preparation
//! status, and tickets go out to a network thermal printer.
//!
//! # Module structure
//!
//! ```text
//! guedes-server/src/
//! ├── core/          # config, state, server startup
//! ├── db/            # SQLite pool and repositories
//! ├── services/      # catalog snapshot
//! ├── orders/        # cart validation, pricing, kitchen feed
//! ├── printing/      # ticket rendering and dispatch
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod orders;
pub mod printing;
pub mod services;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use orders::kitchen_feed::KitchenFeed;
pub use printing::{PrintOutcome, PrintService};
pub use services::CatalogSnapshot;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
