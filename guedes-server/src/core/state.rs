use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::printing::PrintService;
use crate::utils::AppError;

/// Server state - shared handles held by every handler
///
/// Cloning is cheap: the pool is an `Arc` internally and the config is
/// small.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Ticket print dispatcher
    pub print_service: PrintService,
}

impl ServerState {
    /// Initialize server state
    ///
    /// Ensures the working directory exists, opens the database
    /// (running migrations) and wires up the print service.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.work_dir).map_err(|e| {
            AppError::internal(format!(
                "Failed to create work dir {}: {e}",
                config.work_dir
            ))
        })?;

        let db = DbService::new(&config.db_path()).await?;
        let print_service = PrintService::new(db.pool.clone());

        Ok(Self {
            config: config.clone(),
            pool: db.pool,
            print_service,
        })
    }

    /// Build state on top of an existing pool (used by tests)
    pub fn with_pool(config: Config, pool: SqlitePool) -> Self {
        let print_service = PrintService::new(pool.clone());
        Self {
            config,
            pool,
            print_service,
        }
    }
}
