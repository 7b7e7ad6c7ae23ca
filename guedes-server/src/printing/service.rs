//! Print dispatcher
//!
//! Loads the order and store settings, renders the ticket and sends it
//! to the configured network printer. Called once right after order
//! creation and on demand for reprints. There is no built-in retry;
//! reprinting is the caller's move.

use serde::Serialize;
use sqlx::SqlitePool;

use guedes_printer::{NetworkPrinter, Printer};

use crate::db::repository::{order, settings};
use crate::printing::TicketRenderer;
use crate::utils::{AppError, AppResult};

/// Result of a dispatch attempt
///
/// `Failed` and `NotConfigured` are reported, not raised: the order
/// exists regardless of print outcome.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "result", content = "detail", rename_all = "snake_case")]
pub enum PrintOutcome {
    Printed,
    /// No printer IP in store settings
    NotConfigured,
    Failed(String),
}

impl PrintOutcome {
    pub fn is_printed(&self) -> bool {
        matches!(self, PrintOutcome::Printed)
    }
}

/// Ticket print dispatcher
#[derive(Clone)]
pub struct PrintService {
    pool: SqlitePool,
}

impl PrintService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Dispatch a ticket for the given order
    ///
    /// Errors only when the order itself cannot be loaded; printer
    /// trouble comes back as a [`PrintOutcome`]. On success the
    /// order's `printed` flag is set.
    pub async fn dispatch(&self, order_id: i64) -> AppResult<PrintOutcome> {
        let order = order::find_by_id(&self.pool, order_id)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::not_found(format!("Order {order_id}")))?;
        let store = settings::get_or_create(&self.pool)
            .await
            .map_err(AppError::from)?;

        let Some(ref host) = store.printer_ip else {
            tracing::info!(order_number = order.order_number, "No printer configured, skipping print");
            return Ok(PrintOutcome::NotConfigured);
        };

        let port = match u16::try_from(store.printer_port) {
            Ok(p) => p,
            Err(_) => {
                let reason = format!("invalid printer port: {}", store.printer_port);
                tracing::error!(%reason, "Print dispatch failed");
                return Ok(PrintOutcome::Failed(reason));
            }
        };

        let ticket = TicketRenderer::default().render(&order, &store);

        let printer = match NetworkPrinter::new(host, port) {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, "Print dispatch failed");
                return Ok(PrintOutcome::Failed(e.to_string()));
            }
        };

        match printer.print(&ticket).await {
            Ok(()) => {
                order::mark_printed(&self.pool, order_id)
                    .await
                    .map_err(AppError::from)?;
                tracing::info!(
                    order_number = order.order_number,
                    printer = %printer.addr(),
                    "Ticket printed"
                );
                Ok(PrintOutcome::Printed)
            }
            Err(e) => {
                tracing::warn!(
                    order_number = order.order_number,
                    error = %e,
                    "Ticket print failed, order kept"
                );
                Ok(PrintOutcome::Failed(e.to_string()))
            }
        }
    }
}
