//! Ticket printing
//!
//! Renders order tickets to ESC/POS and dispatches them to the
//! configured network printer. Print failures never fail or roll back
//! order creation; the `printed` flag tells the UI when a reprint is
//! needed.

pub mod renderer;
pub mod service;

pub use renderer::TicketRenderer;
pub use service::{PrintOutcome, PrintService};
