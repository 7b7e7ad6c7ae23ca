//! # guedes-printer
//!
//! ESC/POS thermal printer library - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ESC/POS command building
//! - Windows-1252 encoding for Portuguese text
//! - Network printing (TCP port 9100)
//!
//! Business logic (WHAT to print) stays in application code:
//! - Order ticket rendering lives in guedes-server
//!
//! ## Example
//!
//! ```ignore
//! use guedes_printer::{EscPosBuilder, NetworkPrinter, Printer};
//!
//! // Build ESC/POS content
//! let mut builder = EscPosBuilder::new(32);
//! builder.center();
//! builder.double_size();
//! builder.line("Dona Guedes");
//! builder.reset_size();
//! builder.sep_single();
//! builder.left();
//! builder.line("Pedido: 42");
//! builder.cut();
//!
//! // Send to network printer
//! let printer = NetworkPrinter::new("192.168.1.100", 9100)?;
//! printer.print(&builder.build()).await?;
//! ```

mod encoding;
mod error;
mod escpos;
mod printer;

// Re-exports
pub use encoding::{convert_to_cp1252, pad_text, text_width, truncate_text};
pub use error::{PrintError, PrintResult};
pub use escpos::EscPosBuilder;
pub use printer::{NetworkPrinter, Printer};
