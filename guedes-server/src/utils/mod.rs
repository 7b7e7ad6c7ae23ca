//! General-purpose helpers
//!
//! - [`AppError`] / [`AppResult`] application error type
//! - [`logger`] tracing setup
//! - [`validation`] text validation helpers

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{ApiResponse, AppError, AppResult};
