#![forbid(unsafe_code)]

//! Core domain model and business logic for the medtrack medication tracker.
//!
//! This crate provides:
//! - Domain types (medications, intake events, reminders)
//! - Registry mutation operations (add, edit)
//! - Derived views (low stock, search, intake history, adherence)
//! - Export formatters (PDF report, CSV dump)

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod registry;
pub mod views;
pub mod intake;
pub mod reminders;
pub mod adherence;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use intake::IntakeRecord;
pub use export::{report_rows, write_csv, write_pdf, ReportRow, CSV_FILE_NAME, PDF_FILE_NAME};
