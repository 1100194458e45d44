//! Error types for the medtrack_core library.

use std::io;
use uuid::Uuid;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for medtrack_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// PDF generation error
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Medication input rejected by validation
    #[error("invalid medication: {0}")]
    InvalidMedication(String),

    /// Edit targeted a position outside the registry
    #[error("medication index {index} out of range (registry has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Acknowledgement targeted a reminder that does not exist
    #[error("unknown reminder: {0}")]
    UnknownReminder(Uuid),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
