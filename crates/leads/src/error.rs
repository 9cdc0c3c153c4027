// ABOUTME: Error types for lead export operations.
// ABOUTME: Provides ExportError with Io, Csv, and Json variants.

use thiserror::Error;

/// Errors that can occur while writing leads to CSV or JSON.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination could not be created or written.
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV writer rejected a record.
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A lead could not be serialized to JSON.
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}
