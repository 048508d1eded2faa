//! Error types for the Rollcall library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Rollcall operations.
#[derive(Debug, Error)]
pub enum RollcallError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A remote sheet could not be downloaded.
    #[error("Failed to fetch sheet: {0}")]
    Fetch(String),

    /// The URL does not point at a shareable sheet.
    #[error("Invalid sheet URL: {0}")]
    InvalidSheetUrl(String),

    /// The table has no usable structure for reconciliation.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Malformed request shape.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons the schema detector could not assign column roles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("The table has no columns")]
    NoColumns,

    #[error("The table has no rows with data")]
    NoRows,

    #[error("Could not identify a name column. Found columns: {}", .columns.join(", "))]
    NoIdentityColumn { columns: Vec<String> },

    #[error("Name column '{name}' not found in the table")]
    UnknownColumn { name: String },
}

/// Coarse classification of an error, used to pick a remediation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The data could not be obtained or parsed into rows.
    Ingest,
    /// The data was read but has no name column or no usable rows.
    Schema,
    /// The request itself was malformed.
    Validation,
    /// Local configuration was invalid.
    Config,
}

impl ErrorKind {
    /// Stable lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Ingest => "ingest",
            ErrorKind::Schema => "schema",
            ErrorKind::Validation => "validation",
            ErrorKind::Config => "config",
        }
    }
}

impl RollcallError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RollcallError::Io { .. }
            | RollcallError::Csv(_)
            | RollcallError::UnsupportedFormat(_)
            | RollcallError::Fetch(_) => ErrorKind::Ingest,
            RollcallError::Schema(_) => ErrorKind::Schema,
            RollcallError::InvalidSheetUrl(_) | RollcallError::Validation(_) => {
                ErrorKind::Validation
            }
            RollcallError::Config(_) | RollcallError::Json(_) => ErrorKind::Config,
        }
    }
}

/// Result type alias for Rollcall operations.
pub type Result<T> = std::result::Result<T, RollcallError>;
