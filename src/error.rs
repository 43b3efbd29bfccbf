//! Error types for Biblio

use thiserror::Error;

/// Main application error type.
///
/// Only save-path failures live here: a failed write of the catalog file is
/// not caught anywhere and terminates the process with a diagnostic.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Why a persisted catalog file could not be used.
///
/// Every variant maps to the same recovery (start from an empty catalog);
/// the taxonomy exists so the fallback is explicit rather than a blanket
/// catch-all.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("catalog file does not exist")]
    NotFound,

    #[error("catalog file could not be read: {0}")]
    Io(#[source] std::io::Error),

    #[error("catalog file is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("catalog file has an unexpected shape: {0}")]
    Shape(String),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
