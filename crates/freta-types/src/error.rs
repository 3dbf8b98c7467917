//! Error types for freta

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Storage-backend errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Stored data corrupted: {0}")]
    Corrupted(String),

    #[error("Storage IO error: {0}")]
    IoError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid draft: {0}")]
    Validation(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("PDF export error: {0}")]
    Pdf(String),

    #[error("Nothing to export: the collection is empty")]
    EmptyExport,
}

pub type Result<T> = std::result::Result<T, Error>;
