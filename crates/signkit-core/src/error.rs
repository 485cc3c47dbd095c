//! Error types for the Signkit core library.

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for encoding signing secrets.
#[derive(Error, Debug)]
pub enum SecretsError {
    #[error("Failed to read secrets directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Signing file is empty: {}", path.display())]
    EmptyFile { path: PathBuf },

    #[error("Failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for Signkit operations.
pub type Result<T> = std::result::Result<T, SecretsError>;
