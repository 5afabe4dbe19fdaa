//! Error type for the file and command-line layer

use std::path::PathBuf;

use spmx_core::SpmxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Load { path: PathBuf, source: SpmxError },
    #[error(transparent)]
    Matrix(#[from] SpmxError),
    #[error("Invalid operation: {0:?} (expected add, subtract or multiply)")]
    InvalidOperation(String),
    #[error("Invalid output format: {0:?} (expected text or json)")]
    InvalidFormat(String),
    #[error("Invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to encode result as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for the file and command-line layer
pub type Result<T> = std::result::Result<T, Error>;
