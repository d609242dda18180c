use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading the translation catalog at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read translation directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read translation file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed translation file {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("locale not found in catalog: {0}")]
    LocaleNotFound(String),

    #[error("application data collides with translation keys: {}", .keys.join(", "))]
    KeyCollision { keys: Vec<String> },
}
