//! Error types shared by the card stores, the sync reconciler and config loading.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Remote store error: {0}")]
    Remote(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Store lock poisoned")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("local store failed: {0}")]
    Local(#[source] StoreError),

    #[error("remote store unavailable: {0}")]
    Remote(#[source] StoreError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
