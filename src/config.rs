//! Runtime configuration, read from a TOML file.
//!
//! ```toml
//! database_path = "reviews.sqlite3"
//! upcoming_days = 7
//! log_level = "info"
//! seed_sample_cards = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::due::DEFAULT_UPCOMING_DAYS;

pub const DEFAULT_CONFIG_PATH: &str = "vocab_review.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// SQLite file holding the local card store
    pub database_path: PathBuf,
    /// Window for the "upcoming" view, in days
    pub upcoming_days: u32,
    /// Default `env_logger` filter; `RUST_LOG` takes precedence
    pub log_level: String,
    /// Add a few sample words when the store is empty
    pub seed_sample_cards: bool,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("reviews.sqlite3"),
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            log_level: "info".to_string(),
            seed_sample_cards: true,
        }
    }
}

impl ReviewConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Like `load`, but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }
}
