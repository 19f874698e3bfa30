//! Environment-driven core configuration.
//!
//! # Responsibility
//! - Resolve database path and logging settings from `BARKY_*` variables.
//! - Apply build-mode defaults for anything left unset.
//!
//! # Invariants
//! - Blank values are treated as unset.
//! - `log_dir`, when present, is absolute. This is checked here so a bad
//!   `BARKY_LOG_DIR` fails at startup, before any database is opened;
//!   `init_logging` keeps its own check for callers that bypass config.

use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "BARKY_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "BARKY_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "BARKY_LOG_DIR";
pub const DEFAULT_DB_FILE_NAME: &str = "bookmarks.db";

/// Configuration value rejected during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    RelativeLogDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RelativeLogDir(value) => {
                write!(f, "{LOG_DIR_ENV} must be an absolute path, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Resolved runtime settings for Barky core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite database file.
    pub db_path: PathBuf,
    /// Log level name passed to `init_logging`.
    pub log_level: String,
    /// Rolling log directory; `None` leaves logging uninitialized.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = read(DB_PATH_ENV) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(level) = read(LOG_LEVEL_ENV) {
            config.log_level = level;
        }
        if let Some(dir) = read(LOG_DIR_ENV) {
            let path = PathBuf::from(&dir);
            if !path.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir));
            }
            config.log_dir = Some(path);
        }

        Ok(config)
    }
}
