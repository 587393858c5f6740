//! Session configuration resolved from the environment.
//!
//! # Responsibility
//! - Pick the default library file and logging settings.
//! - Let callers override any value explicitly.
//!
//! # Invariants
//! - Blank environment values fall back to defaults.
//! - `log_level` is always one of `trace|debug|info|warn|error`.

use crate::logging::{default_log_level, normalize_level, LoggingError};
use crate::persist::DEFAULT_LIBRARY_FILE;
use std::path::PathBuf;

pub const LIBRARY_PATH_ENV: &str = "BOOKSHELF_LIBRARY_PATH";
pub const LOG_LEVEL_ENV: &str = "BOOKSHELF_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "BOOKSHELF_LOG_DIR";

/// Settings for one library session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryConfig {
    /// File used by save/load when the user does not name one.
    pub library_path: PathBuf,
    pub log_level: &'static str,
    /// Absolute directory for rolling logs; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            library_path: PathBuf::from(DEFAULT_LIBRARY_FILE),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl LibraryConfig {
    /// Reads `BOOKSHELF_*` variables from the process environment.
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LoggingError> {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = non_blank(LIBRARY_PATH_ENV) {
            config.library_path = PathBuf::from(path);
        }
        if let Some(level) = non_blank(LOG_LEVEL_ENV) {
            config.log_level = normalize_level(&level)?;
        }
        config.log_dir = non_blank(LOG_DIR_ENV).map(PathBuf::from);
        Ok(config)
    }

    pub fn with_library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.library_path = path.into();
        self
    }

    pub fn with_log_level(mut self, level: &str) -> Result<Self, LoggingError> {
        self.log_level = normalize_level(level)?;
        Ok(self)
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }
}
