//! JSON file persistence for whole libraries.
//!
//! # Responsibility
//! - Mirror the session record store to a named JSON file and back.
//! - Classify failures into not-found, parse and I/O conditions.
//!
//! # Invariants
//! - Nothing here holds a copy of the store between calls.
//! - Loads are all-or-nothing: callers receive either every record or an
//!   error, never a partial list.
//! - Saves replace the target file atomically.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

mod json_file;

pub use json_file::{load_library, save_library};

/// Default library file name used when the caller does not pick one.
pub const DEFAULT_LIBRARY_FILE: &str = "library.json";

pub type PersistResult<T> = Result<T, PersistError>;

#[derive(Debug)]
pub enum PersistError {
    /// The library file does not exist.
    NotFound(PathBuf),
    /// The file exists but is not a JSON array of book records.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The path cannot be read or written.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl PersistError {
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(path) => path,
            Self::Parse { path, .. } => path,
            Self::Io { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "no saved library found at {}", path.display()),
            Self::Parse { path, source } => {
                write!(f, "invalid library file `{}`: {source}", path.display())
            }
            Self::Io { path, source } => write!(f, "cannot access `{}`: {source}", path.display()),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Parse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}
