//! Unified runtime error type.
//!
//! Wraps I/O, configuration and lookup failures from the side-effecting
//! wrappers so callers handle them through a single type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use toolbelt_core::{DoesNotExist, FileMode};

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// An I/O operation on `path` failed.
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was opened in a mode that does not allow the operation.
    #[error("Cannot {operation} {} in mode '{mode}'", .path.display())]
    InvalidMode {
        path: PathBuf,
        mode: FileMode,
        operation: &'static str,
    },

    /// A configuration value was malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A configuration value named no known enumeration member.
    #[error(transparent)]
    Lookup(#[from] DoesNotExist),

    /// The global subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

impl RuntimeError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this is a missing-file error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
