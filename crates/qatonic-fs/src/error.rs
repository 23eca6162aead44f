//! Error types for qatonic-fs

use std::path::PathBuf;

/// Result type for qatonic-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in qatonic-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not found: {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Need to specify a search path, got {path:?}")]
    InvalidPath { path: String },
}

impl Error {
    /// Classify an I/O failure against the path it happened on.
    ///
    /// `NotFound` gets its own variant because two call sites in the
    /// properties cascade treat a missing file as "contributes nothing"
    /// while every other failure stays fatal.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path: path.into() }
        } else {
            Self::Io {
                path: path.into(),
                source,
            }
        }
    }

    /// Whether this error is a missing file or directory.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
