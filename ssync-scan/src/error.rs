//! Error types for ssync-scan.

use std::path::PathBuf;

use thiserror::Error;

use ssync_core::CoreError;

/// All errors that can arise while building a manifest.
#[derive(Debug, Error)]
pub enum ScanError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scan root exists but is not a directory.
    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Computing a file's checksum failed (tool missing, non-zero exit, unreadable file).
    #[error("checksum of {path} failed: {message}")]
    Checksum { path: PathBuf, message: String },

    /// An error from the manifest model.
    #[error("manifest error: {0}")]
    Core(#[from] CoreError),
}

/// Convenience constructor for [`ScanError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ScanError {
    ScanError::Io {
        path: path.into(),
        source,
    }
}

/// Convenience constructor for [`ScanError::Checksum`].
pub(crate) fn checksum_err(path: impl Into<PathBuf>, message: impl Into<String>) -> ScanError {
    ScanError::Checksum {
        path: path.into(),
        message: message.into(),
    }
}
