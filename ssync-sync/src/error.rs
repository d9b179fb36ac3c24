//! Error types for ssync-sync.

use std::path::PathBuf;

use thiserror::Error;

use ssync_core::CoreError;

/// All errors that can arise while comparing manifests or replaying a diff.
///
/// The diff engine and the planner themselves never fail; every variant
/// comes from reading inputs or writing outputs.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from the model or a text codec.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// A manifest or diff file could not be parsed.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: CoreError,
    },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An executor could not emit or apply an action.
    #[error("failed to apply `{action}`: {source}")]
    Apply {
        action: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
