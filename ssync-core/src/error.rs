//! Error types for ssync-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from the data model, the text codecs and the
/// defaults file.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Underlying I/O failure while reading or writing a stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A manifest or diff line could not be decomposed.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// An entry does not carry the columns its manifest schema declares.
    #[error("entry '{path}' does not match manifest schema ({schema})")]
    SchemaMismatch { path: String, schema: String },

    /// A path the manifest text form cannot carry unchanged.
    #[error("path {path:?} cannot be written to a manifest: {reason}")]
    UnrepresentablePath { path: String, reason: &'static str },

    /// YAML parse error on load of the defaults file.
    #[error("failed to parse config at {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None`; cannot locate `~/.ssync/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

/// Convenience constructor for [`CoreError::Parse`].
pub(crate) fn parse_err(line: usize, message: impl Into<String>) -> CoreError {
    CoreError::Parse {
        line,
        message: message.into(),
    }
}
