//! ssync core library: manifest model, diff records, sync actions, text codecs.
//!
//! - [`types`]: entries, sides, diff records, sync actions, roots
//! - [`manifest`]: [`Manifest`], [`Schema`] and the manifest text format
//! - [`diff_format`]: the `<O|R|M> <path>` diff text format
//! - [`config`]: `~/.ssync/config.yaml` defaults
//! - [`error`]: [`CoreError`]

pub mod config;
pub mod diff_format;
pub mod error;
pub mod manifest;
pub mod types;

mod text;

pub use error::CoreError;
pub use manifest::{Manifest, Schema};
pub use types::{DiffRecord, ManifestEntry, Roots, Side, SyncAction};
