//! Domain types shared by the scanner, the diff engine and the planner.
//!
//! Relative paths inside a manifest are plain `String`s with `/` separators;
//! they are only turned into `PathBuf`s when resolved against [`Roots`].

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Manifest entries
// ---------------------------------------------------------------------------

/// One line of a manifest: a relative path and, if computed, its checksum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ManifestEntry {
    pub path: String,
    pub checksum: Option<String>,
}

impl ManifestEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            checksum: None,
        }
    }

    pub fn with_checksum(path: impl Into<String>, checksum: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            checksum: Some(checksum.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Sides
// ---------------------------------------------------------------------------

/// One of the two trees being reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Origin,
    Remote,
}

impl Side {
    /// The other side.
    pub fn opposite(self) -> Side {
        match self {
            Side::Origin => Side::Remote,
            Side::Remote => Side::Origin,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Origin => write!(f, "origin"),
            Side::Remote => write!(f, "remote"),
        }
    }
}

// ---------------------------------------------------------------------------
// Diff records
// ---------------------------------------------------------------------------

/// Classification of a single path that differs between origin and remote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiffRecord {
    /// Present in origin, absent from remote.
    OriginOnly(String),
    /// Present in remote, absent from origin.
    RemoteOnly(String),
    /// Present on both sides with differing checksums.
    Modified(String),
}

impl DiffRecord {
    pub fn path(&self) -> &str {
        match self {
            DiffRecord::OriginOnly(p) | DiffRecord::RemoteOnly(p) | DiffRecord::Modified(p) => p,
        }
    }

    /// Status token used by the diff text format.
    pub fn status(&self) -> char {
        match self {
            DiffRecord::OriginOnly(_) => 'O',
            DiffRecord::RemoteOnly(_) => 'R',
            DiffRecord::Modified(_) => 'M',
        }
    }
}

impl fmt::Display for DiffRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status(), self.path())
    }
}

// ---------------------------------------------------------------------------
// Sync actions
// ---------------------------------------------------------------------------

/// A directional instruction derived from one [`DiffRecord`].
///
/// Actions are descriptions only; applying them is an executor's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SyncAction {
    Copy { from: Side, to: Side, path: String },
    Remove { side: Side, path: String },
}

impl SyncAction {
    pub fn copy(from: Side, path: impl Into<String>) -> Self {
        SyncAction::Copy {
            from,
            to: from.opposite(),
            path: path.into(),
        }
    }

    pub fn remove(side: Side, path: impl Into<String>) -> Self {
        SyncAction::Remove {
            side,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            SyncAction::Copy { path, .. } | SyncAction::Remove { path, .. } => path,
        }
    }

    /// One-line description with both sides resolved against `roots`:
    /// `copy "<src>" "<dst>"` or `remove "<path>"`.
    pub fn describe(&self, roots: &Roots) -> String {
        match self {
            SyncAction::Copy { from, to, path } => format!(
                "copy \"{}\" \"{}\"",
                roots.resolve(*from, path).display(),
                roots.resolve(*to, path).display()
            ),
            SyncAction::Remove { side, path } => {
                format!("remove \"{}\"", roots.resolve(*side, path).display())
            }
        }
    }
}

impl fmt::Display for SyncAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncAction::Copy { from, to, path } => write!(f, "copy {from}->{to} {path}"),
            SyncAction::Remove { side, path } => write!(f, "remove {side} {path}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Roots
// ---------------------------------------------------------------------------

/// Root directories of the two trees for one sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roots {
    pub origin: PathBuf,
    pub remote: PathBuf,
}

impl Roots {
    pub fn new(origin: impl Into<PathBuf>, remote: impl Into<PathBuf>) -> Self {
        Self {
            origin: origin.into(),
            remote: remote.into(),
        }
    }

    pub fn root(&self, side: Side) -> &Path {
        match side {
            Side::Origin => &self.origin,
            Side::Remote => &self.remote,
        }
    }

    /// Join a manifest-relative path onto the root of `side`.
    pub fn resolve(&self, side: Side, path: &str) -> PathBuf {
        self.root(side).join(path)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
