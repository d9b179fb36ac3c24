//! Manifest model and its line-oriented text form.
//!
//! # Format
//!
//! ```text
//! # md5 filename
//! d41d8cd98f00b204e9800998ecf8427e docs/empty file.txt
//! 0cc175b9c0f1b6a831c399e269772661 src/a.rs
//! ```
//!
//! The optional header selects a [`Schema`]. The last column (`filename`) is
//! the path and takes the rest of the line literally, so paths may contain
//! spaces. Without a header every line is a bare path.
//!
//! Lines are trimmed on read, so a path with surrounding whitespace or a line
//! break cannot be stored. Without a checksum column a path starting with `#`
//! would read back as a header and is refused too.

use std::collections::HashMap;
use std::fmt;
use std::io::{BufRead, Write};

use crate::error::{parse_err, CoreError};
use crate::text::nonempty_lines;
use crate::types::ManifestEntry;

/// Marker that starts a header line.
pub const HEADER_MARKER: char = '#';

/// Name of the path column; always the last declared column.
pub const PATH_COLUMN: &str = "filename";

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Which columns the entries of a manifest carry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Schema {
    /// Bare relative paths, no checksum.
    #[default]
    PathOnly,
    /// `<checksum> <path>`; `column` names the checksum (e.g. `md5`).
    WithChecksum { column: String },
}

impl Schema {
    pub fn with_checksum(column: impl Into<String>) -> Self {
        Schema::WithChecksum {
            column: column.into(),
        }
    }

    /// Decode the column names that follow the header marker.
    fn from_columns(columns: &[&str], line: usize) -> Result<Self, CoreError> {
        match columns {
            [path] if *path == PATH_COLUMN => Ok(Schema::PathOnly),
            [checksum, path] if *path == PATH_COLUMN && *checksum != PATH_COLUMN => {
                Ok(Schema::with_checksum(*checksum))
            }
            [] => Err(parse_err(line, "header declares no columns")),
            _ => Err(parse_err(
                line,
                format!(
                    "unsupported header columns {columns:?}; expected `[checksum] {PATH_COLUMN}`"
                ),
            )),
        }
    }

    /// The header line (without trailing newline).
    pub fn header(&self) -> String {
        match self {
            Schema::PathOnly => format!("{HEADER_MARKER} {PATH_COLUMN}"),
            Schema::WithChecksum { column } => {
                format!("{HEADER_MARKER} {column} {PATH_COLUMN}")
            }
        }
    }

    /// Whether `entry` carries exactly the columns this schema declares.
    pub fn accepts(&self, entry: &ManifestEntry) -> bool {
        match self {
            Schema::PathOnly => entry.checksum.is_none(),
            Schema::WithChecksum { .. } => entry.checksum.is_some(),
        }
    }

    /// Fail unless `path` reads back unchanged from a line of this schema.
    pub fn check_path(&self, path: &str) -> Result<(), CoreError> {
        let reason = if path.is_empty() {
            "empty path"
        } else if path.contains(['\n', '\r']) {
            "contains a line break"
        } else if path.trim() != path {
            "leading or trailing whitespace"
        } else if *self == Schema::PathOnly && path.starts_with(HEADER_MARKER) {
            "starts with the header marker"
        } else {
            return Ok(());
        };
        Err(CoreError::UnrepresentablePath {
            path: path.to_owned(),
            reason,
        })
    }

    fn decode(&self, line: &str, line_no: usize) -> Result<ManifestEntry, CoreError> {
        match self {
            Schema::PathOnly => Ok(ManifestEntry::new(line)),
            Schema::WithChecksum { column } => {
                let Some((checksum, rest)) = line.split_once(char::is_whitespace) else {
                    return Err(parse_err(
                        line_no,
                        format!("expected `<{column}> <{PATH_COLUMN}>`, got one field"),
                    ));
                };
                Ok(ManifestEntry::with_checksum(rest.trim_start(), checksum))
            }
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::PathOnly => write!(f, "{PATH_COLUMN}"),
            Schema::WithChecksum { column } => write!(f, "{column} {PATH_COLUMN}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

/// Snapshot of one directory tree: relative path → optional checksum.
///
/// Paths are unique; inserting a path twice keeps the later checksum.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    schema: Schema,
    entries: HashMap<String, Option<String>>,
}

impl Manifest {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            entries: HashMap::new(),
        }
    }

    /// Build a manifest from entries in listing order (last occurrence wins).
    pub fn from_entries(
        schema: Schema,
        entries: impl IntoIterator<Item = ManifestEntry>,
    ) -> Result<Self, CoreError> {
        let mut manifest = Self::new(schema);
        for entry in entries {
            manifest.insert(entry)?;
        }
        Ok(manifest)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Insert an entry, overwriting any earlier entry for the same path.
    ///
    /// Refuses entries the schema does not accept and paths that would not
    /// survive a write and re-read.
    pub fn insert(&mut self, entry: ManifestEntry) -> Result<(), CoreError> {
        if !self.schema.accepts(&entry) {
            return Err(CoreError::SchemaMismatch {
                path: entry.path,
                schema: self.schema.to_string(),
            });
        }
        self.schema.check_path(&entry.path)?;
        if self.entries.insert(entry.path, entry.checksum).is_some() {
            tracing::debug!("duplicate manifest path, later entry wins");
        }
        Ok(())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// `None` when the path is absent; `Some(None)` when present without a checksum.
    pub fn checksum(&self, path: &str) -> Option<Option<&str>> {
        self.entries.get(path).map(|c| c.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(p, c)| (p.as_str(), c.as_deref()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Codec
// ---------------------------------------------------------------------------

/// Parse a manifest stream.
///
/// Blank lines are skipped. A header may repeat, but may not change the
/// schema once entries have been read.
pub fn read_manifest<R: BufRead>(reader: R) -> Result<Manifest, CoreError> {
    let mut manifest = Manifest::default();

    for line in nonempty_lines(reader) {
        let (line_no, line) = line?;

        if let Some(header) = line.strip_prefix(HEADER_MARKER) {
            let columns: Vec<&str> = header.split_whitespace().collect();
            let schema = Schema::from_columns(&columns, line_no)?;
            if schema != manifest.schema && !manifest.is_empty() {
                return Err(parse_err(
                    line_no,
                    format!("header changes schema to `{schema}` after entries"),
                ));
            }
            manifest.schema = schema;
            continue;
        }

        let entry = manifest.schema.decode(&line, line_no)?;
        manifest.insert(entry)?;
    }

    tracing::debug!(entries = manifest.len(), "parsed manifest");
    Ok(manifest)
}

/// Parse a manifest held in memory.
pub fn parse_manifest(text: &str) -> Result<Manifest, CoreError> {
    read_manifest(text.as_bytes())
}

/// Write the header and one line per entry, sorted by path.
pub fn write_manifest<W: Write>(manifest: &Manifest, mut writer: W) -> Result<(), CoreError> {
    writeln!(writer, "{}", manifest.schema.header())?;

    let mut entries: Vec<_> = manifest.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    for (path, checksum) in entries {
        match checksum {
            Some(checksum) => writeln!(writer, "{checksum} {path}")?,
            None => writeln!(writer, "{path}")?,
        }
    }
    writer.flush()?;
    Ok(())
}

/// Serialize a manifest into a `String`.
pub fn serialize_manifest(manifest: &Manifest) -> Result<String, CoreError> {
    let mut buf = Vec::new();
    write_manifest(manifest, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
