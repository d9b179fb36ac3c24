//! Directory walk producing manifest-relative paths.

use std::path::{Component, Path};

use walkdir::WalkDir;

use crate::error::{io_err, ScanError};

/// Every regular file under `root` as a `/`-separated path relative to `root`.
///
/// Entries come out sorted by file name within each directory. Symlinks are
/// neither followed nor listed. Unreadable entries and names that are not
/// valid UTF-8 are skipped with a warning; only an unusable `root` is an error.
pub fn walk_files(root: &Path) -> Result<Vec<String>, ScanError> {
    let meta = std::fs::metadata(root).map_err(|e| io_err(root, e))?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("skipping unreadable entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        match to_manifest_path(relative) {
            Some(path) => files.push(path),
            None => tracing::warn!("skipping non UTF-8 path: {}", entry.path().display()),
        }
    }

    tracing::debug!(root = %root.display(), files = files.len(), "walk complete");
    Ok(files)
}

fn to_manifest_path(relative: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(name) => parts.push(name.to_str()?),
            _ => return None,
        }
    }
    Some(parts.join("/"))
}
