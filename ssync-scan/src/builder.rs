//! Manifest builder: directory walk plus optional checksums.

use std::path::Path;

use ssync_core::{Manifest, ManifestEntry, Schema};

use crate::checksum::ChecksumProvider;
use crate::error::ScanError;
use crate::walk::walk_files;

/// Outcome of building a manifest for one tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildResult {
    pub manifest: Manifest,
    /// Relative paths left out: the checksum failed or the manifest text
    /// cannot carry the name.
    pub skipped: Vec<String>,
}

/// Walk `root` and build its manifest.
///
/// With a provider the manifest carries that provider's checksum column.
/// Without one the manifest is path-only. A file whose checksum fails, or
/// whose name would not read back from the manifest (surrounding whitespace,
/// a line break, a leading `#` in a path-only manifest), is omitted and
/// recorded in [`BuildResult::skipped`].
pub fn build_manifest(
    root: &Path,
    provider: Option<&dyn ChecksumProvider>,
) -> Result<BuildResult, ScanError> {
    let schema = match provider {
        Some(p) => Schema::with_checksum(p.column()),
        None => Schema::PathOnly,
    };
    let mut manifest = Manifest::new(schema);
    let mut skipped = Vec::new();

    for path in walk_files(root)? {
        if let Err(err) = manifest.schema().check_path(&path) {
            tracing::warn!("skipping {path:?}: {err}");
            skipped.push(path);
            continue;
        }
        let entry = match provider {
            None => ManifestEntry::new(path),
            Some(p) => match p.checksum(&root.join(&path)) {
                Ok(checksum) => ManifestEntry::with_checksum(path, checksum),
                Err(err) => {
                    tracing::warn!("skipping {path}: {err}");
                    skipped.push(path);
                    continue;
                }
            },
        };
        manifest.insert(entry)?;
    }

    tracing::info!(
        root = %root.display(),
        files = manifest.len(),
        skipped = skipped.len(),
        "manifest built"
    );
    Ok(BuildResult { manifest, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    use ssync_core::manifest::{parse_manifest, serialize_manifest};
    use tempfile::TempDir;

    use crate::checksum::Sha256;

    /// Fails for any file whose name contains "bad".
    struct Picky;

    impl ChecksumProvider for Picky {
        fn column(&self) -> &str {
            "picky"
        }

        fn checksum(&self, path: &Path) -> Result<String, ScanError> {
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            if name.contains("bad") {
                Err(ScanError::Checksum {
                    path: PathBuf::from(path),
                    message: "refused".into(),
                })
            } else {
                Ok(format!("sum-{name}"))
            }
        }
    }

    fn tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.txt"), "abc").unwrap();
        fs::write(dir.path().join("sub/bad.bin"), "x").unwrap();
        fs::write(dir.path().join("sub/good.bin"), "y").unwrap();
        dir
    }

    #[test]
    fn path_only_without_provider() {
        let dir = tree();
        let result = build_manifest(dir.path(), None).unwrap();
        assert_eq!(result.manifest.schema(), &Schema::PathOnly);
        assert_eq!(result.manifest.len(), 3);
        assert_eq!(result.manifest.checksum("sub/bad.bin"), Some(None));
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn failed_checksum_skips_only_that_file() {
        let dir = tree();
        let result = build_manifest(dir.path(), Some(&Picky)).unwrap();
        assert_eq!(result.manifest.schema(), &Schema::with_checksum("picky"));
        assert_eq!(result.manifest.len(), 2);
        assert!(!result.manifest.contains("sub/bad.bin"));
        assert_eq!(
            result.manifest.checksum("sub/good.bin"),
            Some(Some("sum-good.bin"))
        );
        assert_eq!(result.skipped, vec!["sub/bad.bin".to_string()]);
    }

    #[test]
    fn sha256_manifest_for_tree() {
        let dir = tree();
        let result = build_manifest(dir.path(), Some(&Sha256)).unwrap();
        assert_eq!(
            result.manifest.checksum("a.txt"),
            Some(Some(
                "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
            ))
        );
    }

    #[test]
    fn empty_tree_gives_empty_manifest() {
        let dir = TempDir::new().unwrap();
        let result = build_manifest(dir.path(), Some(&Sha256)).unwrap();
        assert!(result.manifest.is_empty());
    }

    #[test]
    fn names_the_manifest_cannot_carry_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("#notes.txt#"), "n").unwrap();
        fs::write(dir.path().join("trailing.txt "), "t").unwrap();
        fs::write(dir.path().join("ok.txt"), "o").unwrap();

        let result = build_manifest(dir.path(), None).unwrap();
        assert_eq!(result.manifest.paths().collect::<Vec<_>>(), vec!["ok.txt"]);
        assert_eq!(
            result.skipped,
            vec!["#notes.txt#".to_string(), "trailing.txt ".to_string()]
        );

        let text = serialize_manifest(&result.manifest).unwrap();
        assert_eq!(parse_manifest(&text).unwrap(), result.manifest);
    }

    #[test]
    fn header_marker_name_is_kept_with_checksums() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("#notes.txt#"), "n").unwrap();

        let result = build_manifest(dir.path(), Some(&Picky)).unwrap();
        assert!(result.skipped.is_empty());
        let text = serialize_manifest(&result.manifest).unwrap();
        assert_eq!(parse_manifest(&text).unwrap(), result.manifest);
        assert!(result.manifest.contains("#notes.txt#"));
    }
}
