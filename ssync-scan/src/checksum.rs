//! Checksum providers.
//!
//! The builder only sees [`ChecksumProvider`]; the column name a provider
//! reports becomes the checksum column of the manifest header.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use sha2::{Digest, Sha256 as Sha256Hasher};

use ssync_core::config::ChecksumKind;

use crate::error::{checksum_err, io_err, ScanError};

/// Computes a content checksum for one file.
pub trait ChecksumProvider {
    /// Header column name for checksums from this provider (e.g. `md5`).
    fn column(&self) -> &str;

    /// Checksum of the file at `path` as a printable token without whitespace.
    fn checksum(&self, path: &Path) -> Result<String, ScanError>;
}

// ---------------------------------------------------------------------------
// md5sum subprocess
// ---------------------------------------------------------------------------

/// Runs `md5sum --binary <file>` and keeps the first output field.
#[derive(Debug, Clone)]
pub struct Md5Sum {
    program: PathBuf,
}

impl Md5Sum {
    pub fn new() -> Self {
        Self::with_program("md5sum")
    }

    /// Use a different executable with the same output format.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Md5Sum {
    fn default() -> Self {
        Self::new()
    }
}

impl ChecksumProvider for Md5Sum {
    fn column(&self) -> &str {
        "md5"
    }

    fn checksum(&self, path: &Path) -> Result<String, ScanError> {
        let output = Command::new(&self.program)
            .arg("--binary")
            .arg(path)
            .output()
            .map_err(|e| io_err(&self.program, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(checksum_err(
                path,
                format!(
                    "{} exited with {}: {}",
                    self.program.display(),
                    output.status,
                    stderr.trim()
                ),
            ));
        }

        // md5sum prefixes the line with `\` when the file name needs escaping.
        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .split_whitespace()
            .next()
            .map(|field| field.trim_start_matches('\\').to_owned())
            .filter(|digest| !digest.is_empty())
            .ok_or_else(|| checksum_err(path, "empty md5sum output"))
    }
}

// ---------------------------------------------------------------------------
// In-process SHA-256
// ---------------------------------------------------------------------------

/// Streams the file through SHA-256; lowercase hex digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256;

impl ChecksumProvider for Sha256 {
    fn column(&self) -> &str {
        "sha256"
    }

    fn checksum(&self, path: &Path) -> Result<String, ScanError> {
        let mut file = File::open(path).map_err(|e| io_err(path, e))?;
        let mut hasher = Sha256Hasher::new();
        io::copy(&mut file, &mut hasher).map_err(|e| io_err(path, e))?;
        Ok(hex::encode(hasher.finalize()))
    }
}

/// Provider for a configured [`ChecksumKind`]; `None` for path-only manifests.
pub fn provider_for(kind: ChecksumKind) -> Option<Box<dyn ChecksumProvider>> {
    match kind {
        ChecksumKind::None => None,
        ChecksumKind::Md5 => Some(Box::new(Md5Sum::new())),
        ChecksumKind::Sha256 => Some(Box::new(Sha256)),
    }
}
