//! `ssync analyze [--md5 | --sha256] <DIR> [OUTPUT]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use ssync_core::{
    config::{ChecksumKind, Config},
    manifest::write_manifest,
};
use ssync_scan::{build_manifest, provider_for};

use crate::streams::open_output;

/// Arguments for `ssync analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Record md5 checksums computed by `md5sum`.
    #[arg(long, conflicts_with = "sha256")]
    pub md5: bool,

    /// Record SHA-256 checksums computed in-process.
    #[arg(long)]
    pub sha256: bool,

    /// Folder to analyze.
    #[arg(value_name = "DIR")]
    pub path: PathBuf,

    /// Output file (stdout by default).
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

impl AnalyzeArgs {
    pub fn run(self, defaults: &Config) -> Result<()> {
        let kind = if self.md5 {
            ChecksumKind::Md5
        } else if self.sha256 {
            ChecksumKind::Sha256
        } else {
            defaults.checksum
        };
        let provider = provider_for(kind);

        let result = build_manifest(&self.path, provider.as_deref())
            .with_context(|| format!("failed to analyze '{}'", self.path.display()))?;
        if !result.skipped.is_empty() {
            tracing::warn!(
                "{} file(s) left out of the manifest",
                result.skipped.len()
            );
        }

        let out = open_output(self.output.as_deref())?;
        write_manifest(&result.manifest, out).context("failed to write manifest")?;
        Ok(())
    }
}
