//! `ssync compare <ORIGIN> <REMOTE> [DIFF]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use ssync_sync::pipeline;

use crate::streams::open_output;

/// Arguments for `ssync compare`.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Manifest of the origin folder.
    #[arg(value_name = "ORIGIN")]
    pub origin: PathBuf,

    /// Manifest of the remote folder.
    #[arg(value_name = "REMOTE")]
    pub remote: PathBuf,

    /// Output file (stdout by default).
    #[arg(value_name = "DIFF")]
    pub diff: Option<PathBuf>,
}

impl CompareArgs {
    pub fn run(self) -> Result<()> {
        let origin = pipeline::load_manifest(&self.origin)?;
        let remote = pipeline::load_manifest(&self.remote)?;

        let out = open_output(self.diff.as_deref())?;
        let summary = pipeline::write_comparison(&origin, &remote, out)
            .context("failed to write diff")?;

        tracing::info!(
            "{} origin-only, {} remote-only, {} modified",
            summary.origin_only,
            summary.remote_only,
            summary.modified
        );
        Ok(())
    }
}
