//! `ssync sync`: replay a diff and print one action per entry.
//!
//! Nothing is copied or removed; the action list is the output.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use ssync_core::{config::Config, Roots};
use ssync_sync::{pipeline, Direction, DryRun};

use crate::streams::open_input;

/// Arguments for `ssync sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Remove file on origin if it doesn't exist on remote (copy by default).
    #[arg(long, overrides_with = "no_origin_remove")]
    pub origin_remove: bool,

    /// Copy origin-only files to remote, even if the config says otherwise.
    #[arg(long, overrides_with = "origin_remove")]
    pub no_origin_remove: bool,

    /// Copy file to origin if it doesn't exist on origin (remove by default).
    #[arg(long, overrides_with = "no_remote_copy")]
    pub remote_copy: bool,

    /// Remove remote-only files, even if the config says otherwise.
    #[arg(long, overrides_with = "remote_copy")]
    pub no_remote_copy: bool,

    /// Copy modifications from remote to origin (origin to remote by default).
    #[arg(long, overrides_with = "no_modified_download")]
    pub modified_download: bool,

    /// Upload modifications to remote, even if the config says otherwise.
    #[arg(long, overrides_with = "modified_download")]
    pub no_modified_download: bool,

    /// Origin folder.
    #[arg(value_name = "ORIGIN")]
    pub origin: PathBuf,

    /// Remote folder.
    #[arg(value_name = "REMOTE")]
    pub remote: PathBuf,

    /// Diff file (stdin by default).
    #[arg(value_name = "DIFF")]
    pub diff: Option<PathBuf>,
}

impl SyncArgs {
    /// Command-line flags, falling back to the defaults file for any flag
    /// given in neither form.
    fn direction(&self, defaults: &Config) -> Direction {
        Direction {
            origin_remove: resolve(
                self.origin_remove,
                self.no_origin_remove,
                defaults.origin_remove,
            ),
            remote_copy: resolve(self.remote_copy, self.no_remote_copy, defaults.remote_copy),
            modified_download: resolve(
                self.modified_download,
                self.no_modified_download,
                defaults.modified_download,
            ),
        }
    }

    pub fn run(self, defaults: &Config) -> Result<()> {
        let direction = self.direction(defaults);
        let roots = Roots::new(self.origin, self.remote);
        let input = open_input(self.diff.as_deref())?;

        let mut dry_run = DryRun::new(io::stdout().lock());
        let report = pipeline::sync_stream(input, direction, &roots, &mut dry_run)
            .context("failed to replay diff")?;
        dry_run.into_inner().flush().context("failed to write actions")?;

        if !report.is_success() {
            bail!(
                "{} of {} action(s) failed",
                report.failed.len(),
                report.applied + report.failed.len()
            );
        }
        Ok(())
    }
}

fn resolve(on: bool, off: bool, default: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: SyncArgs,
    }

    fn parse(flags: &[&str]) -> SyncArgs {
        let mut argv = vec!["ssync"];
        argv.extend_from_slice(flags);
        argv.extend(["/o", "/r"]);
        Harness::parse_from(argv).args
    }

    #[test]
    fn flags_map_to_direction() {
        let d = parse(&["--origin-remove", "--modified-download"])
            .direction(&Config::default());
        assert_eq!(
            d,
            Direction {
                origin_remove: true,
                remote_copy: false,
                modified_download: true
            }
        );
    }

    #[test]
    fn config_switches_on_flags_not_given() {
        let defaults = Config {
            remote_copy: true,
            ..Config::default()
        };
        let d = parse(&[]).direction(&defaults);
        assert!(d.remote_copy);
        assert!(!d.origin_remove);
        assert!(!d.modified_download);
    }

    #[test]
    fn negating_flag_overrides_config() {
        let defaults = Config {
            origin_remove: true,
            remote_copy: true,
            modified_download: true,
            ..Config::default()
        };
        let d = parse(&["--no-remote-copy", "--no-modified-download"]).direction(&defaults);
        assert_eq!(
            d,
            Direction {
                origin_remove: true,
                remote_copy: false,
                modified_download: false
            }
        );
    }

    #[test]
    fn last_of_a_flag_pair_wins() {
        let d = parse(&[
            "--remote-copy",
            "--no-remote-copy",
            "--no-origin-remove",
            "--origin-remove",
        ])
        .direction(&Config::default());
        assert!(!d.remote_copy);
        assert!(d.origin_remove);
    }
}
