//! ssync: offline directory reconciliation through manifests.
//!
//! # Usage
//!
//! ```text
//! ssync analyze [--md5 | --sha256] <DIR> [OUTPUT]
//! ssync compare <ORIGIN> <REMOTE> [DIFF]
//! ssync sync [--[no-]origin-remove] [--[no-]remote-copy] [--[no-]modified-download]
//!            <ORIGIN> <REMOTE> [DIFF]
//! ```

mod commands;
mod streams;

use anyhow::{bail, Result};
use clap::{ArgAction, Parser, Subcommand};

use commands::{analyze::AnalyzeArgs, compare::CompareArgs, sync::SyncArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "ssync",
    version,
    about = "Simple file synchronizer",
    long_about = None,
)]
struct Cli {
    /// Log more to stderr (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the manifest of a directory tree.
    #[command(alias = "build-manifest")]
    Analyze(AnalyzeArgs),

    /// Compare two manifests and write the diff.
    #[command(alias = "diff")]
    Compare(CompareArgs),

    /// Replay a diff and print the action for every entry.
    #[command(alias = "sync-plan")]
    Sync(SyncArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        bail!("command must be specified");
    };

    match command {
        Commands::Analyze(args) => args.run(&commands::load_config()?),
        Commands::Compare(args) => args.run(),
        Commands::Sync(args) => args.run(&commands::load_config()?),
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
