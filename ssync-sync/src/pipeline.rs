//! Stream-level entrypoints used by the CLI: read text artifacts, run the
//! engine, write text artifacts.
//!
//! Every function takes its sinks explicitly; nothing here touches stdout.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use ssync_core::{diff_format, manifest, CoreError, Manifest, Roots};

use crate::compare::{compare, DiffSummary};
use crate::error::{io_err, SyncError};
use crate::executor::{execute, ExecutionReport, Executor};
use crate::plan::{plan, Direction};

/// Load and parse a manifest file, tagging parse failures with the path.
pub fn load_manifest(path: &Path) -> Result<Manifest, SyncError> {
    let file = File::open(path).map_err(|e| io_err(path, e))?;
    manifest::read_manifest(BufReader::new(file)).map_err(|source| with_path(path, source))
}

/// Compare two parsed manifests and write the diff to `out`.
pub fn write_comparison<W: Write>(
    origin: &Manifest,
    remote: &Manifest,
    out: W,
) -> Result<DiffSummary, SyncError> {
    let diff = compare(origin, remote);
    diff_format::write_diff(&diff, out)?;
    Ok(DiffSummary::of(&diff))
}

/// Read a diff stream, plan it with `direction` and hand every action to
/// `executor` in diff order.
///
/// The whole diff is parsed before the first action is applied, so a
/// malformed diff applies nothing.
pub fn sync_stream<D, E>(
    diff: D,
    direction: Direction,
    roots: &Roots,
    executor: &mut E,
) -> Result<ExecutionReport, SyncError>
where
    D: BufRead,
    E: Executor + ?Sized,
{
    let records = diff_format::read_diff(diff)?;
    let actions = plan(&records, direction);
    Ok(execute(&actions, roots, executor))
}

fn with_path(path: &Path, source: CoreError) -> SyncError {
    match source {
        CoreError::Io(e) => io_err(path, e),
        source => SyncError::Parse {
            path: path.to_path_buf(),
            source,
        },
    }
}
