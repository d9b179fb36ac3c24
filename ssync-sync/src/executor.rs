//! Applying planned actions.
//!
//! Planning and execution are separate steps: [`plan`](crate::plan::plan)
//! only describes, an [`Executor`] acts. The shipped strategy is [`DryRun`],
//! which prints one line per action to an explicit sink.

use std::io::Write;

use ssync_core::{Roots, SyncAction};

use crate::error::SyncError;

/// Strategy that applies one action to the two trees.
pub trait Executor {
    fn apply(&mut self, action: &SyncAction, roots: &Roots) -> Result<(), SyncError>;
}

/// Writes `copy "<src>" "<dst>"` / `remove "<path>"` lines, touching nothing else.
#[derive(Debug)]
pub struct DryRun<W: Write> {
    out: W,
}

impl<W: Write> DryRun<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Executor for DryRun<W> {
    fn apply(&mut self, action: &SyncAction, roots: &Roots) -> Result<(), SyncError> {
        let line = action.describe(roots);
        writeln!(self.out, "{line}").map_err(|source| SyncError::Apply {
            action: line,
            source,
        })
    }
}

/// An action the executor could not apply.
#[derive(Debug)]
pub struct FailedAction {
    pub action: SyncAction,
    pub error: SyncError,
}

/// Outcome of replaying a plan.
#[derive(Debug, Default)]
pub struct ExecutionReport {
    pub applied: usize,
    pub failed: Vec<FailedAction>,
}

impl ExecutionReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Apply every action in order. A failed action is recorded and the
/// remaining actions are still attempted.
pub fn execute<'a, E>(
    actions: impl IntoIterator<Item = &'a SyncAction>,
    roots: &Roots,
    executor: &mut E,
) -> ExecutionReport
where
    E: Executor + ?Sized,
{
    let mut report = ExecutionReport::default();
    for action in actions {
        match executor.apply(action, roots) {
            Ok(()) => report.applied += 1,
            Err(error) => {
                tracing::warn!("{error}");
                report.failed.push(FailedAction {
                    action: action.clone(),
                    error,
                });
            }
        }
    }
    tracing::info!(
        applied = report.applied,
        failed = report.failed.len(),
        "plan executed"
    );
    report
}
