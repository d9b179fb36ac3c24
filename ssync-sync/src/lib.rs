//! # ssync-sync
//!
//! Diff engine, sync planner and plan execution.
//!
//! Call [`compare`] on two manifests to get a [`DiffSet`], [`plan`] to turn
//! diff records into [`SyncAction`](ssync_core::SyncAction)s, and
//! [`execute`] to hand them to an [`Executor`]. [`pipeline`] wires these to
//! text streams.

pub mod compare;
pub mod error;
pub mod executor;
pub mod pipeline;
pub mod plan;

pub use compare::{compare, DiffSet, DiffSummary};
pub use error::SyncError;
pub use executor::{execute, DryRun, ExecutionReport, Executor, FailedAction};
pub use plan::{decide, plan, Direction};
