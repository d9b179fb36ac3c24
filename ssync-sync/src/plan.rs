//! Sync planner: one action per diff record.

use ssync_core::{DiffRecord, Side, SyncAction};

/// Direction flags; each `false` keeps origin authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Direction {
    /// Origin-only files are removed from origin instead of copied to remote.
    pub origin_remove: bool,
    /// Remote-only files are copied to origin instead of removed from remote.
    pub remote_copy: bool,
    /// Modified files are copied remote → origin instead of origin → remote.
    pub modified_download: bool,
}

/// The action for a single record.
pub fn decide(record: &DiffRecord, direction: Direction) -> SyncAction {
    match record {
        DiffRecord::OriginOnly(path) if direction.origin_remove => {
            SyncAction::remove(Side::Origin, path.as_str())
        }
        DiffRecord::OriginOnly(path) => SyncAction::copy(Side::Origin, path.as_str()),
        DiffRecord::RemoteOnly(path) if direction.remote_copy => {
            SyncAction::copy(Side::Remote, path.as_str())
        }
        DiffRecord::RemoteOnly(path) => SyncAction::remove(Side::Remote, path.as_str()),
        DiffRecord::Modified(path) if direction.modified_download => {
            SyncAction::copy(Side::Remote, path.as_str())
        }
        DiffRecord::Modified(path) => SyncAction::copy(Side::Origin, path.as_str()),
    }
}

/// Actions for `records`, in the order the records are given.
pub fn plan<'a>(
    records: impl IntoIterator<Item = &'a DiffRecord>,
    direction: Direction,
) -> Vec<SyncAction> {
    let actions: Vec<SyncAction> = records
        .into_iter()
        .map(|record| decide(record, direction))
        .collect();
    tracing::debug!(actions = actions.len(), ?direction, "planned");
    actions
}
