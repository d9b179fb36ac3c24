//! Diff engine: classify every path of two manifests.

use std::collections::HashSet;

use ssync_core::{DiffRecord, Manifest};

/// Unordered set of classifications; at most one record per path.
pub type DiffSet = HashSet<DiffRecord>;

/// Record counts per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub origin_only: usize,
    pub remote_only: usize,
    pub modified: usize,
}

impl DiffSummary {
    pub fn of<'a>(records: impl IntoIterator<Item = &'a DiffRecord>) -> Self {
        let mut summary = Self::default();
        for record in records {
            match record {
                DiffRecord::OriginOnly(_) => summary.origin_only += 1,
                DiffRecord::RemoteOnly(_) => summary.remote_only += 1,
                DiffRecord::Modified(_) => summary.modified += 1,
            }
        }
        summary
    }
}

/// Compare `origin` against `remote`.
///
/// Paths on both sides are `Modified` when their checksums differ and
/// invisible otherwise. Two absent checksums are equal, so path-only
/// manifests never produce `Modified`; a checksum on one side only does.
pub fn compare(origin: &Manifest, remote: &Manifest) -> DiffSet {
    let mut unmatched: HashSet<&str> = origin.paths().collect();
    let mut diff = DiffSet::new();

    for (path, theirs) in remote.iter() {
        match origin.checksum(path) {
            None => {
                diff.insert(DiffRecord::RemoteOnly(path.to_owned()));
            }
            Some(ours) => {
                if ours != theirs {
                    diff.insert(DiffRecord::Modified(path.to_owned()));
                }
                unmatched.remove(path);
            }
        }
    }

    diff.extend(
        unmatched
            .into_iter()
            .map(|path| DiffRecord::OriginOnly(path.to_owned())),
    );

    let summary = DiffSummary::of(&diff);
    tracing::info!(
        origin_only = summary.origin_only,
        remote_only = summary.remote_only,
        modified = summary.modified,
        "manifests compared"
    );
    diff
}
