//! Classification invariants of the diff engine, checked over generated manifests.
//!
//! Output order of `compare` is unspecified; everything here compares sets.

use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;
use ssync_core::{DiffRecord, Manifest, ManifestEntry, Schema};
use ssync_sync::{compare, plan, Direction};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn manifest(files: &HashMap<String, String>) -> Manifest {
    Manifest::from_entries(
        Schema::with_checksum("md5"),
        files
            .iter()
            .map(|(p, c)| ManifestEntry::with_checksum(p.clone(), c.clone())),
    )
    .expect("manifest")
}

fn files() -> impl Strategy<Value = HashMap<String, String>> {
    // Small alphabets so origin and remote overlap often.
    prop::collection::hash_map("[a-e]{1,2}(/[a-c])?", "[0-2]", 0..16)
}

fn keys(m: &Manifest) -> BTreeSet<String> {
    m.paths().map(str::to_owned).collect()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn classification_partitions_the_union(o in files(), r in files()) {
        let (origin, remote) = (manifest(&o), manifest(&r));
        let diff = compare(&origin, &remote);

        let mut origin_only = BTreeSet::new();
        let mut remote_only = BTreeSet::new();
        let mut modified = BTreeSet::new();
        for record in &diff {
            let fresh = match record {
                DiffRecord::OriginOnly(p) => origin_only.insert(p.clone()),
                DiffRecord::RemoteOnly(p) => remote_only.insert(p.clone()),
                DiffRecord::Modified(p) => modified.insert(p.clone()),
            };
            prop_assert!(fresh, "path classified twice: {record}");
        }

        let ok = keys(&origin);
        let rk = keys(&remote);
        let expected_origin: BTreeSet<_> = ok.difference(&rk).cloned().collect();
        let expected_remote: BTreeSet<_> = rk.difference(&ok).cloned().collect();
        let expected_modified: BTreeSet<_> = ok
            .intersection(&rk)
            .filter(|p| o[p.as_str()] != r[p.as_str()])
            .cloned()
            .collect();

        prop_assert_eq!(&origin_only, &expected_origin);
        prop_assert_eq!(&remote_only, &expected_remote);
        prop_assert_eq!(&modified, &expected_modified);
        prop_assert!(origin_only.is_disjoint(&remote_only));
        prop_assert!(origin_only.is_disjoint(&modified));
        prop_assert!(remote_only.is_disjoint(&modified));
        prop_assert_eq!(diff.len(), origin_only.len() + remote_only.len() + modified.len());
    }

    #[test]
    fn manifest_compared_with_itself_is_empty(o in files()) {
        let origin = manifest(&o);
        prop_assert!(compare(&origin, &origin.clone()).is_empty());
    }

    #[test]
    fn empty_sides_give_one_sided_records(o in files()) {
        let m = manifest(&o);
        let empty = Manifest::new(Schema::with_checksum("md5"));

        let remote_only: BTreeSet<_> = compare(&empty, &m).into_iter().collect();
        let expected: BTreeSet<_> = keys(&m).into_iter().map(DiffRecord::RemoteOnly).collect();
        prop_assert_eq!(remote_only, expected);

        let origin_only: BTreeSet<_> = compare(&m, &empty).into_iter().collect();
        let expected: BTreeSet<_> = keys(&m).into_iter().map(DiffRecord::OriginOnly).collect();
        prop_assert_eq!(origin_only, expected);
    }

    #[test]
    fn planner_is_total(
        o in files(),
        r in files(),
        origin_remove in any::<bool>(),
        remote_copy in any::<bool>(),
        modified_download in any::<bool>(),
    ) {
        let diff = compare(&manifest(&o), &manifest(&r));
        let direction = Direction { origin_remove, remote_copy, modified_download };
        let records: Vec<_> = diff.iter().collect();
        let actions = plan(records.iter().copied(), direction);

        prop_assert_eq!(actions.len(), records.len());
        for (record, action) in records.iter().zip(&actions) {
            prop_assert_eq!(record.path(), action.path());
        }
    }
}

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

fn md5(entries: &[(&str, &str)]) -> Manifest {
    Manifest::from_entries(
        Schema::with_checksum("md5"),
        entries
            .iter()
            .map(|(p, c)| ManifestEntry::with_checksum(*p, *c)),
    )
    .expect("manifest")
}

#[test]
fn shared_unchanged_path_is_invisible() {
    let diff = compare(
        &md5(&[("a", "h1"), ("b", "h2")]),
        &md5(&[("b", "h2"), ("c", "h3")]),
    );
    let got: BTreeSet<_> = diff.into_iter().collect();
    let expected: BTreeSet<_> = [
        DiffRecord::OriginOnly("a".into()),
        DiffRecord::RemoteOnly("c".into()),
    ]
    .into_iter()
    .collect();
    assert_eq!(got, expected);
}

#[test]
fn modified_path_planned_both_directions() {
    let diff = compare(&md5(&[("a", "h1")]), &md5(&[("a", "h2")]));
    let records: Vec<_> = diff.into_iter().collect();
    assert_eq!(records, vec![DiffRecord::Modified("a".into())]);

    let upload = plan(&records, Direction::default());
    assert_eq!(upload, vec![ssync_core::SyncAction::copy(ssync_core::Side::Origin, "a")]);

    let download = plan(
        &records,
        Direction {
            modified_download: true,
            ..Direction::default()
        },
    );
    assert_eq!(download, vec![ssync_core::SyncAction::copy(ssync_core::Side::Remote, "a")]);
}
