//! Text form of a diff record set.
//!
//! ```text
//! O only-in-origin.txt
//!
//! R only-in-remote.txt
//!
//! M changed on both sides.txt
//! ```
//!
//! Records are grouped by status; the blank separators are cosmetic and
//! ignored on read. Order inside a group is whatever the caller supplies.

use std::collections::HashSet;
use std::io::{BufRead, Write};

use crate::error::{parse_err, CoreError};
use crate::text::nonempty_lines;
use crate::types::DiffRecord;

/// Parse a diff stream into records, keeping file order.
///
/// Unknown status tokens, lines without a path and paths listed twice are
/// parse errors.
pub fn read_diff<R: BufRead>(reader: R) -> Result<Vec<DiffRecord>, CoreError> {
    let mut records = Vec::new();
    let mut seen = HashSet::new();

    for line in nonempty_lines(reader) {
        let (line_no, line) = line?;
        let Some((status, path)) = line.split_once(' ') else {
            return Err(parse_err(line_no, "expected `<O|R|M> <path>`"));
        };
        let path = path.to_owned();
        if !seen.insert(path.clone()) {
            return Err(parse_err(line_no, format!("path '{path}' listed twice")));
        }
        let record = match status {
            "O" => DiffRecord::OriginOnly(path),
            "R" => DiffRecord::RemoteOnly(path),
            "M" => DiffRecord::Modified(path),
            other => {
                return Err(parse_err(line_no, format!("unknown status '{other}'")));
            }
        };
        records.push(record);
    }

    tracing::debug!(records = records.len(), "parsed diff");
    Ok(records)
}

/// Parse a diff held in memory.
pub fn parse_diff(text: &str) -> Result<Vec<DiffRecord>, CoreError> {
    read_diff(text.as_bytes())
}

/// Write records grouped as origin-only, remote-only, modified, with a blank
/// line after each non-empty group except the last one written.
pub fn write_diff<'a, W: Write>(
    records: impl IntoIterator<Item = &'a DiffRecord>,
    mut writer: W,
) -> Result<(), CoreError> {
    let mut origin = Vec::new();
    let mut remote = Vec::new();
    let mut modified = Vec::new();
    for record in records {
        match record {
            DiffRecord::OriginOnly(_) => origin.push(record),
            DiffRecord::RemoteOnly(_) => remote.push(record),
            DiffRecord::Modified(_) => modified.push(record),
        }
    }

    let mut first = true;
    for group in [origin, remote, modified] {
        if group.is_empty() {
            continue;
        }
        if !first {
            writeln!(writer)?;
        }
        first = false;
        for record in group {
            writeln!(writer, "{record}")?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_all_statuses_and_ignores_blank_lines() {
        let records = parse_diff("O a\n\nR b c\n\n\nM d/e\n").expect("parse");
        assert_eq!(
            records,
            vec![
                DiffRecord::OriginOnly("a".into()),
                DiffRecord::RemoteOnly("b c".into()),
                DiffRecord::Modified("d/e".into()),
            ]
        );
    }

    #[test]
    fn unknown_status_is_rejected_with_line_number() {
        let err = parse_diff("O a\nX b\n").unwrap_err();
        assert!(matches!(err, CoreError::Parse { line: 2, .. }));
    }

    #[test]
    fn line_without_path_is_rejected() {
        assert!(matches!(
            parse_diff("M\n"),
            Err(CoreError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn duplicate_path_is_rejected() {
        assert!(matches!(
            parse_diff("O a\nM a\n"),
            Err(CoreError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn writes_groups_in_fixed_order_with_separators() {
        let records = [
            DiffRecord::Modified("m".into()),
            DiffRecord::OriginOnly("o".into()),
            DiffRecord::RemoteOnly("r".into()),
        ];
        let mut out = Vec::new();
        write_diff(&records, &mut out).expect("write");
        assert_eq!(String::from_utf8(out).unwrap(), "O o\n\nR r\n\nM m\n");
    }

    #[test]
    fn empty_groups_leave_no_separator() {
        let records = [DiffRecord::Modified("m".into())];
        let mut out = Vec::new();
        write_diff(&records, &mut out).expect("write");
        assert_eq!(String::from_utf8(out).unwrap(), "M m\n");

        let mut out = Vec::new();
        write_diff(&Vec::<DiffRecord>::new(), &mut out).expect("write");
        assert!(out.is_empty());
    }
}
