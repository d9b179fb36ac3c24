//! Line reading shared by the manifest and diff codecs.

use std::io::BufRead;

use crate::error::CoreError;

/// Trimmed, non-blank lines of `reader` with their 1-based line numbers.
pub(crate) fn nonempty_lines<R: BufRead>(
    reader: R,
) -> impl Iterator<Item = Result<(usize, String), CoreError>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(Ok((idx + 1, trimmed.to_owned())))
                }
            }
            Err(e) => Some(Err(CoreError::Io(e))),
        })
}
