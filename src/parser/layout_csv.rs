//! CSV layout export reader.
//!
//! A Twiddler layout export interleaves chords that use a held thumb
//! modifier with chords that don't. Only the no-modifier rows are kept:
//! those whose first field starts with [`NO_MODIFIER_PREFIX`].

use crate::constants::NO_MODIFIER_PREFIX;
use crate::error::{ChartError, Result};
use crate::models::LayoutRow;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Imports the no-modifier rows of a layout file, in file order.
///
/// A file with no matching rows gives an empty vector.
pub fn import_layout(path: impl AsRef<Path>) -> Result<Vec<LayoutRow>> {
    let path = path.as_ref();
    debug!("Importing layout from {}", path.display());

    let file = File::open(path).map_err(|source| ChartError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    import_layout_from_reader(file).map_err(|err| match err {
        ChartError::CsvParse { source } if source.is_io_error() => ChartError::FileAccess {
            path: path.to_path_buf(),
            source: match source.into_kind() {
                csv::ErrorKind::Io(source) => source,
                other => std::io::Error::other(format!("{other:?}")),
            },
        },
        other => other,
    })
}

/// Imports the no-modifier rows from any CSV source.
///
/// Records are headerless and may differ in length. Fields are not trimmed
/// because the prefix itself starts with spaces.
pub fn import_layout_from_reader<R: Read>(reader: R) -> Result<Vec<LayoutRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut total = 0usize;

    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        total += 1;

        let is_no_modifier = record
            .get(0)
            .is_some_and(|first| first.starts_with(NO_MODIFIER_PREFIX));
        if !is_no_modifier {
            continue;
        }

        let line = record
            .position()
            .map_or(idx as u64 + 1, |pos| pos.record() + 1);
        rows.push(LayoutRow::new(line, record.iter()));
    }

    debug!("Kept {} of {} layout rows", rows.len(), total);
    Ok(rows)
}
