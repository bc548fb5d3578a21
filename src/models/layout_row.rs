//! Raw rows of a layout export.

use crate::error::{ChartError, Result};
use serde::Serialize;

/// One CSV record of a layout export, kept as untyped fields.
///
/// Only field 0 is inspected when importing. Everything else is read on
/// demand through [`LayoutRow::field`], which is where a short record
/// surfaces as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutRow {
    /// 1-based record number in the source file
    pub line: u64,
    /// Raw field values, untrimmed
    pub fields: Vec<String>,
}

impl LayoutRow {
    /// Creates a row from its record number and fields.
    pub fn new(line: u64, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            line,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a field by index, or `MalformedRow` if the record is too short.
    pub fn field(&self, index: usize) -> Result<&str> {
        self.fields.get(index).map(String::as_str).ok_or_else(|| {
            ChartError::malformed_row(
                self.line,
                index,
                format!("record has {} fields", self.fields.len()),
            )
        })
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_access() {
        let row = LayoutRow::new(4, ["   O ", "LOOO", "a"]);
        assert_eq!(row.field(0).unwrap(), "   O ");
        assert_eq!(row.field(2).unwrap(), "a");
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let row = LayoutRow::new(7, ["   O "]);
        match row.field(2) {
            Err(ChartError::MalformedRow { line, field, .. }) => {
                assert_eq!(line, 7);
                assert_eq!(field, 2);
            }
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }
}
