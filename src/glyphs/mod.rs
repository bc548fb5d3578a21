//! Label to glyph abbreviation table.
//!
//! Layout exports name keys with verbose labels such as `<Backspace>` or
//! `<Left Ctrl>c</Left Ctrl>`. A chart cell only has room for a few
//! characters, so every label is replaced by a short glyph (`←X`, `|c|`).
//! Labels are matched by exact string equality.

mod entries;

use crate::error::{ChartError, Result};
use entries::GLYPH_ENTRIES;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Immutable mapping from key label to display glyph.
///
/// Built once from the static entry list and never mutated afterwards, so a
/// shared reference can be handed to any number of readers.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    /// Fast lookup by label
    lookup: HashMap<&'static str, &'static str>,
}

impl GlyphTable {
    /// Builds a table from label/glyph pairs. Later duplicates are ignored.
    fn from_entries(entries: &[(&'static str, &'static str)]) -> Self {
        let mut lookup = HashMap::with_capacity(entries.len());
        for &(label, glyph) in entries {
            lookup.entry(label).or_insert(glyph);
        }
        Self { lookup }
    }

    /// Returns the process-wide standard table, building it on first access.
    pub fn standard() -> &'static Self {
        static TABLE: OnceLock<GlyphTable> = OnceLock::new();
        TABLE.get_or_init(|| Self::from_entries(GLYPH_ENTRIES))
    }

    /// Looks up the glyph for a label.
    ///
    /// # Examples
    ///
    /// ```
    /// use twiddler_chart::glyphs::GlyphTable;
    ///
    /// let table = GlyphTable::standard();
    /// assert_eq!(table.lookup("<Return>").unwrap(), "←|");
    /// assert!(table.lookup("<Hyper>").is_err());
    /// ```
    pub fn lookup(&self, label: &str) -> Result<&'static str> {
        self.lookup
            .get(label)
            .copied()
            .ok_or_else(|| ChartError::label_not_found(label))
    }

    /// Resolves the text to show for a label in a chart cell.
    ///
    /// Table entries win. A label that is a single character and has no
    /// entry is shown as itself, unless it is a control character. Anything
    /// else is unmapped.
    pub fn display<'a>(&self, label: &'a str) -> Result<&'a str> {
        if let Some(&glyph) = self.lookup.get(label) {
            return Ok(glyph);
        }

        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => Ok(label),
            _ => Err(ChartError::label_not_found(label)),
        }
    }

    /// Returns true if the label has an entry.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.lookup.contains_key(label)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// All entries sorted by label.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        let mut entries: Vec<_> = self.lookup.iter().map(|(&l, &g)| (l, g)).collect();
        entries.sort_unstable_by_key(|&(label, _)| label);
        entries.into_iter()
    }
}
