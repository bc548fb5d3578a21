//! Chord to glyph chart built from imported layout rows.

use crate::constants::{DEFAULT_CHORD_COLUMN, DEFAULT_LABEL_COLUMN};
use crate::error::{ChartError, Result};
use crate::glyphs::GlyphTable;
use crate::models::{Chord, KeyAlphabet, LayoutRow};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// What to do with a label that has no glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum UnmappedPolicy {
    /// Fail the whole chart with `LabelNotFound`
    #[default]
    Reject,
    /// Show the full label text instead of a glyph
    #[value(name = "raw")]
    RawLabel,
}

/// Where to find chord and label in a row, and how to treat unmapped labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    /// Field index holding the finger chord notation
    pub chord_column: usize,
    /// Field index holding the output label
    pub label_column: usize,
    /// Handling of labels missing from the glyph table
    pub unmapped: UnmappedPolicy,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            chord_column: DEFAULT_CHORD_COLUMN,
            label_column: DEFAULT_LABEL_COLUMN,
            unmapped: UnmappedPolicy::default(),
        }
    }
}

/// A chord assigned in the layout, with its label and resolved glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartEntry {
    /// The chord
    pub chord: Chord,
    /// Label as written in the layout
    pub label: String,
    /// Text shown in the chart cell
    pub glyph: String,
    /// Source record number
    pub line: u64,
}

/// Glyphs for every chord a layout assigns.
#[derive(Debug, Clone, Default)]
pub struct LayoutChart {
    assignments: HashMap<Chord, ChartEntry>,
}

impl LayoutChart {
    /// Builds a chart from no-modifier rows.
    ///
    /// When a chord is assigned twice the first row wins.
    pub fn build(
        rows: &[LayoutRow],
        alphabet: &KeyAlphabet,
        table: &GlyphTable,
        options: &ChartOptions,
    ) -> Result<Self> {
        let mut assignments: HashMap<Chord, ChartEntry> = HashMap::new();

        for row in rows {
            let entry = resolve_row(row, alphabet, table, options)?;

            if let Some(existing) = assignments.get(&entry.chord) {
                warn!(
                    "Chord {} on row {} already assigned on row {}, ignoring",
                    entry.chord, entry.line, existing.line
                );
                continue;
            }
            assignments.insert(entry.chord, entry);
        }

        debug!("Chart has {} assigned chords", assignments.len());
        Ok(Self { assignments })
    }

    /// Returns the assignment for a chord, if any.
    #[must_use]
    pub fn get(&self, chord: &Chord) -> Option<&ChartEntry> {
        self.assignments.get(chord)
    }

    /// Number of chords with an assignment.
    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.assignments.len()
    }

    /// Walks the whole chord space in enumeration order, assigned or not.
    pub fn entries<'a>(
        &'a self,
        alphabet: &'a KeyAlphabet,
    ) -> impl Iterator<Item = (Chord, Option<&'a ChartEntry>)> + 'a {
        alphabet
            .chords()
            .map(move |chord| (chord, self.assignments.get(&chord)))
    }
}

fn resolve_row(
    row: &LayoutRow,
    alphabet: &KeyAlphabet,
    table: &GlyphTable,
    options: &ChartOptions,
) -> Result<ChartEntry> {
    let chord = alphabet
        .parse_chord(row.field(options.chord_column)?)
        .map_err(|e| ChartError::malformed_row(row.line, options.chord_column, e.to_string()))?;

    let label = row.field(options.label_column)?;
    if label.is_empty() {
        return Err(ChartError::malformed_row(
            row.line,
            options.label_column,
            "empty output label",
        ));
    }

    let glyph = match table.display(label) {
        Ok(glyph) => glyph,
        Err(ChartError::LabelNotFound { .. }) if options.unmapped == UnmappedPolicy::RawLabel => {
            warn!(
                "No glyph for {:?} on row {}, showing raw label",
                label, row.line
            );
            label
        }
        Err(e) => return Err(e),
    };

    Ok(ChartEntry {
        chord,
        label: label.to_string(),
        glyph: glyph.to_string(),
        line: row.line,
    })
}
