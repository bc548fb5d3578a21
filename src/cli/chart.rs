//! Chart command: render the chord to glyph chart of a layout export.

use crate::cli::common::{print_json, CliResult};
use crate::constants::{DEFAULT_ALPHABET, DEFAULT_CHORD_COLUMN, DEFAULT_LABEL_COLUMN};
use crate::export::{render_chart_listing, ChartEntry, ChartOptions, LayoutChart, UnmappedPolicy};
use crate::glyphs::GlyphTable;
use crate::models::{Chord, KeyAlphabet};
use crate::parser;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Render the glyph chart of a layout export
#[derive(Debug, Clone, Args)]
pub struct ChartArgs {
    /// Path to layout CSV export
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Finger-key symbols, in enumeration order
    #[arg(long, default_value = DEFAULT_ALPHABET)]
    pub alphabet: String,

    /// Number of grid cells drawn side by side above the listing
    #[arg(long, default_value_t = 1)]
    pub grids: usize,

    /// CSV field holding the finger chord
    #[arg(long, default_value_t = DEFAULT_CHORD_COLUMN)]
    pub chord_column: usize,

    /// CSV field holding the output label
    #[arg(long, default_value_t = DEFAULT_LABEL_COLUMN)]
    pub label_column: usize,

    /// How to show labels that have no glyph
    #[arg(long, value_enum, default_value_t = UnmappedPolicy::Reject)]
    pub unmapped: UnmappedPolicy,

    /// Also list chords the layout does not assign
    #[arg(long)]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ChartRow<'a> {
    chord: Chord,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    glyph: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ChartReport<'a> {
    alphabet: String,
    chord_count: usize,
    assigned: usize,
    chords: Vec<ChartRow<'a>>,
}

impl ChartArgs {
    /// Execute the chart command
    pub fn execute(&self) -> CliResult<()> {
        let alphabet: KeyAlphabet = self.alphabet.parse()?;

        let rows = parser::import_layout(&self.layout)?;
        let chart = LayoutChart::build(&rows, &alphabet, GlyphTable::standard(), &self.options())?;

        if self.json {
            let chords = chart
                .entries(&alphabet)
                .filter(|(_, entry)| self.all || entry.is_some())
                .map(|(chord, entry)| chart_row(chord, entry))
                .collect();
            return print_json(&ChartReport {
                alphabet: alphabet.to_string(),
                chord_count: alphabet.chord_count(),
                assigned: chart.assigned_count(),
                chords,
            });
        }

        print!(
            "{}",
            render_chart_listing(&chart, &alphabet, self.grids, self.all)
        );
        println!(
            "{} of {} chords assigned",
            chart.assigned_count(),
            alphabet.chord_count()
        );

        Ok(())
    }

    fn options(&self) -> ChartOptions {
        ChartOptions {
            chord_column: self.chord_column,
            label_column: self.label_column,
            unmapped: self.unmapped,
        }
    }
}

fn chart_row(chord: Chord, entry: Option<&ChartEntry>) -> ChartRow<'_> {
    ChartRow {
        chord,
        label: entry.map(|e| e.label.as_str()),
        glyph: entry.map(|e| e.glyph.as_str()),
    }
}
