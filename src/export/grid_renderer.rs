//! Text rendering of a layout chart.
//!
//! Cells are drawn with Unicode box-drawing characters. Only the top border
//! of each cell is drawn so far:
//!
//! ```text
//! ┌─────────────┐┌─────────────┐┌─────────────┐
//! ```

use crate::constants::GRID_TOP_BORDER;
use crate::export::chart::LayoutChart;
use crate::models::KeyAlphabet;

/// Renders `count` cell top borders side by side on one line.
///
/// Returns an empty string for a count of zero.
#[must_use]
pub fn top_of_grids(count: usize) -> String {
    GRID_TOP_BORDER.repeat(count)
}

/// Renders the chart as a chord listing under a row of grid tops.
///
/// Each line is `CHORD  GLYPH`. Unassigned chords are listed with no glyph
/// when `include_unassigned` is set and skipped otherwise.
pub fn render_chart_listing(
    chart: &LayoutChart,
    alphabet: &KeyAlphabet,
    grids: usize,
    include_unassigned: bool,
) -> String {
    let mut output = String::new();

    if grids > 0 {
        output.push_str(&top_of_grids(grids));
        output.push('\n');
    }

    for (chord, entry) in chart.entries(alphabet) {
        match entry {
            Some(entry) => output.push_str(&format!("{chord}  {}\n", entry.glyph)),
            None if include_unassigned => output.push_str(&format!("{chord}\n")),
            None => {}
        }
    }

    output
}
