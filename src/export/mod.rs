//! Chart building and rendering for Twiddler layouts.
//!
//! Imported rows are turned into a chord to glyph chart, which can then be
//! rendered as text or serialized.

pub mod chart;
pub mod grid_renderer;

pub use chart::{ChartEntry, ChartOptions, LayoutChart, UnmappedPolicy};
pub use grid_renderer::{render_chart_listing, top_of_grids};
