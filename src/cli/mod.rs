//! CLI command handlers for twiddler-chart.
//!
//! Each subcommand is an `Args` struct with an `execute` method returning
//! a [`CliResult`]. Errors carry the exit code the process should use.

pub mod chart;
pub mod chords;
pub mod common;
pub mod glyph;
pub mod import;

// Re-export types used by main.rs and tests
pub use chart::ChartArgs;
pub use chords::ChordsArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use glyph::GlyphArgs;
pub use import::ImportArgs;
