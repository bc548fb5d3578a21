//! Parsing of layout export files.

pub mod layout_csv;

// Re-export commonly used functions
pub use layout_csv::{import_layout, import_layout_from_reader};
