//! Twiddler Chart Library
//!
//! This library reads Twiddler chorded-keyboard layout exports, translates
//! key labels into short glyphs, and enumerates the chord space so a layout
//! can be printed as a chart.

// Module declarations
pub mod cli;
pub mod constants;
pub mod error;
pub mod export;
pub mod glyphs;
pub mod models;
pub mod parser;

pub use error::{ChartError, Result};
