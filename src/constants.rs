//! Application-wide constants.
//!
//! This module defines the application name and the fixed parameters of the
//! Twiddler layout export format.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Twiddler Chart";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "twiddler-chart";

/// Prefix of the first CSV field on rows that define a chord with no held modifier.
///
/// Three spaces, the letter `O`, then a space.
pub const NO_MODIFIER_PREFIX: &str = "   O ";

/// Number of finger keys pressed together in one chord.
pub const CHORD_LENGTH: usize = 4;

/// Reference finger-key alphabet: no key, left, middle, right column.
pub const DEFAULT_ALPHABET: &str = "OLMR";

/// Widest glyph (in characters) that fits inside a chart cell.
pub const MAX_GLYPH_WIDTH: usize = 4;

/// Top border of a single chart cell.
pub const GRID_TOP_BORDER: &str = "┌─────────────┐";

/// Default CSV column holding the finger chord.
pub const DEFAULT_CHORD_COLUMN: usize = 1;

/// Default CSV column holding the output label.
pub const DEFAULT_LABEL_COLUMN: usize = 2;
