//! Data models for chords and layout exports.
//!
//! Models are independent of file handling and rendering.

pub mod chord;
pub mod layout_row;

// Re-export all model types
pub use chord::{Chord, ChordIter, ChordParseError, KeyAlphabet, KeyId};
pub use layout_row::LayoutRow;
