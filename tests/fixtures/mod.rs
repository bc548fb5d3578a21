//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small layout export mixing modifier and no-modifier rows.
///
/// Columns: thumb/modifier state, finger chord, output label.
/// Eight rows start with the no-modifier prefix.
pub const SAMPLE_LAYOUT: &str = "\
\"   O \",LOOO,e
\"   O \",MOOO,t
\" M O \",LOOO,E
\"   O \",ROOO,<Backspace>
\"N    \",LOOO,<F1>
\"   O \",OLOO,\" \"
\"   O \",OMOO,<Return>
\"  CO \",MOOO,<Left Ctrl>c</Left Ctrl>
\"   O \",ORLO,<Left Ctrl><UpArrow></Left Ctrl>
\"   O \",OROO,<UpArrow>
\"   O \",RRRR,<!--  --><Left Ctrl><LeftArrow></Left Ctrl><LeftArrow>
";

/// Number of no-modifier rows in [`SAMPLE_LAYOUT`].
pub const SAMPLE_NO_MODIFIER_ROWS: usize = 8;

/// Five rows where only rows 2 and 4 have the no-modifier prefix.
pub const FILTER_LAYOUT: &str = "\
\" M O \",LOOO,a
\"   O \",MOOO,b
\"N    \",ROOO,c
\"   O \",OLOO,d
\"   M \",OMOO,f
";

/// Layout with a label the glyph table does not know.
pub const UNMAPPED_LAYOUT: &str = "\
\"   O \",LOOO,e
\"   O \",MOOO,<Right Ctrl>c</Right Ctrl>
";

/// Layout whose second no-modifier row lacks the label column.
pub const SHORT_ROW_LAYOUT: &str = "\
\"   O \",LOOO,e
\"   O \",MOOO
";

/// Writes CSV content to a file in a temp directory and returns the path.
pub fn create_temp_layout_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let layout_path = temp_dir.path().join("layout.csv");
    fs::write(&layout_path, content).expect("Failed to write layout file");
    (layout_path, temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_file_roundtrip() {
        let (path, _temp) = create_temp_layout_file(SAMPLE_LAYOUT);
        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, SAMPLE_LAYOUT);
    }
}
