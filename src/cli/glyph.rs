//! Glyph command: look up labels in the glyph table.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::glyphs::GlyphTable;
use clap::Args;
use serde::Serialize;

/// Look up the glyph for a key label, or list the glyph table
#[derive(Debug, Clone, Args)]
pub struct GlyphArgs {
    /// Key label, e.g. "<Backspace>" or "<Left Ctrl>c</Left Ctrl>"
    #[arg(value_name = "LABEL", required_unless_present = "list")]
    pub label: Option<String>,

    /// List every label and glyph
    #[arg(long, conflicts_with = "label")]
    pub list: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct GlyphEntry<'a> {
    label: &'a str,
    glyph: &'a str,
}

impl GlyphArgs {
    /// Execute the glyph command
    pub fn execute(&self) -> CliResult<()> {
        let table = GlyphTable::standard();

        if self.list {
            let entries: Vec<GlyphEntry> = table
                .iter()
                .map(|(label, glyph)| GlyphEntry { label, glyph })
                .collect();

            if self.json {
                return print_json(&entries);
            }
            for entry in &entries {
                println!("{:<4}  {:?}", entry.glyph, entry.label);
            }
            return Ok(());
        }

        let label = self
            .label
            .as_deref()
            .ok_or_else(|| CliError::validation("No label given. Use LABEL or --list"))?;
        let glyph = table.lookup(label)?;

        if self.json {
            print_json(&GlyphEntry { label, glyph })
        } else {
            println!("{glyph}");
            Ok(())
        }
    }
}
