//! Import command: list the no-modifier rows of a layout export.

use crate::cli::common::{print_json, CliResult};
use crate::parser;
use clap::Args;
use std::path::PathBuf;

/// List the rows of a layout export that use no held modifier
#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// Path to layout CSV export
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Output rows as a JSON array of field arrays
    #[arg(long)]
    pub json: bool,
}

impl ImportArgs {
    /// Execute the import command
    pub fn execute(&self) -> CliResult<()> {
        let rows = parser::import_layout(&self.layout)?;

        if self.json {
            let fields: Vec<&Vec<String>> = rows.iter().map(|row| &row.fields).collect();
            return print_json(&fields);
        }

        for row in &rows {
            println!("{:>5}: {}", row.line, format_fields(&row.fields));
        }
        println!("{} no-modifier rows", rows.len());

        Ok(())
    }
}

/// Formats raw fields with quotes so leading and trailing spaces stay visible.
fn format_fields(fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| format!("{field:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}
