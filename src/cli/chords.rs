//! Chords command: enumerate the chord space of an alphabet.

use crate::cli::common::{print_json, CliResult};
use crate::constants::DEFAULT_ALPHABET;
use crate::models::{Chord, KeyAlphabet};
use clap::Args;

/// List every chord that can be formed from the finger keys
#[derive(Debug, Clone, Args)]
pub struct ChordsArgs {
    /// Finger-key symbols, in enumeration order
    #[arg(long, default_value = DEFAULT_ALPHABET)]
    pub alphabet: String,

    /// Only print the number of chords
    #[arg(long)]
    pub count: bool,

    /// Output as JSON
    #[arg(long, conflicts_with = "count")]
    pub json: bool,
}

impl ChordsArgs {
    /// Execute the chords command
    pub fn execute(&self) -> CliResult<()> {
        let alphabet: KeyAlphabet = self.alphabet.parse()?;

        if self.count {
            println!("{}", alphabet.chord_count());
            return Ok(());
        }

        if self.json {
            let chords: Vec<Chord> = alphabet.chords().collect();
            return print_json(&chords);
        }

        for chord in alphabet.chords() {
            println!("{chord}");
        }

        Ok(())
    }
}
