//! Twiddler Chart - glyph chart renderer for Twiddler layouts
//!
//! Reads a CSV layout export, keeps the chords that use no held modifier,
//! and prints which glyph each chord produces.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twiddler_chart::cli::{ChartArgs, ChordsArgs, CliResult, GlyphArgs, ImportArgs};

/// Twiddler Chart - glyph chart renderer for Twiddler layouts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the no-modifier rows of a layout export
    Import(ImportArgs),
    /// Render the chord to glyph chart of a layout export
    Chart(ChartArgs),
    /// List every chord of a finger-key alphabet
    Chords(ChordsArgs),
    /// Look up key label glyphs
    Glyph(GlyphArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Import(args) => args.execute(),
            Self::Chart(args) => args.execute(),
            Self::Chords(args) => args.execute(),
            Self::Glyph(args) => args.execute(),
        }
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.code.code());
    }

    Ok(())
}
