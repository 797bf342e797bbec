//! Superstrings command-line tool

use anyhow::Result;
use clap::Parser;
use superstrings_cli::commands::Commands;

/// Pack a word list into an approximate shortest common superstring
#[derive(Debug, Parser)]
#[command(name = "superstrings", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
