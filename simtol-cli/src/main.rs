//! simtol command-line entry point

use clap::Parser;
use simtol_cli::commands::Commands;

/// Find similar passages between text files
#[derive(Debug, Parser)]
#[command(name = "simtol", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().command.execute()
}
