//! Datasize CLI.
//!
//! The `datasize` command parses, formats, rounds, and converts data sizes
//! using the canonical string form of the `datasize` crate.

use anyhow::Result;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "datasize")]
#[command(about = "Parse, format, round, and convert data sizes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: commands::SizeCommands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    commands::execute(cli.command)
}
