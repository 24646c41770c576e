//! Size subcommands.
//!
//! Provides parse, format, floor, round, convert, and units subcommands over
//! the canonical size representation.

use anyhow::{Context, Result};
use clap::Subcommand;
use datasize::{Size, Unit};
use tracing::debug;

#[derive(Subcommand)]
pub enum SizeCommands {
    /// Parse sizes and print their byte count and canonical form
    Parse {
        /// Values such as 512, 10MB or 1.5GiB
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Format raw byte counts in canonical form
    Format {
        /// Byte counts
        #[arg(required = true)]
        bytes: Vec<u64>,
    },

    /// Truncate to a whole multiple of the largest fitting unit
    Floor {
        /// Size to truncate
        value: Size,
    },

    /// Round to the nearest whole multiple of the largest fitting unit
    Round {
        /// Size to round
        value: Size,
    },

    /// Express a size as a count of a given unit
    Convert {
        /// Size to convert
        value: Size,

        /// Target unit suffix (B, kB, MB, GB, TB, PB, KiB, MiB, GiB, TiB, PiB)
        #[arg(long, value_parser = parse_unit)]
        to: Unit,
    },

    /// List every unit and its size in bytes
    Units,
}

fn parse_unit(s: &str) -> Result<Unit, String> {
    Unit::from_suffix(s).ok_or_else(|| format!("unknown unit suffix: {s:?}"))
}

pub fn execute(command: SizeCommands) -> Result<()> {
    match command {
        SizeCommands::Parse { values } => parse(&values),
        SizeCommands::Format { bytes } => {
            for b in bytes {
                println!("{}", Size::new(b));
            }
            Ok(())
        }
        SizeCommands::Floor { value } => {
            debug!(%value, "flooring");
            println!("{}", value.floor());
            Ok(())
        }
        SizeCommands::Round { value } => {
            debug!(%value, "rounding");
            println!("{}", value.round());
            Ok(())
        }
        SizeCommands::Convert { value, to } => {
            println!("{}", value.in_unit(to));
            Ok(())
        }
        SizeCommands::Units => {
            for unit in Unit::ALL {
                println!("{:<4}{}", unit.suffix(), unit.size().bytes());
            }
            Ok(())
        }
    }
}

fn parse(values: &[String]) -> Result<()> {
    for value in values {
        let size = Size::parse(value).with_context(|| format!("Failed to parse {value:?}"))?;
        println!("{value}\t{}\t{size}", size.bytes());
    }
    Ok(())
}
