//! Byte-count value type with human-readable parsing and canonical formatting.
//!
//! This crate provides:
//! - [`Size`]: an immutable count of bytes with unit constants and conversion accessors
//! - [`Unit`]: the eleven decimal and binary magnitudes a [`Size`] can be expressed in
//! - Parsing via [`Size::parse`] / [`str::parse`], formatting via [`std::fmt::Display`]
//! - [`Size::floor`] and [`Size::round`] to the largest unit not exceeding the value
//! - [`flag`]: binding a [`Size`] to a command-line option
//!
//! # Example
//! ```
//! use datasize::Size;
//!
//! let size: Size = "1.5GiB".parse().unwrap();
//! assert_eq!(size.bytes(), 1_610_612_736);
//! assert_eq!(size.to_string(), "1.50GiB");
//! assert_eq!(size.round().to_string(), "2GiB");
//! ```
//!
//! # Features
//! - `clap` (default): [`flag::ClapFlags`] and a clap value parser for [`Size`]
//! - `serde` (default): serialize as the canonical string, deserialize from string or integer

pub mod env;
pub mod error;
pub mod flag;
mod format;
mod parse;
#[cfg(feature = "serde")]
mod serde_impl;
mod size;
mod unit;

// Re-exports for convenient access
pub use env::size_from_env;
pub use error::ParseSizeError;
pub use flag::{FlagRegistrar, SizeFlag};
pub use size::Size;
pub use unit::Unit;
