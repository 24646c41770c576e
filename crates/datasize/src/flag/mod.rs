//! Binding a [`Size`] to a command-line option.
//!
//! The option parser itself is injected through [`FlagRegistrar`], so this
//! module does not depend on any particular CLI framework. A
//! [`clap`](https://docs.rs/clap)-backed registrar is available as
//! [`ClapFlags`] with the `clap` feature.
//!
//! # Example
//! ```
//! use datasize::flag::{self, FlagRegistrar, SizeFlag};
//! use datasize::Size;
//!
//! #[derive(Default)]
//! struct Registry(Vec<(String, SizeFlag)>);
//!
//! impl FlagRegistrar for Registry {
//!     fn register(&mut self, name: &str, _description: &str, flag: SizeFlag) {
//!         self.0.push((name.to_string(), flag));
//!     }
//! }
//!
//! let mut registry = Registry::default();
//! let limit = flag::flag(&mut registry, "limit", "10MB", "upload limit");
//! assert_eq!(limit.get(), 10 * Size::MEGABYTE);
//!
//! // The registry writes through its own handle; the caller sees the update.
//! registry.0[0].1.set("2GiB").unwrap();
//! assert_eq!(limit.get(), 2 * Size::GIBIBYTE);
//! ```

#[cfg(feature = "clap")]
mod clap_flags;
#[cfg(feature = "clap")]
mod value_parser;

#[cfg(feature = "clap")]
pub use clap_flags::ClapFlags;
#[cfg(feature = "clap")]
pub use value_parser::SizeValueParser;

use crate::{ParseSizeError, Size};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Settable, gettable handle to a [`Size`] bound to an option.
///
/// Clones share the same value: the registrar keeps one handle and sets it
/// while parsing, the caller keeps another and reads it afterwards. The
/// handle is single-threaded.
#[derive(Clone, Default)]
pub struct SizeFlag {
    value: Rc<Cell<Size>>,
}

impl SizeFlag {
    pub fn new(value: Size) -> Self {
        Self {
            value: Rc::new(Cell::new(value)),
        }
    }

    /// Current value.
    pub fn get(&self) -> Size {
        self.value.get()
    }

    /// Parse `raw` and store it. On error the previous value is kept.
    pub fn set(&self, raw: &str) -> Result<(), ParseSizeError> {
        let size = Size::parse(raw)?;
        debug!(raw, %size, "size flag set");
        self.value.set(size);
        Ok(())
    }

    /// Store an already-parsed value.
    pub fn store(&self, size: Size) {
        self.value.set(size);
    }
}

impl fmt::Display for SizeFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

impl fmt::Debug for SizeFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SizeFlag").field(&self.get()).finish()
    }
}

/// Option parser that size flags are registered with.
pub trait FlagRegistrar {
    /// Register `flag` as the option `--name`. The flag's current value is
    /// its default.
    fn register(&mut self, name: &str, description: &str, flag: SizeFlag);
}

/// Bind `target` to the option `--name` with an already-parsed default.
///
/// `target` is reset to `default` before registration. Returns the bound
/// handle.
pub fn flag_var<R>(
    registrar: &mut R,
    target: &SizeFlag,
    name: &str,
    default: Size,
    description: &str,
) -> SizeFlag
where
    R: FlagRegistrar + ?Sized,
{
    target.store(default);
    registrar.register(name, description, target.clone());
    target.clone()
}

/// Register a new option `--name` whose default is given as a string.
///
/// # Panics
///
/// Panics if `default` does not parse. The default is written by the program
/// author, so a bad one is a bug rather than bad input.
pub fn flag<R>(registrar: &mut R, name: &str, default: &str, description: &str) -> SizeFlag
where
    R: FlagRegistrar + ?Sized,
{
    let size = match Size::parse(default) {
        Ok(size) => size,
        Err(e) => panic!("invalid Size value for flag --{name}: {default:?} ({e})"),
    };
    flag_var(registrar, &SizeFlag::default(), name, size, description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingRegistrar {
        registered: Vec<(String, String, SizeFlag)>,
    }

    impl FlagRegistrar for RecordingRegistrar {
        fn register(&mut self, name: &str, description: &str, flag: SizeFlag) {
            self.registered
                .push((name.to_string(), description.to_string(), flag));
        }
    }

    #[test]
    fn flag_parses_default_and_registers() {
        let mut registrar = RecordingRegistrar::default();
        let limit = flag(&mut registrar, "limit", "1.5KiB", "max upload");

        assert_eq!(limit.get(), Size::new(1536));
        assert_eq!(registrar.registered.len(), 1);
        let (name, description, registered) = &registrar.registered[0];
        assert_eq!(name, "limit");
        assert_eq!(description, "max upload");
        assert_eq!(registered.get(), limit.get());
    }

    #[test]
    #[should_panic(expected = "invalid Size value for flag --limit")]
    fn flag_panics_on_bad_default() {
        let mut registrar = RecordingRegistrar::default();
        flag(&mut registrar, "limit", "lots", "max upload");
    }

    #[test]
    fn flag_var_overwrites_target_and_shares_value() {
        let mut registrar = RecordingRegistrar::default();
        let target = SizeFlag::new(Size::TERABYTE);
        let bound = flag_var(&mut registrar, &target, "cache", Size::MEBIBYTE, "cache size");

        assert_eq!(target.get(), Size::MEBIBYTE);
        assert_eq!(bound.get(), Size::MEBIBYTE);

        registrar.registered[0].2.set("3GB").unwrap();
        assert_eq!(target.get(), 3 * Size::GIGABYTE);
        assert_eq!(bound.get(), 3 * Size::GIGABYTE);
    }

    #[test]
    fn set_failure_keeps_previous_value() {
        let flag = SizeFlag::new(Size::KILOBYTE);
        assert_eq!(
            flag.set("1xb"),
            Err(ParseSizeError::InvalidUnitSuffix {
                suffix: "xb".into()
            })
        );
        assert_eq!(flag.set(""), Err(ParseSizeError::EmptyInput));
        assert_eq!(flag.get(), Size::KILOBYTE);
    }

    #[test]
    fn display_uses_canonical_string() {
        let flag = SizeFlag::new(4 * Size::MEBIBYTE);
        assert_eq!(flag.to_string(), "4MiB");
        assert_eq!(format!("{flag:?}"), "SizeFlag(Size(4194304))");
        assert_eq!(SizeFlag::default().to_string(), "0B");
    }
}
