//! Environment variable helpers.
//!
//! Reads a [`Size`] from the environment the same way a flag would parse it.

use crate::Size;
use tracing::warn;

/// Read a [`Size`] from an environment variable.
///
/// Returns the default if the variable is unset or blank. A value that does
/// not parse is logged and ignored.
///
/// # Example
///
/// ```
/// use datasize::{Size, size_from_env};
///
/// // Returns default when var is not set
/// let value = size_from_env("NONEXISTENT_VAR_12345", Size::MEGABYTE);
/// assert_eq!(value, Size::MEGABYTE);
/// ```
pub fn size_from_env(var: &str, default: Size) -> Size {
    let Ok(raw) = std::env::var(var) else {
        return default;
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return default;
    }
    match Size::parse(raw) {
        Ok(size) => size,
        Err(e) => {
            warn!(var, value = raw, error = %e, "ignoring unparseable size in environment");
            default
        }
    }
}
