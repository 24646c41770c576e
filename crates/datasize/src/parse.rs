//! Parsing sizes from human-readable strings.

use crate::{ParseSizeError, Size, Unit};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

#[expect(clippy::expect_used, reason = "pattern is a literal")]
static SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]*)(\.[0-9]*)?([a-z]+)$").expect("valid regex"));

/// 2^64, one past the largest byte count, as `f64`.
const LIMIT: f64 = u64::MAX as f64;

impl Size {
    /// Parse a size such as `"512"`, `"1.5GiB"` or `"10mb"`.
    ///
    /// A bare number is a byte count. Otherwise the number must be followed
    /// by one of the unit suffixes `b kb mb gb tb pb kib mib gib tib pib`,
    /// matched case-insensitively. Fractional bytes are truncated.
    ///
    /// ```
    /// use datasize::{ParseSizeError, Size};
    ///
    /// assert_eq!(Size::parse("1KiB").unwrap(), Size::KIBIBYTE);
    /// assert_eq!(Size::parse("1Gb").unwrap().bytes(), 1_000_000_000);
    /// assert_eq!(Size::parse(""), Err(ParseSizeError::EmptyInput));
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseSizeError> {
        if s.is_empty() {
            return Err(ParseSizeError::EmptyInput);
        }

        // nan and spelled-out infinities fall through; the pattern rejects them
        if let Ok(n) = s.parse::<f64>()
            && !n.is_nan()
            && !(n.is_infinite() && is_infinity_literal(s))
        {
            if n < 0.0 {
                return Err(ParseSizeError::invalid_format(s));
            }
            return truncate(n, s);
        }

        let lower = s.to_lowercase();
        let caps = SIZE_RE
            .captures(&lower)
            .ok_or_else(|| ParseSizeError::invalid_format(s))?;

        let number = format!(
            "{}{}",
            &caps[1],
            caps.get(2).map_or("", |m| m.as_str())
        );
        let magnitude: f64 = number
            .parse()
            .map_err(|_| ParseSizeError::invalid_format(s))?;

        let suffix = &caps[3];
        let unit = Unit::from_suffix(suffix).ok_or_else(|| ParseSizeError::InvalidUnitSuffix {
            suffix: suffix.to_string(),
        })?;

        truncate(magnitude * unit.size().bytes() as f64, s)
    }
}

fn is_infinity_literal(s: &str) -> bool {
    let unsigned = s.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// `Size::MAX` formats as 16384PiB, which is exactly 2^64 as `f64`, so the
/// limit itself saturates instead of failing.
fn truncate(bytes: f64, input: &str) -> Result<Size, ParseSizeError> {
    if bytes > LIMIT {
        return Err(ParseSizeError::OutOfRange {
            input: input.to_string(),
        });
    }
    if bytes == LIMIT {
        return Ok(Size::MAX);
    }
    Ok(Size::new(bytes as u64))
}

impl FromStr for Size {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Size {
    type Error = ParseSizeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
