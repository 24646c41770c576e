//! Error types for size parsing.

use thiserror::Error;

/// Errors that can occur when parsing a [`Size`](crate::Size) from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSizeError {
    /// The input string was empty
    #[error("invalid size: empty input")]
    EmptyInput,

    /// The input matched neither a bare number nor a number with a unit suffix
    #[error("invalid size format: {input:?}")]
    InvalidFormat { input: String },

    /// The letters following the number are not a known unit
    #[error("invalid size unit suffix: {suffix:?}")]
    InvalidUnitSuffix { suffix: String },

    /// The value does not fit in 64 bits
    #[error("size out of range: {input:?}")]
    OutOfRange { input: String },
}

impl ParseSizeError {
    pub(crate) fn invalid_format(input: &str) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            ParseSizeError::EmptyInput.to_string(),
            "invalid size: empty input"
        );

        let e = ParseSizeError::invalid_format("abc");
        assert_eq!(e.to_string(), r#"invalid size format: "abc""#);

        let e = ParseSizeError::InvalidUnitSuffix {
            suffix: "xb".into(),
        };
        assert!(e.to_string().contains("\"xb\""));

        let e = ParseSizeError::OutOfRange {
            input: "99999pib".into(),
        };
        assert!(e.to_string().contains("out of range"));
    }
}
