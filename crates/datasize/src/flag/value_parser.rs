use crate::Size;
use clap::builder::{TypedValueParser, ValueParserFactory};
use clap::error::ErrorKind;
use clap::{Arg, Command};
use std::ffi::OsStr;

/// Clap value parser for [`Size`]; lets `Size` be used directly as a derive
/// field type.
///
/// ```
/// use clap::Parser;
/// use datasize::Size;
///
/// #[derive(Parser)]
/// struct Args {
///     #[arg(long, default_value = "64KiB")]
///     buffer: Size,
/// }
///
/// let args = Args::parse_from(["app", "--buffer", "1MiB"]);
/// assert_eq!(args.buffer, Size::MEBIBYTE);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeValueParser;

impl TypedValueParser for SizeValueParser {
    type Value = Size;

    fn parse_ref(
        &self,
        cmd: &Command,
        arg: Option<&Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let arg = arg.map_or_else(|| "...".to_string(), ToString::to_string);
        let Some(raw) = value.to_str() else {
            return Err(clap::Error::raw(
                ErrorKind::InvalidUtf8,
                format!("invalid UTF-8 in value for '{arg}'\n"),
            )
            .with_cmd(cmd));
        };
        Size::parse(raw).map_err(|e| {
            clap::Error::raw(
                ErrorKind::ValueValidation,
                format!("invalid value '{raw}' for '{arg}': {e}\n"),
            )
            .with_cmd(cmd)
        })
    }
}

impl ValueParserFactory for Size {
    type Parser = SizeValueParser;

    fn value_parser() -> Self::Parser {
        SizeValueParser
    }
}
