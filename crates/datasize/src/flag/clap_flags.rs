use super::{FlagRegistrar, SizeFlag};
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command, error::ErrorKind};
use std::ffi::OsString;
use tracing::debug;

/// [`FlagRegistrar`] backed by a [`clap::Command`].
///
/// Each registered flag becomes a `--name <SIZE>` option whose help shows the
/// canonical default. [`ClapFlags::try_apply`] parses a command line and
/// writes supplied values through to the bound [`SizeFlag`]s.
///
/// ```
/// use clap::Command;
/// use datasize::flag::{self, ClapFlags};
/// use datasize::Size;
///
/// let mut flags = ClapFlags::new(Command::new("upload"));
/// let limit = flag::flag(&mut flags, "limit", "10MB", "upload limit");
///
/// flags.try_apply(["upload", "--limit", "2GiB"]).unwrap();
/// assert_eq!(limit.get(), 2 * Size::GIBIBYTE);
/// ```
#[derive(Debug)]
pub struct ClapFlags {
    command: Command,
    flags: Vec<(String, SizeFlag)>,
}

impl ClapFlags {
    pub fn new(command: Command) -> Self {
        Self {
            command,
            flags: Vec::new(),
        }
    }

    /// The command with every registered flag attached.
    pub fn command(&self) -> &Command {
        &self.command
    }

    /// Parse `args` (including the binary name) and set each flag that was
    /// given on the command line.
    ///
    /// A value the size parser rejects is reported as a
    /// [`ErrorKind::ValueValidation`] error and the flag keeps its previous
    /// value. Flags applied before the failing one stay applied.
    pub fn try_apply<I, T>(&mut self, args: I) -> Result<ArgMatches, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.try_get_matches_from_mut(args)?;

        for (name, flag) in &self.flags {
            if matches!(matches.value_source(name), None | Some(ValueSource::DefaultValue)) {
                continue;
            }
            let Some(raw) = matches.get_one::<String>(name) else {
                continue;
            };
            if let Err(e) = flag.set(raw) {
                return Err(self.command.error(
                    ErrorKind::ValueValidation,
                    format!("invalid value '{raw}' for '--{name} <SIZE>': {e}"),
                ));
            }
            debug!(flag = %name, value = %flag, "applied size flag");
        }

        Ok(matches)
    }
}

impl FlagRegistrar for ClapFlags {
    fn register(&mut self, name: &str, description: &str, flag: SizeFlag) {
        let arg = Arg::new(name.to_string())
            .long(name.to_string())
            .help(description.to_string())
            .value_name("SIZE")
            .value_parser(clap::value_parser!(String))
            .action(ArgAction::Set)
            .default_value(flag.to_string());

        self.command = std::mem::take(&mut self.command).arg(arg);
        self.flags.push((name.to_string(), flag));
    }
}
