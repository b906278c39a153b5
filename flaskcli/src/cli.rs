use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::commands::help::is_help_trigger;

#[derive(Debug, Parser)]
#[command(
    name = "flaskcli",
    version,
    about = "flaskcli: scaffold and manage Flask projects",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interpreter used to create virtual environments
    #[arg(long, global = true, value_name = "PATH")]
    pub python: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new Flask project
    Init {
        /// Project name (prompted for when omitted)
        #[arg(long)]
        name: Option<String>,
        /// Additional dependencies to install (comma-separated)
        #[arg(long, value_name = "DEPS")]
        dependencies: Option<String>,
        /// Never prompt
        #[arg(long)]
        no_interactive: bool,
        /// Copy the project skeleton from this directory
        #[arg(long, value_name = "DIR")]
        template: Option<PathBuf>,
    },
    /// Install dependencies to the current project
    Install {
        /// Comma-separated package names (e.g. flask-cors,flask-login)
        deps: Option<String>,
    },
    /// Add a new route to app.py
    Route {
        /// HTTP method (e.g. GET, POST)
        method: Option<String>,
        /// Route path (e.g. /users)
        path: Option<String>,
    },
    /// Run the Flask application
    Run,
    /// Check project health
    Doctor,
}

/// What the binary should do after argument parsing.
#[derive(Debug)]
pub enum Action {
    /// Print the static usage text.
    Usage,
    /// Command is missing or not a known one; holds what was typed, if anything.
    Unknown(Option<String>),
    /// Run the parsed command.
    Execute(Cli),
}

/// Parse process arguments (including the binary name).
///
/// Help triggers in command position (after any global flags) are handled
/// before clap so that case variants like `H` or `--H` print the usage text. Unknown and missing
/// commands become [`Action::Unknown`]; any other clap error (bad flag,
/// `--version`, subcommand `--help`) is returned for clap to report.
pub fn parse_args<I, T>(args: I) -> Result<Action, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let first = command_word(&args);

    if first.as_deref().is_some_and(is_help_trigger) {
        return Ok(Action::Usage);
    }

    match Cli::try_parse_from(&args) {
        Ok(cli) if cli.command.is_none() => Ok(Action::Unknown(first)),
        Ok(cli) => Ok(Action::Execute(cli)),
        Err(e) if e.kind() == ErrorKind::InvalidSubcommand => Ok(Action::Unknown(first)),
        Err(e) => Err(e),
    }
}

/// First argument after the binary name that is not a global flag or its value.
fn command_word(args: &[OsString]) -> Option<String> {
    let mut rest = args.iter().skip(1).map(|a| a.to_string_lossy());
    while let Some(arg) = rest.next() {
        match &*arg {
            "-v" | "--verbose" => {}
            "--python" => {
                rest.next();
            }
            a if a.starts_with("--python=") => {}
            _ => return Some(arg.to_string()),
        }
    }
    None
}
