use std::path::PathBuf;

/// Error type shared by every `flaskcli` command.
///
/// All failures (prompting, filesystem, child processes) are reported through
/// this type up to the binary, which picks the process exit code with
/// [`CliError::exit_code`].
#[derive(Debug)]
pub enum CliError {
    /// `init` target directory is already present on disk.
    ProjectAlreadyExists { path: PathBuf },
    /// Project name rejected by [`crate::prompt::validate_project_name`].
    InvalidProjectName(String),
    /// A required positional argument or value was absent or blank.
    MissingArgument(&'static str),
    /// The application file does not contain the startup marker.
    MarkerNotFound { file: PathBuf },
    /// The application file does not exist in the working directory.
    AppFileNotFound { path: PathBuf },
    /// The project's virtual environment (or one of its executables) is missing.
    EnvironmentNotFound { path: PathBuf },
    /// A child process exited unsuccessfully. `code` is `None` when killed by a signal.
    ExternalCommandFailure { command: String, code: Option<i32> },
    /// A child process could not be started at all.
    Spawn {
        command: String,
        source: std::io::Error,
    },
    /// The template store could not be read.
    Template(String),
    /// `flaskcli.yaml` could not be parsed.
    Config(String),
    /// Command word missing or not recognised; holds what was typed.
    UnknownCommand(Option<String>),
    /// Interactive prompt failed (e.g. no terminal attached).
    Prompt(dialoguer::Error),
    Io(std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// A failed child process hands its own exit code through; everything
    /// else exits with `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ExternalCommandFailure {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::ProjectAlreadyExists { path } => write!(
                f,
                "Project directory '{}' already exists. Please choose a different name.",
                path.display()
            ),
            CliError::InvalidProjectName(reason) => write!(f, "Invalid project name: {reason}"),
            CliError::MissingArgument(what) => write!(f, "Please specify the {what}."),
            CliError::MarkerNotFound { file } => {
                write!(f, "Could not find main block in {}", file.display())
            }
            CliError::AppFileNotFound { path } => write!(
                f,
                "No {} found in current directory. Are you in a Flask project?",
                path.display()
            ),
            CliError::EnvironmentNotFound { path } => write!(
                f,
                "Virtual environment not found ({} is missing). Run `flaskcli init` first.",
                path.display()
            ),
            CliError::ExternalCommandFailure { command, code } => match code {
                Some(code) => write!(f, "`{command}` exited with status {code}"),
                None => write!(f, "`{command}` was terminated by a signal"),
            },
            CliError::Spawn { command, source } => {
                write!(f, "Failed to start `{command}`: {source}")
            }
            CliError::Template(msg) => write!(f, "Template error: {msg}"),
            CliError::Config(msg) => write!(f, "Config load error: {msg}"),
            CliError::UnknownCommand(Some(name)) => write!(
                f,
                "Unknown command '{name}'. Use 'flaskcli help' for usage information."
            ),
            CliError::UnknownCommand(None) => {
                write!(f, "Unknown command. Use 'flaskcli help' for usage information.")
            }
            CliError::Prompt(e) => write!(f, "Prompt failed: {e}"),
            CliError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Spawn { source, .. } => Some(source),
            CliError::Prompt(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(e: dialoguer::Error) -> Self {
        CliError::Prompt(e)
    }
}
