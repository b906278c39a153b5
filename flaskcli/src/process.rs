use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::CliError;

/// How a child's stdout is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Child shares the terminal so the user sees live output.
    Inherit,
    /// Stdout is collected into [`ProcessOutput::stdout`]; stderr stays inherited.
    Capture,
}

/// A single external command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub output: Output,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>, cwd: &Path) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.to_path_buf(),
            output: Output::Inherit,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn capture(mut self) -> Self {
        self.output = Output::Capture;
        self
    }

    /// Space-joined command line, used in logs and error messages.
    pub fn display(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Result of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` if the child was terminated by a signal.
    pub code: Option<i32>,
    /// Captured stdout; empty for [`Output::Inherit`].
    pub stdout: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Capability to run external commands.
///
/// Commands depend on this trait only, so tests can substitute a recorder
/// instead of spawning `python` and `pip`.
pub trait ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, CliError>;
}

/// Run `invocation` and turn a non-zero exit into
/// [`CliError::ExternalCommandFailure`].
pub fn run_checked(
    runner: &dyn ProcessRunner,
    invocation: &Invocation,
) -> Result<ProcessOutput, CliError> {
    let output = runner.run(invocation)?;
    if !output.success() {
        tracing::debug!(command = %invocation.display(), code = ?output.code, "command failed");
        return Err(CliError::ExternalCommandFailure {
            command: invocation.display(),
            code: output.code,
        });
    }
    Ok(output)
}

/// [`ProcessRunner`] backed by `std::process::Command`. Blocks until the child exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, CliError> {
        tracing::debug!(
            command = %invocation.display(),
            cwd = %invocation.cwd.display(),
            "spawning"
        );

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit());

        let spawn_err = |source| CliError::Spawn {
            command: invocation.display(),
            source,
        };

        match invocation.output {
            Output::Inherit => {
                let status = cmd.stdout(Stdio::inherit()).status().map_err(spawn_err)?;
                Ok(ProcessOutput {
                    code: status.code(),
                    stdout: String::new(),
                })
            }
            Output::Capture => {
                let output = cmd.stdout(Stdio::piped()).output().map_err(spawn_err)?;
                Ok(ProcessOutput {
                    code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                })
            }
        }
    }
}
