//! Command implementations for the `flaskcli` CLI.
//!
//! Each submodule corresponds to a top-level CLI command, plus the shared
//! provisioning and template helpers they build on.

use std::path::PathBuf;

use crate::cli::{Cli, Command};
use crate::config::FlaskCliConfig;
use crate::error::CliError;
use crate::platform::Platform;
use crate::process::ProcessRunner;
use crate::prompt::Prompter;

/// Project health diagnostics: `flaskcli doctor`.
///
/// Checks the application file, startup marker, virtualenv, manifest,
/// framework pin and base interpreter.
pub mod doctor;

/// Static usage text: `flaskcli help` and its variants.
pub mod help;

/// Project scaffolding: `flaskcli init`.
///
/// Copies the template into a new directory, then provisions its
/// environment through [`provision`].
pub mod init;

/// Dependency installation: `flaskcli install <deps>`.
pub mod install;

/// Virtualenv creation, `pip install` and `pip freeze` shared by `init` and `install`.
pub mod provision;

/// Route registration: `flaskcli route <method> <path>`.
///
/// Inserts a generated handler in front of the `if __name__ == '__main__':`
/// block of `app.py`.
pub mod route;

/// Application launch: `flaskcli run`.
pub mod run;

/// Bundled project skeleton and generated code snippets.
pub mod templates;

/// Everything a command needs from its surroundings.
pub struct Context<'a> {
    /// Directory the command operates on (the process working directory).
    pub cwd: PathBuf,
    pub config: FlaskCliConfig,
    pub platform: Platform,
    pub runner: &'a dyn ProcessRunner,
}

impl<'a> Context<'a> {
    pub fn new(cwd: PathBuf, config: FlaskCliConfig, runner: &'a dyn ProcessRunner) -> Self {
        Self {
            cwd,
            config,
            platform: Platform::current(),
            runner,
        }
    }
}

/// Route a parsed command to its implementation.
pub fn dispatch(
    command: Command,
    ctx: &Context<'_>,
    prompter: &dyn Prompter,
) -> Result<(), CliError> {
    tracing::debug!(?command, "dispatching");
    match command {
        Command::Init {
            name,
            dependencies,
            no_interactive,
            template,
        } => init::run(
            ctx,
            init::InitOptions {
                name,
                dependencies,
                no_interactive,
                template,
            },
            prompter,
        ),
        Command::Install { deps } => install::run(ctx, deps.as_deref()),
        Command::Route { method, path } => route::run(ctx, method.as_deref(), path.as_deref()),
        Command::Run => run::run(ctx),
        Command::Doctor => {
            doctor::run(ctx);
            Ok(())
        }
    }
}

/// Run a parsed command line against the process working directory.
///
/// Loads `flaskcli.yaml` from the working directory and applies `--python`
/// on top of it.
pub fn execute(
    cli: Cli,
    runner: &dyn ProcessRunner,
    prompter: &dyn Prompter,
) -> Result<(), CliError> {
    let command = cli.command.ok_or(CliError::UnknownCommand(None))?;
    let cwd = std::env::current_dir()?;

    let mut config = FlaskCliConfig::load(&cwd)?;
    if let Some(python) = cli.python {
        config.python = Some(python);
    }

    let ctx = Context::new(cwd, config, runner);
    dispatch(command, &ctx, prompter)
}
