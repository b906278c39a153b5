use colored::Colorize;

use super::provision::VirtualEnv;
use super::Context;
use crate::error::CliError;
use crate::process::{run_checked, Invocation};

/// `flaskcli run`: start the application with the project's interpreter.
///
/// Output is inherited; a non-zero exit becomes
/// [`CliError::ExternalCommandFailure`] carrying the child's code.
pub fn run(ctx: &Context<'_>) -> Result<(), CliError> {
    let app_file = ctx.config.app_path(&ctx.cwd);
    if !app_file.exists() {
        return Err(CliError::AppFileNotFound { path: app_file });
    }

    let env = VirtualEnv::for_project(ctx, &ctx.cwd);
    let python = env.python();
    if !python.exists() {
        return Err(CliError::EnvironmentNotFound { path: python });
    }

    println!(
        "{} Starting {} (press {} to stop)",
        "->".blue(),
        ctx.config.app_file.cyan(),
        "Ctrl+C".yellow()
    );

    let invocation = Invocation::new(python, &ctx.cwd).arg(ctx.config.app_file.as_str());
    run_checked(ctx.runner, &invocation)?;
    Ok(())
}
