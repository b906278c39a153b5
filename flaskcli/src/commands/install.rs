use colored::Colorize;
use std::path::Path;

use super::provision::{freeze, install_packages, VirtualEnv};
use super::Context;
use crate::error::CliError;

/// Split a comma-separated list and trim each entry. Empty entries are kept,
/// so `"a, b,"` gives `["a", "b", ""]`.
pub fn split_dependency_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|dep| dep.trim().to_string()).collect()
}

/// Like [`split_dependency_list`] but drops empty entries.
pub fn parse_dependency_list(raw: &str) -> Vec<String> {
    split_dependency_list(raw)
        .into_iter()
        .filter(|dep| !dep.is_empty())
        .collect()
}

/// Install `raw` (comma-separated) into the existing environment of
/// `project_dir` and refresh the manifest. Returns the installed names.
pub fn install(ctx: &Context<'_>, project_dir: &Path, raw: &str) -> Result<Vec<String>, CliError> {
    let packages = parse_dependency_list(raw);
    if packages.is_empty() {
        return Err(CliError::MissingArgument("dependencies to install"));
    }

    let env = VirtualEnv::for_project(ctx, project_dir);
    env.require()?;

    install_packages(ctx, &env, project_dir, &packages)?;
    freeze(ctx, &env, project_dir)?;
    Ok(packages)
}

/// `flaskcli install <deps>` in the working directory.
pub fn run(ctx: &Context<'_>, deps: Option<&str>) -> Result<(), CliError> {
    let raw = deps.ok_or(CliError::MissingArgument("dependencies to install"))?;

    println!("{}", "Installing dependencies...".cyan());
    let installed = install(ctx, &ctx.cwd, raw)?;
    println!(
        "{} Dependencies installed successfully: {}",
        "✓".green(),
        installed.join(", ").cyan()
    );
    Ok(())
}
