use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use super::install::parse_dependency_list;
use super::provision;
use super::templates::{DirectoryTemplate, EmbeddedTemplate, TemplateStore};
use super::Context;
use crate::error::CliError;
use crate::prompt::{validate_project_name, Prompter, DEPENDENCY_CATALOG};

/// Raw flags for `flaskcli init`, before prompting fills the gaps.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub name: Option<String>,
    /// Comma-separated extra packages; skips the multi-select when set.
    pub dependencies: Option<String>,
    pub no_interactive: bool,
    /// Filesystem template to use instead of the bundled one.
    pub template: Option<PathBuf>,
}

/// Fully resolved answers for a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    pub name: String,
    pub dependencies: Vec<String>,
}

/// Fill in the project name and extra packages from flags, prompting for
/// whatever is missing unless `no_interactive` is set.
pub fn resolve_request(
    opts: &InitOptions,
    prompter: &dyn Prompter,
) -> Result<ProjectRequest, CliError> {
    let name = match &opts.name {
        Some(name) => validate_project_name(name)
            .map_err(CliError::InvalidProjectName)?
            .to_string(),
        None if opts.no_interactive => return Err(CliError::MissingArgument("project name")),
        None => prompter.project_name()?,
    };

    let dependencies = match &opts.dependencies {
        Some(raw) => parse_dependency_list(raw),
        None if opts.no_interactive => Vec::new(),
        None => prompter.dependencies(DEPENDENCY_CATALOG)?,
    };

    Ok(ProjectRequest { name, dependencies })
}

/// Materialize `template` into `base_dir/name`.
///
/// Fails with [`CliError::ProjectAlreadyExists`] before touching the
/// filesystem if the target exists. A failure midway through the copy
/// leaves the partial tree in place.
pub fn scaffold(
    template: &dyn TemplateStore,
    base_dir: &Path,
    name: &str,
) -> Result<PathBuf, CliError> {
    let name = validate_project_name(name).map_err(CliError::InvalidProjectName)?;
    let target = base_dir.join(name);
    if target.exists() {
        return Err(CliError::ProjectAlreadyExists { path: target });
    }

    fs::create_dir_all(&target)?;
    let count = template.materialize(&target)?;
    tracing::info!(path = %target.display(), files = count, "project scaffolded");
    Ok(target)
}

/// `flaskcli init`: scaffold a new project then provision its environment.
pub fn run(ctx: &Context<'_>, opts: InitOptions, prompter: &dyn Prompter) -> Result<(), CliError> {
    let request = resolve_request(&opts, prompter)?;

    let template: Box<dyn TemplateStore> = match &opts.template {
        Some(dir) => Box::new(DirectoryTemplate::new(ctx.cwd.join(dir))?),
        None => Box::new(EmbeddedTemplate),
    };

    println!(
        "{}",
        format!("Creating Flask project: {}...", request.name).yellow()
    );
    let project_dir = scaffold(template.as_ref(), &ctx.cwd, &request.name)?;
    println!(
        "{} Project {} created successfully.",
        "✓".green(),
        request.name.green()
    );

    provision::provision(ctx, &project_dir, &request.dependencies)?;

    println!();
    println!("  cd {}", request.name);
    println!("  flaskcli run");
    println!();
    Ok(())
}
