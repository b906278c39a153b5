use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use super::Context;
use crate::error::CliError;
use crate::platform::Platform;
use crate::process::{run_checked, Invocation};

/// A project's isolated Python environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEnv {
    root: PathBuf,
    platform: Platform,
}

impl VirtualEnv {
    /// The environment configured for `project_dir` (it may not exist yet).
    pub fn for_project(ctx: &Context<'_>, project_dir: &Path) -> Self {
        Self {
            root: ctx.config.venv_root(project_dir),
            platform: ctx.platform,
        }
    }

    pub fn pip(&self) -> PathBuf {
        self.platform.venv_executable(&self.root, "pip")
    }

    pub fn python(&self) -> PathBuf {
        self.platform.venv_executable(&self.root, "python")
    }

    pub fn exists(&self) -> bool {
        self.pip().exists()
    }

    /// Fail with [`CliError::EnvironmentNotFound`] unless pip is present.
    pub fn require(&self) -> Result<(), CliError> {
        let pip = self.pip();
        if pip.exists() {
            Ok(())
        } else {
            Err(CliError::EnvironmentNotFound { path: pip })
        }
    }
}

/// Create a fresh virtualenv inside `project_dir` with `<python> -m venv`.
pub fn create_environment(ctx: &Context<'_>, project_dir: &Path) -> Result<VirtualEnv, CliError> {
    let python = ctx.config.python_for(ctx.platform);
    let invocation = Invocation::new(python, project_dir)
        .args(["-m", "venv"])
        .arg(ctx.config.venv_dir.as_str());
    run_checked(ctx.runner, &invocation)?;
    Ok(VirtualEnv::for_project(ctx, project_dir))
}

/// `pip install <packages…>` with live output.
pub fn install_packages(
    ctx: &Context<'_>,
    env: &VirtualEnv,
    project_dir: &Path,
    packages: &[String],
) -> Result<(), CliError> {
    let invocation = Invocation::new(env.pip(), project_dir)
        .arg("install")
        .args(packages.iter().cloned());
    run_checked(ctx.runner, &invocation)?;
    tracing::info!(count = packages.len(), "packages installed");
    Ok(())
}

/// Overwrite the manifest with `pip freeze` output. Returns the manifest path.
pub fn freeze(ctx: &Context<'_>, env: &VirtualEnv, project_dir: &Path) -> Result<PathBuf, CliError> {
    let invocation = Invocation::new(env.pip(), project_dir).arg("freeze").capture();
    let output = run_checked(ctx.runner, &invocation)?;

    let manifest = ctx.config.manifest_path(project_dir);
    fs::write(&manifest, output.stdout)?;
    tracing::debug!(path = %manifest.display(), "wrote manifest");
    Ok(manifest)
}

/// Create an environment in `project_dir`, install the base framework plus
/// `extras`, then snapshot the installed set into the manifest.
///
/// Steps run strictly in order and stop at the first failure. Nothing is
/// cleaned up on failure.
pub fn provision(ctx: &Context<'_>, project_dir: &Path, extras: &[String]) -> Result<(), CliError> {
    println!("{}", "Creating virtual environment...".cyan());
    let env = create_environment(ctx, project_dir)?;

    println!("{}", "Downloading dependencies...".cyan());
    let mut packages = Vec::with_capacity(extras.len() + 1);
    packages.push(ctx.config.base_package.clone());
    packages.extend(extras.iter().cloned());
    install_packages(ctx, &env, project_dir, &packages)?;

    freeze(ctx, &env, project_dir)?;
    println!("{}", "Dependencies installed successfully.".green());
    Ok(())
}
