use colored::Colorize;
use std::fs;
use std::path::Path;

use super::templates::route::{handler_name, route_block};
use super::Context;
use crate::error::CliError;

/// Splice the route block for `method`/`path` in front of the first
/// occurrence of `marker`. Returns `None` when the marker is absent.
pub fn insert_route(content: &str, marker: &str, method: &str, path: &str) -> Option<String> {
    let index = content.find(marker)?;
    let block = route_block(method, path);

    let mut out = String::with_capacity(content.len() + block.len());
    out.push_str(&content[..index]);
    out.push_str(&block);
    out.push_str(&content[index..]);
    Some(out)
}

/// Add a route to the application file in `project_dir`.
///
/// The file is only rewritten when the marker is found. Duplicate handlers
/// are not detected. Returns the generated handler name.
pub fn add_route(
    ctx: &Context<'_>,
    project_dir: &Path,
    method: &str,
    path: &str,
) -> Result<String, CliError> {
    let app_file = ctx.config.app_path(project_dir);
    if !app_file.exists() {
        return Err(CliError::AppFileNotFound { path: app_file });
    }

    let content = fs::read_to_string(&app_file)?;
    let updated = insert_route(&content, &ctx.config.marker, method, path)
        .ok_or(CliError::MarkerNotFound { file: app_file.clone() })?;
    fs::write(&app_file, updated)?;

    let name = handler_name(method, path);
    tracing::debug!(handler = %name, file = %app_file.display(), "route inserted");
    Ok(name)
}

/// `flaskcli route <method> <path>` in the working directory.
pub fn run(ctx: &Context<'_>, method: Option<&str>, path: Option<&str>) -> Result<(), CliError> {
    let (method, path) = match (non_blank(method), non_blank(path)) {
        (Some(method), Some(path)) => (method, path),
        _ => return Err(CliError::MissingArgument("HTTP method and route path")),
    };

    let handler = add_route(ctx, &ctx.cwd, method, path)?;
    println!(
        "{} Route {} {} added successfully ({}).",
        "✓".green(),
        method.to_uppercase().cyan(),
        path.cyan(),
        handler.dimmed()
    );
    Ok(())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
