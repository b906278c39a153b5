use dialoguer::{Input, MultiSelect};

use crate::error::CliError;

/// Optional Flask extensions offered by `flaskcli init`.
pub const DEPENDENCY_CATALOG: &[&str] = &[
    "flask-sqlalchemy",
    "flask-login",
    "flask-cors",
    "flask-migrate",
    "flask-restful",
    "flask-jwt-extended",
    "flask-mail",
    "flask-wtf",
    "flask-bcrypt",
    "flask-debugtoolbar",
];

/// Check a project name and return it trimmed.
///
/// A valid name is non-blank, contains no path separator and is not `.` or `..`.
pub fn validate_project_name(input: &str) -> Result<&str, String> {
    let name = input.trim();
    if name.is_empty() {
        return Err("Enter a valid project name.".into());
    }
    if name.contains('/') || name.contains('\\') {
        return Err(format!("'{name}' must not contain path separators."));
    }
    if name == "." || name == ".." {
        return Err(format!("'{name}' is not a directory name."));
    }
    Ok(name)
}

/// Blocking user interaction needed by `init`.
pub trait Prompter {
    /// Ask for the project name; the answer has passed [`validate_project_name`].
    fn project_name(&self) -> Result<String, CliError>;

    /// Let the user pick any subset of `catalog`, returned in catalog order.
    fn dependencies(&self, catalog: &[&str]) -> Result<Vec<String>, CliError>;
}

/// Terminal prompts built on `dialoguer`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn project_name(&self) -> Result<String, CliError> {
        let name: String = Input::new()
            .with_prompt("Enter the flask project name")
            .validate_with(|input: &String| validate_project_name(input).map(|_| ()))
            .interact_text()?;
        Ok(name.trim().to_string())
    }

    fn dependencies(&self, catalog: &[&str]) -> Result<Vec<String>, CliError> {
        let selected = MultiSelect::new()
            .with_prompt("Select the dependencies you want to install (space to toggle, enter to confirm)")
            .items(catalog)
            .interact()?;
        Ok(selected
            .into_iter()
            .map(|idx| catalog[idx].to_string())
            .collect())
    }
}
