use colored::Colorize;
use std::fs;

use super::provision::VirtualEnv;
use super::Context;
use crate::process::Invocation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Ok(String),
    Warning(String),
    Error(String),
}

impl CheckResult {
    pub fn is_issue(&self) -> bool {
        !matches!(self, CheckResult::Ok(_))
    }
}

/// One named diagnostic and its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub name: &'static str,
    pub result: CheckResult,
}

/// Run every project health check against the working directory.
///
/// 1. application file exists (Error if missing)
/// 2. startup marker present in it (Warning if missing)
/// 3. virtual environment exists (Warning if missing)
/// 4. manifest exists (Warning if missing)
/// 5. base package listed in the manifest (Warning if missing)
/// 6. base interpreter answers `--version` (Error if not)
pub fn diagnose(ctx: &Context<'_>) -> Vec<Check> {
    let config = &ctx.config;
    let app_path = config.app_path(&ctx.cwd);
    let manifest_path = config.manifest_path(&ctx.cwd);
    let app = fs::read_to_string(&app_path).ok();
    let manifest = fs::read_to_string(&manifest_path).ok();

    let mut checks = Vec::new();

    checks.push(Check {
        name: "Application file",
        result: match &app {
            Some(_) => CheckResult::Ok(format!("{} found", config.app_file)),
            None => CheckResult::Error(format!("{} not found", config.app_file)),
        },
    });

    checks.push(Check {
        name: "Main block",
        result: match &app {
            Some(content) if content.contains(&config.marker) => {
                CheckResult::Ok("routes can be added".into())
            }
            Some(_) => CheckResult::Warning(format!(
                "`{}` not found, `flaskcli route` will fail",
                config.marker
            )),
            None => CheckResult::Warning("skipped (no application file)".into()),
        },
    });

    let env = VirtualEnv::for_project(ctx, &ctx.cwd);
    checks.push(Check {
        name: "Virtual environment",
        result: if env.exists() {
            CheckResult::Ok(format!("{} found", config.venv_dir))
        } else {
            CheckResult::Warning(format!("{}/ not found", config.venv_dir))
        },
    });

    checks.push(Check {
        name: "Dependency manifest",
        result: match &manifest {
            Some(_) => CheckResult::Ok(format!("{} found", config.manifest_file)),
            None => CheckResult::Warning(format!("{} not found", config.manifest_file)),
        },
    });

    checks.push(Check {
        name: "Framework dependency",
        result: match &manifest {
            Some(content) if lists_package(content, &config.base_package) => {
                CheckResult::Ok(format!("{} pinned", config.base_package))
            }
            Some(_) => CheckResult::Warning(format!(
                "{} not listed in {}",
                config.base_package, config.manifest_file
            )),
            None => CheckResult::Warning("skipped (no manifest)".into()),
        },
    });

    let python = config.python_for(ctx.platform);
    let probe = Invocation::new(python.as_str(), &ctx.cwd)
        .arg("--version")
        .capture();
    checks.push(Check {
        name: "Python interpreter",
        result: match ctx.runner.run(&probe) {
            Ok(output) if output.success() => CheckResult::Ok(output.stdout.trim().to_string()),
            _ => CheckResult::Error(format!("`{python}` not found")),
        },
    });

    checks
}

/// `flaskcli doctor`: print every check and the issue count. Never fails.
pub fn run(ctx: &Context<'_>) {
    println!("{}", "flaskcli doctor: checking project health".bold());
    println!();

    let checks = diagnose(ctx);
    for check in &checks {
        match &check.result {
            CheckResult::Ok(msg) => {
                println!("  {} {} - {}", "✓".green(), check.name, msg.dimmed());
            }
            CheckResult::Warning(msg) => {
                println!("  {} {} - {}", "!".yellow(), check.name, msg.yellow());
            }
            CheckResult::Error(msg) => {
                println!("  {} {} - {}", "x".red(), check.name, msg.red());
            }
        }
    }

    let issues = checks.iter().filter(|c| c.result.is_issue()).count();
    println!();
    if issues == 0 {
        println!("{}", "All checks passed!".green().bold());
    } else {
        println!("{}", format!("{issues} issue(s) found").yellow().bold());
    }
}

// `pip freeze` lines look like `Flask==3.0.0`; names compare case-insensitively.
fn lists_package(manifest: &str, package: &str) -> bool {
    manifest.lines().any(|line| {
        let name = line
            .split(|c: char| matches!(c, '=' | '<' | '>' | '~' | '!' | ' ' | '@' | '['))
            .next()
            .unwrap_or("");
        name.eq_ignore_ascii_case(package)
    })
}

#[cfg(test)]
mod tests {
    use super::lists_package;

    #[test]
    fn finds_pinned_package_case_insensitively() {
        let manifest = "blinker==1.8.2\nFlask==3.0.3\nflask-cors==4.0.1\n";
        assert!(lists_package(manifest, "flask"));
        assert!(lists_package(manifest, "flask-cors"));
        assert!(!lists_package(manifest, "flask-login"));
    }
}
