#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use flaskcli::commands::Context;
use flaskcli::config::FlaskCliConfig;
use flaskcli::error::CliError;
use flaskcli::platform::Platform;
use flaskcli::process::{Invocation, Output, ProcessOutput, ProcessRunner};
use flaskcli::prompt::Prompter;

pub struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    pub fn new(path: &Path) -> Self {
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(path).unwrap();
        CwdGuard { original }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

pub const FREEZE_OUTPUT: &str = "blinker==1.8.2\nclick==8.1.7\nFlask==3.0.3\nflask-cors==4.0.1\n";

/// Records every invocation instead of spawning it.
///
/// `-m venv <dir>` creates fake `pip`/`python` files so later steps find an
/// environment, and captured commands answer with [`FREEZE_OUTPUT`].
pub struct RecordingRunner {
    pub calls: RefCell<Vec<Invocation>>,
    fail: Option<(String, i32)>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail: None,
        }
    }

    /// Make any command whose text contains `needle` exit with `code`.
    pub fn failing_on(needle: &str, code: i32) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail: Some((needle.to_string(), code)),
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, CliError> {
        self.calls.borrow_mut().push(invocation.clone());

        if let Some((needle, code)) = &self.fail {
            if invocation.display().contains(needle.as_str()) {
                return Ok(ProcessOutput {
                    code: Some(*code),
                    stdout: String::new(),
                });
            }
        }

        if invocation.args.len() == 3 && invocation.args[0] == "-m" && invocation.args[1] == "venv" {
            fake_venv(&invocation.cwd.join(&invocation.args[2]));
        }

        let stdout = match invocation.output {
            Output::Capture => FREEZE_OUTPUT.to_string(),
            Output::Inherit => String::new(),
        };
        Ok(ProcessOutput {
            code: Some(0),
            stdout,
        })
    }
}

/// Lay out an empty venv with `pip` and `python` for the current platform.
pub fn fake_venv(root: &Path) {
    let platform = Platform::current();
    for exe in ["pip", "python"] {
        let path = platform.venv_executable(root, exe);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }
}

pub fn context<'a>(cwd: &Path, runner: &'a RecordingRunner) -> Context<'a> {
    Context::new(cwd.to_path_buf(), FlaskCliConfig::default(), runner)
}

/// Answers prompts from fixed values and counts how often it was asked.
pub struct ScriptedPrompter {
    pub name: String,
    pub selection: Vec<String>,
    pub asked: RefCell<usize>,
}

impl ScriptedPrompter {
    pub fn new(name: &str, selection: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            selection: selection.iter().map(|s| s.to_string()).collect(),
            asked: RefCell::new(0),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn project_name(&self) -> Result<String, CliError> {
        *self.asked.borrow_mut() += 1;
        Ok(self.name.clone())
    }

    fn dependencies(&self, catalog: &[&str]) -> Result<Vec<String>, CliError> {
        *self.asked.borrow_mut() += 1;
        assert!(self.selection.iter().all(|s| catalog.contains(&s.as_str())));
        Ok(self.selection.clone())
    }
}

/// Minimal application file with the startup marker.
pub const APP_PY: &str = "from flask import Flask\n\napp = Flask(__name__)\n\n\nif __name__ == '__main__':\n    app.run(debug=True)\n";
