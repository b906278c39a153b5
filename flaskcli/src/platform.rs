use std::path::{Path, PathBuf};

/// Operating-system convention for locating virtualenv executables.
///
/// Windows venvs keep executables in `Scripts\` with an `.exe` suffix,
/// every other platform uses `bin/` without a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Directory inside a venv that holds its executables.
    pub fn scripts_dir(self) -> &'static str {
        match self {
            Platform::Windows => "Scripts",
            Platform::Unix => "bin",
        }
    }

    /// File name of executable `name` on this platform.
    pub fn executable_name(self, name: &str) -> String {
        match self {
            Platform::Windows => format!("{name}.exe"),
            Platform::Unix => name.to_string(),
        }
    }

    /// Interpreter used to create new environments when none is configured.
    pub fn default_python(self) -> &'static str {
        match self {
            Platform::Windows => "python",
            Platform::Unix => "python3",
        }
    }

    /// Absolute-or-relative path of `name` inside the venv at `venv_root`.
    pub fn venv_executable(self, venv_root: &Path, name: &str) -> PathBuf {
        venv_root
            .join(self.scripts_dir())
            .join(self.executable_name(name))
    }
}
