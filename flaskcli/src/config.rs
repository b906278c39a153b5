use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CliError;
use crate::platform::Platform;

/// Name of the optional per-directory config file.
pub const CONFIG_FILE: &str = "flaskcli.yaml";

/// Tool settings, loaded from `flaskcli.yaml` when present.
///
/// ```yaml
/// python: python3.12
/// venv_dir: .venv
/// app_file: app.py
/// manifest_file: requirements.txt
/// base_package: flask
/// ```
///
/// Every key is optional; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FlaskCliConfig {
    /// Interpreter used for `-m venv`. `None` means the platform default.
    pub python: Option<String>,
    pub venv_dir: String,
    pub app_file: String,
    pub manifest_file: String,
    pub base_package: String,
    /// Literal text that new routes are inserted in front of.
    pub marker: String,
}

impl Default for FlaskCliConfig {
    fn default() -> Self {
        Self {
            python: None,
            venv_dir: "venv".into(),
            app_file: "app.py".into(),
            manifest_file: "requirements.txt".into(),
            base_package: "flask".into(),
            marker: "if __name__ == '__main__':".into(),
        }
    }
}

impl FlaskCliConfig {
    /// Load `flaskcli.yaml` from `dir`, falling back to defaults if it is absent.
    pub fn load(dir: &Path) -> Result<Self, CliError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_yaml_str(&content)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse a config from YAML text. An empty document yields defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Interpreter for creating environments on `platform`.
    pub fn python_for(&self, platform: Platform) -> String {
        self.python
            .clone()
            .unwrap_or_else(|| platform.default_python().to_string())
    }

    pub fn venv_root(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.venv_dir)
    }

    pub fn app_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.app_file)
    }

    pub fn manifest_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.manifest_file)
    }
}
