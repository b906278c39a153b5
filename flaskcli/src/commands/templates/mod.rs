use std::fs;
use std::path::{Path, PathBuf};

use rust_embed::RustEmbed;
use walkdir::WalkDir;

use crate::error::CliError;

pub mod route;

/// Skeleton of a new Flask project, compiled into the binary.
#[derive(RustEmbed)]
#[folder = "template/"]
struct ProjectSkeleton;

/// Source of the file tree copied into a freshly created project.
pub trait TemplateStore {
    /// Relative paths (with `/` separators) of every file in the template.
    fn files(&self) -> Result<Vec<String>, CliError>;

    /// Copy every template file under `dest`, preserving relative structure.
    /// Returns the number of files written.
    fn materialize(&self, dest: &Path) -> Result<usize, CliError>;
}

/// The template bundled with `flaskcli`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedTemplate;

impl EmbeddedTemplate {
    /// Raw bytes of one bundled file, if present.
    pub fn get(path: &str) -> Option<Vec<u8>> {
        ProjectSkeleton::get(path).map(|file| file.data.into_owned())
    }
}

impl TemplateStore for EmbeddedTemplate {
    fn files(&self) -> Result<Vec<String>, CliError> {
        let mut files: Vec<String> = ProjectSkeleton::iter().map(|p| p.into_owned()).collect();
        files.sort();
        Ok(files)
    }

    fn materialize(&self, dest: &Path) -> Result<usize, CliError> {
        let mut written = 0;
        for rel in self.files()? {
            let file = ProjectSkeleton::get(&rel)
                .ok_or_else(|| CliError::Template(format!("bundled file '{rel}' vanished")))?;
            let target = dest.join(&rel);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, &*file.data)?;
            tracing::debug!(file = %rel, "copied template file");
            written += 1;
        }
        Ok(written)
    }
}

/// A template read from a directory on disk (`flaskcli init --template <DIR>`).
#[derive(Debug, Clone)]
pub struct DirectoryTemplate {
    root: PathBuf,
}

impl DirectoryTemplate {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, CliError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(CliError::Template(format!(
                "'{}' is not a directory",
                root.display()
            )));
        }
        Ok(Self { root })
    }
}

impl DirectoryTemplate {
    /// Relative directories and files under the template root, in walk order.
    ///
    /// The whole listing is taken before anything is written. `skip` (the
    /// project being created) is left out when it lies inside the template,
    /// so `--template .` does not copy the new project into itself.
    fn entries(&self, skip: Option<&Path>) -> Result<(Vec<String>, Vec<String>), CliError> {
        let root = self.root.canonicalize()?;
        let skip = skip
            .filter(|p| p.exists())
            .map(Path::canonicalize)
            .transpose()?;

        let mut dirs = Vec::new();
        let mut files = Vec::new();
        let walker = WalkDir::new(&root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|e| skip.as_deref() != Some(e.path()));
        for entry in walker {
            let entry = entry.map_err(|e| CliError::Template(e.to_string()))?;
            let rel = relative_path(&root, entry.path())?;
            if entry.file_type().is_dir() {
                dirs.push(rel);
            } else if entry.file_type().is_file() {
                files.push(rel);
            }
        }
        Ok((dirs, files))
    }
}

impl TemplateStore for DirectoryTemplate {
    fn files(&self) -> Result<Vec<String>, CliError> {
        let (_, mut files) = self.entries(None)?;
        files.sort();
        Ok(files)
    }

    fn materialize(&self, dest: &Path) -> Result<usize, CliError> {
        let (dirs, files) = self.entries(Some(dest))?;
        for rel in &dirs {
            fs::create_dir_all(dest.join(rel))?;
        }
        for rel in &files {
            fs::copy(self.root.join(rel), dest.join(rel))?;
            tracing::debug!(file = %rel, "copied template file");
        }
        Ok(files.len())
    }
}

fn relative_path(root: &Path, path: &Path) -> Result<String, CliError> {
    let rel = path
        .strip_prefix(root)
        .map_err(|e| CliError::Template(e.to_string()))?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}
