//! Unity project directory resolution.
//!
//! A project is identified by its directory on disk. The directory name
//! doubles as the project name, which flows into player file names and
//! archive names.

use std::path::{Path, PathBuf};

use unibuild_common::error::UnibuildError;
use unibuild_common::paths::expand_home;

use crate::version;

/// A resolved Unity project directory.
#[derive(Debug, Clone)]
pub struct UnityProject {
    /// Filesystem path to the project directory.
    root: PathBuf,

    /// Project name, derived from the directory name.
    name: String,
}

impl UnityProject {
    /// Open a project directory.
    ///
    /// Expands the `~` shorthand in `path` and fails with a configuration
    /// error if the resolved directory does not exist. Nothing is created
    /// on disk.
    pub fn open(path: &str) -> Result<Self, ProjectError> {
        let root = expand_home(path).map_err(|e| ProjectError::Config {
            message: e.to_string(),
        })?;

        if !root.is_dir() {
            return Err(ProjectError::Config {
                message: format!("project directory not found: {}", root.display()),
            });
        }

        let name = root
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ProjectError::Config {
                message: format!(
                    "cannot derive a project name from {}",
                    root.display()
                ),
            })?;

        Ok(Self { root, name })
    }

    /// Path to the project directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Project name (the directory name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Editor version recorded in the project settings metadata.
    pub fn editor_version(&self) -> Result<String, ProjectError> {
        version::read_project_version(&self.root)
    }
}

/// Errors that can occur when working with projects.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("Project configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Malformed metadata in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<ProjectError> for UnibuildError {
    fn from(e: ProjectError) -> Self {
        match e {
            ProjectError::Config { message } => UnibuildError::Config { message },
            // Malformed metadata counts as the file being unusable; both
            // surface as the missing-metadata failure.
            ProjectError::NotFound { path } | ProjectError::Parse { path, .. } => {
                UnibuildError::NotFound { path }
            }
            ProjectError::Io { source, .. } => UnibuildError::Io(source),
        }
    }
}
