//! Error types shared across unibuild crates.

use std::path::PathBuf;

/// Top-level error type for unibuild operations.
#[derive(Debug, thiserror::Error)]
pub enum UnibuildError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Platform error: {message}")]
    Platform { message: String },

    #[error("Build error: {message}")]
    Build { message: String },

    #[error("Archive error: {message}")]
    Archive { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using UnibuildError.
pub type UnibuildResult<T> = Result<T, UnibuildError>;

impl UnibuildError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform {
            message: msg.into(),
        }
    }

    pub fn build(msg: impl Into<String>) -> Self {
        Self::Build {
            message: msg.into(),
        }
    }

    pub fn archive(msg: impl Into<String>) -> Self {
        Self::Archive {
            message: msg.into(),
        }
    }
}
