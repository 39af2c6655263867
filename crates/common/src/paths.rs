//! Home-directory shorthand expansion for user-supplied paths.
//!
//! Input paths may use `~` as a stand-in for the user's home directory,
//! at any position. Every occurrence is replaced with the resolved home
//! directory before the path touches the filesystem.

use std::path::PathBuf;

use crate::error::{UnibuildError, UnibuildResult};

/// Resolve the current user's home directory from the environment.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

/// Expand every `~` in `path` to the user's home directory.
///
/// Paths without the shorthand pass through unchanged. Fails with a
/// configuration error when the shorthand is present but no home
/// directory can be resolved.
pub fn expand_home(path: &str) -> UnibuildResult<PathBuf> {
    if !path.contains('~') {
        return Ok(PathBuf::from(path));
    }

    let home = home_dir().ok_or_else(|| {
        UnibuildError::config(format!(
            "cannot expand '~' in {path:?}: no home directory (HOME/USERPROFILE unset)"
        ))
    })?;

    Ok(PathBuf::from(
        path.replace('~', home.to_string_lossy().as_ref()),
    ))
}
