//! Editor installation lookup.
//!
//! The editor is assumed pre-installed through Unity Hub at a
//! version-specific location that differs per host OS. Nothing here
//! verifies the installation; `capability::check_capabilities` reports a
//! missing editor, and the build driver fails when it cannot launch one.

use std::path::{Path, PathBuf};

use unibuild_common::paths::home_dir;

/// Exit the editor once the build finishes.
pub const QUIT_FLAG: &str = "-quit";

/// Run the editor headless, without the graphical environment.
pub const BATCH_MODE_FLAG: &str = "-batchmode";

/// Flag preceding the project directory argument.
pub const PROJECT_PATH_ARG: &str = "-projectPath";

/// Path to the editor executable for a given version.
///
/// `install_root` overrides the Unity Hub install convention of the host
/// OS (configurable as `editor_root`).
pub fn executable_path(version: &str, install_root: Option<&Path>) -> PathBuf {
    let root = install_root
        .map(Path::to_path_buf)
        .unwrap_or_else(default_install_root);
    let versioned = root.join(version);

    if cfg!(windows) {
        versioned.join("Editor").join("Unity.exe")
    } else if cfg!(target_os = "macos") {
        versioned.join("Unity.app/Contents/MacOS/Unity")
    } else {
        versioned.join("Editor").join("Unity")
    }
}

/// Unity Hub's default editor install root on this host.
fn default_install_root() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("C:/Program Files/Unity/Hub/Editor")
    } else if cfg!(target_os = "macos") {
        PathBuf::from("/Applications/Unity/Hub/Editor")
    } else {
        home_dir()
            .unwrap_or_else(|| PathBuf::from("/opt"))
            .join("Unity/Hub/Editor")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versioned_path_lives_under_the_install_root() {
        let path = executable_path("2020.3.1f1", Some(Path::new("/opt/editors")));
        assert!(path.starts_with("/opt/editors/2020.3.1f1"));
    }

    #[test]
    fn executable_name_matches_the_host_convention() {
        let path = executable_path("2021.2.7f1", Some(Path::new("/opt/editors")));
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("Unity"));
    }

    #[test]
    fn default_root_is_used_when_no_override_is_given() {
        let path = executable_path("2020.3.1f1", None);
        assert!(path
            .to_string_lossy()
            .contains(&format!("{}2020.3.1f1", std::path::MAIN_SEPARATOR)));
    }
}
