//! Platform build driver.
//!
//! One editor invocation per target. The editor's exit status is logged
//! as a diagnostic only; whether the expected player file exists after
//! the call returns decides success.

use std::path::{Path, PathBuf};
use std::process::Command;

use unibuild_common::error::{UnibuildError, UnibuildResult};
use unibuild_platform_core::TargetPlatform;

use crate::editor;

/// Create `<dest>/<Platform>` for each target.
///
/// Idempotent: directories that already exist are left untouched. Returns
/// the target-to-directory mapping in the order given.
pub fn create_platform_directories(
    dest_dir: &Path,
    platforms: &[TargetPlatform],
) -> UnibuildResult<Vec<(TargetPlatform, PathBuf)>> {
    let mut dirs = Vec::with_capacity(platforms.len());
    for &platform in platforms {
        let dir = dest_dir.join(platform.name());
        std::fs::create_dir_all(&dir)?;
        dirs.push((platform, dir));
    }
    tracing::debug!(
        "created {} platform directories under {}",
        dirs.len(),
        dest_dir.display()
    );
    Ok(dirs)
}

/// Invokes the editor in batch mode to build one standalone player.
#[derive(Debug, Clone)]
pub struct BuildDriver {
    editor: PathBuf,
    project_root: PathBuf,
    project_name: String,
}

impl BuildDriver {
    pub fn new(editor: PathBuf, project_root: PathBuf, project_name: String) -> Self {
        Self {
            editor,
            project_root,
            project_name,
        }
    }

    /// The editor executable this driver launches.
    pub fn editor(&self) -> &Path {
        &self.editor
    }

    /// The player file the editor is expected to produce for `platform`.
    pub fn output_path(&self, platform: TargetPlatform, platform_dir: &Path) -> PathBuf {
        platform_dir.join(format!("{}{}", self.project_name, platform.extension()))
    }

    /// Build one target, blocking until the editor exits.
    ///
    /// Fails when the editor cannot be launched or when the expected
    /// output file is absent afterwards. A non-zero exit status with the
    /// output present is tolerated and logged.
    pub fn build(
        &self,
        platform: TargetPlatform,
        platform_dir: &Path,
    ) -> UnibuildResult<PathBuf> {
        let output = self.output_path(platform, platform_dir);
        tracing::info!("building {platform} player: {}", output.display());

        let status = Command::new(&self.editor)
            .arg(editor::QUIT_FLAG)
            .arg(editor::BATCH_MODE_FLAG)
            .arg(editor::PROJECT_PATH_ARG)
            .arg(&self.project_root)
            .arg(platform.build_flag())
            .arg(&output)
            .status()
            .map_err(|e| {
                UnibuildError::build(format!(
                    "failed to launch editor {}: {e}",
                    self.editor.display()
                ))
            })?;

        if !status.success() {
            // The output check below is authoritative.
            tracing::warn!("editor exited with {status} while building {platform}");
        }

        if !output.exists() {
            return Err(UnibuildError::not_found(output));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_directories_are_created_idempotently() {
        let dest = tempfile::tempdir().unwrap();
        let windows_dir = dest.path().join("Windows");
        std::fs::create_dir(&windows_dir).unwrap();
        let marker = windows_dir.join("existing.txt");
        std::fs::write(&marker, "keep me").unwrap();

        create_platform_directories(dest.path(), &TargetPlatform::ALL).unwrap();
        let dirs = create_platform_directories(dest.path(), &TargetPlatform::ALL)
            .expect("re-running directory creation must not fail");

        assert_eq!(dirs.len(), 3);
        assert_eq!(dirs[0].1, windows_dir);
        assert_eq!(std::fs::read_to_string(&marker).unwrap(), "keep me");
    }

    #[test]
    fn output_path_combines_name_and_extension() {
        let driver = BuildDriver::new(
            PathBuf::from("/opt/editors/2020.3.1f1/Editor/Unity"),
            PathBuf::from("/work/MyProject"),
            "MyProject".to_string(),
        );
        let out = driver.output_path(TargetPlatform::Linux, Path::new("/out/Linux"));
        assert_eq!(out, PathBuf::from("/out/Linux/MyProject.x86_64"));

        let out = driver.output_path(TargetPlatform::MacOS, Path::new("/out/OSX"));
        assert_eq!(out, PathBuf::from("/out/OSX/MyProject.app"));
    }

    #[cfg(unix)]
    mod editor_invocation {
        use super::*;
        use std::os::unix::fs::PermissionsExt;

        /// Install a fake editor script under `dir` and return its path.
        fn fake_editor(dir: &Path, body: &str) -> PathBuf {
            let path = dir.join("Unity");
            std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        fn driver_with(editor: PathBuf, project: &Path) -> BuildDriver {
            BuildDriver::new(editor, project.to_path_buf(), "Demo".to_string())
        }

        /// Script body that touches the last argument (the output path).
        const TOUCH_OUTPUT: &str = r#"for a in "$@"; do out="$a"; done; touch "$out""#;

        #[test]
        fn build_succeeds_when_the_output_appears() {
            let dir = tempfile::tempdir().unwrap();
            let editor = fake_editor(dir.path(), TOUCH_OUTPUT);
            let platform_dir = dir.path().join("Linux");
            std::fs::create_dir(&platform_dir).unwrap();

            let driver = driver_with(editor, dir.path());
            let built = driver.build(TargetPlatform::Linux, &platform_dir).unwrap();
            assert_eq!(built, platform_dir.join("Demo.x86_64"));
            assert!(built.exists());
        }

        #[test]
        fn missing_output_is_a_not_found_error() {
            let dir = tempfile::tempdir().unwrap();
            let editor = fake_editor(dir.path(), "exit 0");
            let platform_dir = dir.path().join("Linux");
            std::fs::create_dir(&platform_dir).unwrap();

            let driver = driver_with(editor, dir.path());
            let err = driver
                .build(TargetPlatform::Linux, &platform_dir)
                .unwrap_err();
            assert!(matches!(err, UnibuildError::NotFound { .. }));
        }

        #[test]
        fn nonzero_exit_with_output_present_is_tolerated() {
            let dir = tempfile::tempdir().unwrap();
            let editor = fake_editor(dir.path(), &format!("{TOUCH_OUTPUT}\nexit 3"));
            let platform_dir = dir.path().join("Linux");
            std::fs::create_dir(&platform_dir).unwrap();

            let driver = driver_with(editor, dir.path());
            assert!(driver.build(TargetPlatform::Linux, &platform_dir).is_ok());
        }

        #[test]
        fn unlaunchable_editor_is_a_build_error() {
            let dir = tempfile::tempdir().unwrap();
            let platform_dir = dir.path().join("Linux");
            std::fs::create_dir(&platform_dir).unwrap();

            let driver = driver_with(dir.path().join("no-such-editor"), dir.path());
            let err = driver
                .build(TargetPlatform::Linux, &platform_dir)
                .unwrap_err();
            assert!(matches!(err, UnibuildError::Build { .. }));
        }
    }
}
