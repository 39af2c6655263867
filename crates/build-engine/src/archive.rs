//! Build packaging.
//!
//! Each platform directory is renamed to the project name before
//! compression so the archive unpacks to `<name>/` rather than
//! `<Platform>/`, then handed to the external archiver. The archiver's
//! delete-source flag removes the staged directory on success.

use std::path::{Path, PathBuf};
use std::process::Command;

use unibuild_common::error::{UnibuildError, UnibuildResult};
use unibuild_platform_core::TargetPlatform;

/// Stock 7-Zip install location on Windows.
const WINDOWS_STOCK_7Z: &str = "C:/Program Files/7-Zip/7z.exe";

/// External archiver wrapper.
#[derive(Debug, Clone)]
pub struct Archiver {
    program: PathBuf,
}

impl Archiver {
    /// Locate an archiver executable without failing.
    ///
    /// Order: the configured override, `7z`/`7za` on `PATH`, then the
    /// stock Windows install.
    pub fn locate(override_path: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = override_path {
            return path.is_file().then(|| path.to_path_buf());
        }
        which::which("7z")
            .or_else(|_| which::which("7za"))
            .ok()
            .or_else(|| {
                let stock = PathBuf::from(WINDOWS_STOCK_7Z);
                (cfg!(windows) && stock.is_file()).then_some(stock)
            })
    }

    /// Resolve the archiver, failing when none is installed.
    pub fn resolve(override_path: Option<&Path>) -> UnibuildResult<Self> {
        let program = Self::locate(override_path).ok_or_else(|| {
            UnibuildError::archive(
                "no archiver found: install 7-Zip or set `archiver` in the config",
            )
        })?;
        Ok(Self { program })
    }

    /// Archiver with an explicit program path (tests).
    pub fn with_program(program: PathBuf) -> Self {
        Self { program }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Archive path for one platform: `<dest>/<name>_<Platform>.zip`.
    pub fn archive_path(
        dest_dir: &Path,
        project_name: &str,
        platform: TargetPlatform,
    ) -> PathBuf {
        dest_dir.join(format!("{project_name}_{}.zip", platform.name()))
    }

    /// Stage and compress one platform's build output.
    ///
    /// Renames `<dest>/<Platform>` to `<dest>/<name>`, compresses the
    /// staged directory, and verifies the archive was produced. The
    /// staged directory is deleted by the archiver on success.
    ///
    /// Re-running against an already-archived platform fails with a
    /// not-found error (the platform directory is gone); a leftover
    /// `<dest>/<name>` entry from an aborted run is never clobbered.
    pub fn package(
        &self,
        dest_dir: &Path,
        project_name: &str,
        platform: TargetPlatform,
    ) -> UnibuildResult<PathBuf> {
        let platform_dir = dest_dir.join(platform.name());
        if !platform_dir.is_dir() {
            return Err(UnibuildError::not_found(platform_dir));
        }

        let staging_dir = dest_dir.join(project_name);
        if staging_dir.exists() {
            return Err(UnibuildError::archive(format!(
                "staging directory {} already exists; remove it and re-run",
                staging_dir.display()
            )));
        }
        std::fs::rename(&platform_dir, &staging_dir)?;

        let archive_path = Self::archive_path(dest_dir, project_name, platform);
        tracing::info!(
            "archiving {} to {}",
            staging_dir.display(),
            archive_path.display()
        );

        let status = Command::new(&self.program)
            .arg("a")
            .arg("-r")
            .arg(&archive_path)
            .arg(&staging_dir)
            .arg("-sdel")
            .status()
            .map_err(|e| {
                UnibuildError::archive(format!(
                    "failed to launch {}: {e}",
                    self.program.display()
                ))
            })?;

        if !status.success() {
            return Err(UnibuildError::archive(format!(
                "{} exited with {status} while packaging {platform}",
                self.program.display()
            )));
        }

        if !archive_path.is_file() {
            return Err(UnibuildError::archive(format!(
                "archiver reported success but {} was not created",
                archive_path.display()
            )));
        }

        Ok(archive_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_path_has_the_expected_shape() {
        let path = Archiver::archive_path(Path::new("/out"), "Demo", TargetPlatform::MacOS);
        assert_eq!(path, PathBuf::from("/out/Demo_OSX.zip"));
    }

    #[test]
    fn missing_override_is_not_used() {
        assert_eq!(
            Archiver::locate(Some(Path::new("/no/such/7z-binary"))),
            None
        );
    }

    #[cfg(unix)]
    mod packaging {
        use super::*;
        use std::os::unix::fs::PermissionsExt;

        /// Fake archiver emulating `7z a -r <archive> <source> -sdel`.
        fn fake_archiver(dir: &Path, body: &str) -> Archiver {
            let path = dir.join("7z");
            std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            Archiver::with_program(path)
        }

        const ARCHIVE_AND_DELETE: &str = r#"touch "$3" && rm -rf "$4""#;

        fn platform_dir_with_player(dest: &Path) -> PathBuf {
            let dir = dest.join("Windows");
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(dir.join("Demo.exe"), b"player").unwrap();
            dir
        }

        #[test]
        fn package_produces_archive_and_removes_source() {
            let dest = tempfile::tempdir().unwrap();
            let platform_dir = platform_dir_with_player(dest.path());
            let archiver = fake_archiver(dest.path(), ARCHIVE_AND_DELETE);

            let archive = archiver
                .package(dest.path(), "Demo", TargetPlatform::Windows)
                .unwrap();

            assert_eq!(archive, dest.path().join("Demo_Windows.zip"));
            assert!(archive.is_file());
            assert!(!platform_dir.exists());
            assert!(!dest.path().join("Demo").exists());
        }

        #[test]
        fn repackaging_an_archived_platform_fails_cleanly() {
            let dest = tempfile::tempdir().unwrap();
            platform_dir_with_player(dest.path());
            let archiver = fake_archiver(dest.path(), ARCHIVE_AND_DELETE);

            archiver
                .package(dest.path(), "Demo", TargetPlatform::Windows)
                .unwrap();
            let err = archiver
                .package(dest.path(), "Demo", TargetPlatform::Windows)
                .unwrap_err();
            assert!(matches!(err, UnibuildError::NotFound { .. }));
        }

        #[test]
        fn leftover_staging_directory_is_never_clobbered() {
            let dest = tempfile::tempdir().unwrap();
            let platform_dir = platform_dir_with_player(dest.path());
            std::fs::create_dir(dest.path().join("Demo")).unwrap();
            let archiver = fake_archiver(dest.path(), ARCHIVE_AND_DELETE);

            let err = archiver
                .package(dest.path(), "Demo", TargetPlatform::Windows)
                .unwrap_err();
            assert!(matches!(err, UnibuildError::Archive { .. }));
            // The build output must survive the refused rename.
            assert!(platform_dir.is_dir());
        }

        #[test]
        fn failing_archiver_is_an_archive_error() {
            let dest = tempfile::tempdir().unwrap();
            platform_dir_with_player(dest.path());
            let archiver = fake_archiver(dest.path(), "exit 2");

            let err = archiver
                .package(dest.path(), "Demo", TargetPlatform::Windows)
                .unwrap_err();
            assert!(matches!(err, UnibuildError::Archive { .. }));
        }

        #[test]
        fn silent_archiver_without_output_is_an_archive_error() {
            let dest = tempfile::tempdir().unwrap();
            platform_dir_with_player(dest.path());
            let archiver = fake_archiver(dest.path(), "exit 0");

            let err = archiver
                .package(dest.path(), "Demo", TargetPlatform::Windows)
                .unwrap_err();
            assert!(matches!(err, UnibuildError::Archive { .. }));
        }
    }
}
