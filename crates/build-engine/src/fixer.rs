//! Post-build permission fixing.
//!
//! OSX and Linux players ship a binary that must carry the executable
//! bit before distribution. Editors driven from a Windows host leave it
//! unset, so the fixer shells out to `chmod`: natively on Unix hosts,
//! through WSL on Windows hosts. Availability is probed once up front;
//! a host without any chmod environment skips the step with a warning,
//! the sole tolerated failure in the pipeline.

use std::path::{Path, PathBuf};
use std::process::Command;

use unibuild_common::error::{UnibuildError, UnibuildResult};
use unibuild_platform_core::TargetPlatform;

/// How executable permissions can be applied on this host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionEnvironment {
    /// Native `chmod` on the host.
    Chmod,
    /// Windows host delegating to `chmod` inside WSL.
    Wsl,
    /// No permission-change environment; the fix step is skipped.
    Unavailable,
}

/// Probe the host for an available permission-change environment.
pub fn detect_permission_environment() -> PermissionEnvironment {
    if cfg!(windows) {
        if which::which("wsl").is_ok() {
            PermissionEnvironment::Wsl
        } else {
            PermissionEnvironment::Unavailable
        }
    } else if which::which("chmod").is_ok() {
        PermissionEnvironment::Chmod
    } else {
        PermissionEnvironment::Unavailable
    }
}

/// What the fixer did for one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixOutcome {
    /// Executable bit applied.
    Applied,
    /// No permission environment available; nothing was changed.
    Skipped,
    /// The target's player runs as-is.
    NotNeeded,
}

/// Marks produced players executable.
#[derive(Debug, Clone)]
pub struct PermissionFixer {
    env: PermissionEnvironment,
}

impl PermissionFixer {
    /// Fixer using the detected host environment.
    pub fn detect() -> Self {
        Self {
            env: detect_permission_environment(),
        }
    }

    /// Fixer with a fixed environment (tests, or forced skipping).
    pub fn with_environment(env: PermissionEnvironment) -> Self {
        Self { env }
    }

    pub fn environment(&self) -> PermissionEnvironment {
        self.env
    }

    /// Mark the player produced at `build_path` executable.
    ///
    /// `build_path` is the file the build driver validated, e.g.
    /// `<dest>/OSX/Name.app`. The player binary inside it must exist.
    pub fn fix(
        &self,
        platform: TargetPlatform,
        build_path: &Path,
    ) -> UnibuildResult<FixOutcome> {
        let Some(binary) = player_binary(platform, build_path) else {
            return Ok(FixOutcome::NotNeeded);
        };

        if !binary.exists() {
            return Err(UnibuildError::not_found(binary));
        }

        match self.env {
            PermissionEnvironment::Unavailable => {
                tracing::warn!(
                    "no chmod environment available; {} keeps default permissions",
                    binary.display()
                );
                Ok(FixOutcome::Skipped)
            }
            PermissionEnvironment::Chmod => {
                run_chmod(Command::new("chmod").arg("+x").arg(&binary), &binary)
            }
            PermissionEnvironment::Wsl => {
                let wsl_path = to_wsl_path(&binary).ok_or_else(|| {
                    UnibuildError::platform(format!(
                        "cannot map {} into the WSL mount layout",
                        binary.display()
                    ))
                })?;
                run_chmod(
                    Command::new("wsl").arg("chmod").arg("+x").arg(&wsl_path),
                    &binary,
                )
            }
        }
    }
}

fn run_chmod(command: &mut Command, binary: &Path) -> UnibuildResult<FixOutcome> {
    let status = command.status().map_err(|e| {
        UnibuildError::build(format!(
            "failed to launch permission fix for {}: {e}",
            binary.display()
        ))
    })?;

    if !status.success() {
        return Err(UnibuildError::build(format!(
            "permission fix exited with {status} for {}",
            binary.display()
        )));
    }

    tracing::debug!("marked {} executable", binary.display());
    Ok(FixOutcome::Applied)
}

/// The file inside a build output that must carry the executable bit.
///
/// `None` for targets whose players run without one. For OSX the player
/// binary sits inside the app bundle under `Contents/MacOS/<name>`.
pub fn player_binary(platform: TargetPlatform, build_path: &Path) -> Option<PathBuf> {
    match platform {
        TargetPlatform::Windows => None,
        TargetPlatform::Linux => Some(build_path.to_path_buf()),
        TargetPlatform::MacOS => {
            let stem = build_path.file_stem()?;
            Some(build_path.join("Contents").join("MacOS").join(stem))
        }
    }
}

/// Convert a Windows drive path to the WSL mount convention
/// (`C:/Users/me` becomes `/mnt/c/Users/me`).
pub fn to_wsl_path(path: &Path) -> Option<String> {
    let text = path.to_str()?.replace('\\', "/");
    let (drive, rest) = text.split_once(":/")?;
    if drive.len() != 1 || !drive.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(format!("/mnt/{}/{rest}", drive.to_ascii_lowercase()))
}
