//! Capability detection and guidance.
//!
//! A build run leans on external tooling: the editor installation for
//! the project's version, an archiver, and a chmod environment for the
//! post-build permission fix. Probing these up front turns silent
//! mid-run failures into an actionable report.

use std::path::Path;

use unibuild_common::config::AppConfig;

use crate::archive::Archiver;
use crate::fixer::{detect_permission_environment, PermissionEnvironment};

/// An external tool or environment a build run may need.
#[derive(Debug, Clone)]
pub struct Capability {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub required: bool,
    pub fix_instructions: Option<String>,
}

/// Check all capabilities and report status.
///
/// The editor check needs a concrete version, so it is only included
/// when the caller has resolved one.
pub fn check_capabilities(
    editor: Option<(&str, &Path)>,
    config: &AppConfig,
) -> Vec<Capability> {
    let mut capabilities = vec![check_archiver(config), check_permission_fix()];
    if let Some((version, executable)) = editor {
        capabilities.insert(0, check_editor(version, executable));
    }
    capabilities
}

/// Check that the editor for the project's version is installed.
fn check_editor(version: &str, executable: &Path) -> Capability {
    let available = executable.is_file();

    Capability {
        name: "Editor".to_string(),
        description: format!("Unity editor {version} at {}", executable.display()),
        available,
        required: true,
        fix_instructions: if available {
            None
        } else {
            Some(format!(
                "Install editor {version} with Unity Hub, or point `editor_root` at the install root"
            ))
        },
    }
}

/// Check that an archiver is installed.
fn check_archiver(config: &AppConfig) -> Capability {
    let located = Archiver::locate(config.archiver.as_deref());

    Capability {
        name: "Archiver".to_string(),
        description: match &located {
            Some(path) => format!("7-Zip at {}", path.display()),
            None => "7-Zip for compressing builds".to_string(),
        },
        available: located.is_some(),
        required: true,
        fix_instructions: if located.is_some() {
            None
        } else {
            Some("Install 7-Zip, or set `archiver` in the config".to_string())
        },
    }
}

/// Check for a chmod environment for the post-build permission fix.
fn check_permission_fix() -> Capability {
    let env = detect_permission_environment();
    let available = env != PermissionEnvironment::Unavailable;

    Capability {
        name: "Permission Fix".to_string(),
        description: match env {
            PermissionEnvironment::Chmod => "chmod for marking players executable".to_string(),
            PermissionEnvironment::Wsl => {
                "WSL chmod for marking players executable".to_string()
            }
            PermissionEnvironment::Unavailable => {
                "chmod environment for marking players executable".to_string()
            }
        },
        available,
        // Builds still complete without it; the players just ship
        // without an executable bit.
        required: false,
        fix_instructions: if available {
            None
        } else if cfg!(windows) {
            Some("Install WSL so OSX/Linux players can be marked executable".to_string())
        } else {
            Some("Install coreutils chmod".to_string())
        },
    }
}

/// Print a user-friendly capability report.
pub fn print_capability_report(capabilities: &[Capability]) {
    println!("Unibuild System Capabilities:");
    println!("{}", "-".repeat(60));

    for cap in capabilities {
        let status = if cap.available {
            "[OK]"
        } else if cap.required {
            "[MISSING - REQUIRED]"
        } else {
            "[MISSING - OPTIONAL]"
        };

        println!("  {} {}: {}", status, cap.name, cap.description);

        if let Some(ref fix) = cap.fix_instructions {
            println!("    Fix: {fix}");
        }
    }
}
