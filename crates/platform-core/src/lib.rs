//! Unibuild target platform contracts.
//!
//! This crate contains the fixed table of standalone build targets used
//! by the build engine and CLI without coupling to a concrete invocation
//! of the editor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A standalone build target.
///
/// Each target carries its destination directory name, the file extension
/// of the produced player, and the editor command-line flag that selects
/// the build. The table is fixed; there is no way to register targets at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetPlatform {
    Windows,
    MacOS,
    Linux,
}

impl TargetPlatform {
    /// All supported targets, in canonical build order.
    pub const ALL: [TargetPlatform; 3] = [
        TargetPlatform::Windows,
        TargetPlatform::MacOS,
        TargetPlatform::Linux,
    ];

    /// Directory and archive label for this target.
    ///
    /// These names appear verbatim in the destination layout
    /// (`<dest>/<name>/`) and in archive file names.
    pub fn name(&self) -> &'static str {
        match self {
            TargetPlatform::Windows => "Windows",
            TargetPlatform::MacOS => "OSX",
            TargetPlatform::Linux => "Linux",
        }
    }

    /// File extension of the produced standalone player.
    pub fn extension(&self) -> &'static str {
        match self {
            TargetPlatform::Windows => ".exe",
            TargetPlatform::MacOS => ".app",
            TargetPlatform::Linux => ".x86_64",
        }
    }

    /// Editor command-line flag that selects this build target.
    pub fn build_flag(&self) -> &'static str {
        match self {
            TargetPlatform::Windows => "-buildWindows64Player",
            TargetPlatform::MacOS => "-buildOSXUniversalPlayer",
            TargetPlatform::Linux => "-buildLinux64Player",
        }
    }

    /// Whether the produced player needs an executable bit after the build.
    ///
    /// Windows players run as-is; the other targets ship a binary that
    /// must be marked executable before distribution.
    pub fn needs_executable_bit(&self) -> bool {
        !matches!(self, TargetPlatform::Windows)
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown platform name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown platform {name:?} (expected Windows, OSX, or Linux)")]
pub struct UnknownPlatform {
    pub name: String,
}

impl FromStr for TargetPlatform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" => Ok(TargetPlatform::Windows),
            "osx" | "macos" => Ok(TargetPlatform::MacOS),
            "linux" => Ok(TargetPlatform::Linux),
            _ => Err(UnknownPlatform {
                name: s.to_string(),
            }),
        }
    }
}
