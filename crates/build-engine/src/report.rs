//! Per-run build report.
//!
//! The report is the durable form of the run's platform-to-archive
//! mapping, written next to the archives as
//! `<dest>/<name>_build_report.json`. Distribution of the archives is
//! out of scope; the report records what a later stage would consume.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use unibuild_common::error::UnibuildResult;
use unibuild_platform_core::TargetPlatform;

/// Summary of one build run (`<name>_build_report.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReport {
    /// Project name.
    pub project: String,

    /// Editor version the players were built with.
    pub editor_version: String,

    /// Run start (ISO 8601).
    pub started_at: String,

    /// Run end (ISO 8601). Empty until the run finishes.
    pub finished_at: String,

    /// Archives produced, in build order.
    pub archives: Vec<ArchiveEntry>,
}

/// One produced archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveEntry {
    /// Platform label, as used in directory and archive names.
    pub platform: String,

    /// Path to the produced archive.
    pub archive: PathBuf,

    /// Wall-clock duration of build + fix + packaging.
    pub duration_secs: f64,
}

impl BuildReport {
    /// Start a report for a new run.
    pub fn begin(project: impl Into<String>, editor_version: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            editor_version: editor_version.into(),
            started_at: chrono::Utc::now().to_rfc3339(),
            finished_at: String::new(),
            archives: Vec::new(),
        }
    }

    /// Record one completed platform.
    pub fn record(&mut self, platform: TargetPlatform, archive: PathBuf, duration: Duration) {
        self.archives.push(ArchiveEntry {
            platform: platform.name().to_string(),
            archive,
            duration_secs: duration.as_secs_f64(),
        });
    }

    /// Stamp the run end.
    pub fn finish(&mut self) {
        self.finished_at = chrono::Utc::now().to_rfc3339();
    }

    /// Report file name for a project.
    pub fn file_name(project_name: &str) -> String {
        format!("{project_name}_build_report.json")
    }

    /// Write the report into the destination root.
    pub fn write(&self, dest_dir: &Path) -> UnibuildResult<PathBuf> {
        let path = dest_dir.join(Self::file_name(&self.project));
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        Ok(path)
    }
}
