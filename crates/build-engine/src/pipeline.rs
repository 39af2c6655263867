//! Full build pipeline.
//!
//! Construction resolves everything a run needs up front: the expanded
//! destination root, the project's editor version and executable, the
//! permission environment, and the archiver. `run` then creates the
//! platform directories and executes build, fix, and package per
//! target, strictly in sequence.

use std::path::{Path, PathBuf};
use std::time::Instant;

use unibuild_common::config::AppConfig;
use unibuild_common::error::UnibuildResult;
use unibuild_common::paths::expand_home;
use unibuild_platform_core::TargetPlatform;
use unibuild_project_model::UnityProject;

use crate::archive::Archiver;
use crate::driver::{create_platform_directories, BuildDriver};
use crate::editor;
use crate::fixer::PermissionFixer;
use crate::report::BuildReport;

/// A resolved, ready-to-run build pipeline for one project.
#[derive(Debug)]
pub struct BuildPipeline {
    project: UnityProject,
    dest_dir: PathBuf,
    editor_version: String,
    driver: BuildDriver,
    fixer: PermissionFixer,
    archiver: Archiver,
}

impl BuildPipeline {
    /// Resolve a pipeline for `project`, writing into `dest_dir`.
    ///
    /// Expands the `~` shorthand in `dest_dir` and creates the directory
    /// tree (idempotent). Fails when the project's version metadata is
    /// unreadable or no archiver is installed.
    pub fn new(project: UnityProject, dest_dir: &str, config: &AppConfig) -> UnibuildResult<Self> {
        let dest_dir = expand_home(dest_dir)?;
        std::fs::create_dir_all(&dest_dir)?;

        let editor_version = project.editor_version()?;
        let executable = editor::executable_path(&editor_version, config.editor_root.as_deref());
        tracing::debug!(
            "project {} uses editor {editor_version} ({})",
            project.name(),
            executable.display()
        );

        // The editor expects an absolute project path.
        let project_root = std::fs::canonicalize(project.root())?;
        let driver = BuildDriver::new(executable, project_root, project.name().to_string());

        Ok(Self {
            project,
            dest_dir,
            editor_version,
            driver,
            fixer: PermissionFixer::detect(),
            archiver: Archiver::resolve(config.archiver.as_deref())?,
        })
    }

    pub fn project(&self) -> &UnityProject {
        &self.project
    }

    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    pub fn editor_version(&self) -> &str {
        &self.editor_version
    }

    pub fn editor_executable(&self) -> &Path {
        self.driver.editor()
    }

    /// Run the pipeline for the given targets.
    ///
    /// Targets are processed strictly in the order given; the first
    /// failure halts the run and propagates, leaving earlier archives on
    /// disk. On success the report is written into the destination root.
    pub fn run(&self, platforms: &[TargetPlatform]) -> UnibuildResult<BuildReport> {
        let platform_dirs = create_platform_directories(&self.dest_dir, platforms)?;
        let mut report = BuildReport::begin(self.project.name(), &self.editor_version);

        for (platform, platform_dir) in platform_dirs {
            let started = Instant::now();

            let build_path = self.driver.build(platform, &platform_dir)?;
            self.fixer.fix(platform, &build_path)?;
            let archive = self
                .archiver
                .package(&self.dest_dir, self.project.name(), platform)?;

            let elapsed = started.elapsed();
            tracing::info!(
                "{platform} finished in {:.1}s: {}",
                elapsed.as_secs_f64(),
                archive.display()
            );
            report.record(platform, archive, elapsed);
        }

        report.finish();
        report.write(&self.dest_dir)?;
        Ok(report)
    }
}
