//! Show project information.

use unibuild_build_engine::editor;
use unibuild_common::config::AppConfig;
use unibuild_platform_core::TargetPlatform;
use unibuild_project_model::UnityProject;

pub fn run(project: String, config: &AppConfig) -> anyhow::Result<()> {
    let project = UnityProject::open(&project)
        .map_err(|e| anyhow::anyhow!("Failed to open project: {e}"))?;

    let version = project
        .editor_version()
        .map_err(|e| anyhow::anyhow!("Failed to read editor version: {e}"))?;
    let executable = editor::executable_path(&version, config.editor_root.as_deref());

    println!("Project: {}", project.name());
    println!("  Root: {}", project.root().display());
    println!("  Editor version: {version}");
    println!(
        "  Editor executable: {} {}",
        executable.display(),
        if executable.is_file() {
            "(installed)"
        } else {
            "(not installed)"
        }
    );
    println!();

    println!("Standalone targets:");
    for platform in TargetPlatform::ALL {
        println!(
            "  {}: {}{}  ({})",
            platform.name(),
            project.name(),
            platform.extension(),
            platform.build_flag()
        );
    }

    Ok(())
}
