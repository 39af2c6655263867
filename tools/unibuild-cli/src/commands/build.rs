//! Build and archive standalone players.

use unibuild_build_engine::BuildPipeline;
use unibuild_common::config::AppConfig;
use unibuild_platform_core::TargetPlatform;
use unibuild_project_model::UnityProject;

pub fn run(
    project: String,
    dest: String,
    platforms: Vec<String>,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let platforms = if platforms.is_empty() {
        TargetPlatform::ALL.to_vec()
    } else {
        platforms
            .iter()
            .map(|name| name.parse::<TargetPlatform>())
            .collect::<Result<Vec<_>, _>>()?
    };

    let project = UnityProject::open(&project)
        .map_err(|e| anyhow::anyhow!("Failed to open project: {e}"))?;

    println!("Building project: {}", project.name());

    let pipeline = BuildPipeline::new(project, &dest, config)?;
    println!("  Editor version: {}", pipeline.editor_version());
    println!("  Destination: {}", pipeline.dest_dir().display());
    println!(
        "  Platforms: {}",
        platforms
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();

    let report = pipeline.run(&platforms)?;

    println!("Build complete:");
    for entry in &report.archives {
        println!(
            "  {}: {} ({:.1}s)",
            entry.platform,
            entry.archive.display(),
            entry.duration_secs
        );
    }

    Ok(())
}
