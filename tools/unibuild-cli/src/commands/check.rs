//! Check external tooling.

use unibuild_build_engine::capability::{check_capabilities, print_capability_report};
use unibuild_build_engine::editor;
use unibuild_common::config::AppConfig;
use unibuild_project_model::UnityProject;

pub fn run(project: Option<String>, config: &AppConfig) -> anyhow::Result<()> {
    println!("Unibuild System Check");
    println!("{}", "=".repeat(50));

    // The editor check needs a project to know which version to look for.
    let editor = match project {
        Some(path) => {
            let project = UnityProject::open(&path)
                .map_err(|e| anyhow::anyhow!("Failed to open project: {e}"))?;
            let version = project
                .editor_version()
                .map_err(|e| anyhow::anyhow!("Failed to read editor version: {e}"))?;
            let executable = editor::executable_path(&version, config.editor_root.as_deref());
            println!("Project: {} (editor {version})", project.name());
            Some((version, executable))
        }
        None => None,
    };

    println!();
    let capabilities = check_capabilities(
        editor.as_ref().map(|(v, e)| (v.as_str(), e.as_path())),
        config,
    );
    print_capability_report(&capabilities);

    let all_required_ok = capabilities
        .iter()
        .filter(|c| c.required)
        .all(|c| c.available);

    println!();
    if all_required_ok {
        println!("All required tooling is available. Unibuild is ready.");
    } else {
        println!("Some required tooling is missing. See above for fixes.");
    }

    Ok(())
}
