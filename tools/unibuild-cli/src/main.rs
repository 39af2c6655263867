//! Unibuild CLI — Build, package, and inspect Unity standalone releases.
//!
//! Usage:
//!   unibuild build <PROJECT> <DEST>    Build and archive every platform
//!   unibuild check [--project <PATH>]  Check external tooling
//!   unibuild info <PROJECT>            Show project information

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "unibuild",
    about = "Unity standalone builds for Windows, OS X, and Linux",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build every platform and archive the results
    Build {
        /// Path to the Unity project directory (supports `~`)
        project: String,

        /// Destination directory for builds and archives (supports `~`)
        dest: String,

        /// Restrict the run to these platforms (Windows, OSX, Linux);
        /// repeatable, defaults to all three
        #[arg(short, long)]
        platform: Vec<String>,
    },

    /// Check that the external tooling a run needs is available
    Check {
        /// Also check the editor installation for this project's version
        #[arg(long)]
        project: Option<String>,
    },

    /// Show project information
    Info {
        /// Path to the Unity project directory (supports `~`)
        project: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    unibuild_common::logging::init_logging(&unibuild_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    let config = unibuild_common::config::AppConfig::load();

    match cli.command {
        Commands::Build {
            project,
            dest,
            platform,
        } => commands::build::run(project, dest, platform, &config),
        Commands::Check { project } => commands::check::run(project, &config),
        Commands::Info { project } => commands::info::run(project, &config),
    }
}
