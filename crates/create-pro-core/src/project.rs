//! Pipeline orchestration
//!
//! One strictly sequential chain: Init -> BaseDepsInstalled ->
//! StructureWritten -> DepsInstalled -> ConfigWritten -> ReadmeWritten.
//! The first failing stage aborts the run; partially created output is left
//! in place for the user to clean up or overwrite on retry.

use crate::config::ProjectConfig;
use crate::{configfiles, deps, structure};
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

fn stage(message: &str) {
    println!("{} {}", "->".blue(), message.dimmed());
}

/// Run the whole generation pipeline for a validated configuration
///
/// Returns the project directory on success. Package-manager output is
/// streamed straight to the terminal between stage markers.
pub async fn create_project(config: &ProjectConfig) -> Result<PathBuf> {
    let current_dir = std::env::current_dir()?;
    let project_dir = current_dir.join(&config.project_name);

    stage("Initializing project directory...");
    deps::initialize_project(&project_dir, config).await?;

    stage("Installing React and Vite...");
    deps::install_base_dependencies(&project_dir, config).await?;

    stage("Generating project structure...");
    structure::create_structure(&project_dir, config).await?;

    stage("Installing additional dependencies...");
    deps::install_dependencies(&project_dir, config).await?;

    stage("Generating configuration files...");
    configfiles::generate_config_files(&project_dir, config).await?;

    stage("Generating README...");
    configfiles::generate_readme(&project_dir, config).await?;

    println!(
        "{}",
        format!("Project {} created successfully!", config.project_name)
            .green()
            .bold()
    );
    println!(
        "{}",
        format!(
            "cd {} && {} dev",
            config.project_name,
            config.package_manager.run_prefix()
        )
        .yellow()
    );

    Ok(project_dir)
}
