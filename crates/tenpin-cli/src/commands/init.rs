//! Initialize command - writes a default tenpin.toml.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tenpin_config::{Paths, TenpinConfig, write_project_config};

use crate::style::{print_command, print_hint, print_success};

pub fn run(path: &str) -> Result<()> {
    let project_dir = Path::new(path);

    if Paths::is_initialized(project_dir) {
        anyhow::bail!(
            "Project already initialized in {}. tenpin.toml already exists.",
            project_dir.display()
        );
    }

    fs::create_dir_all(project_dir).context("Failed to create project directory")?;

    let config_path = write_project_config(project_dir, &TenpinConfig::default())
        .context("Failed to write tenpin.toml")?;
    tracing::info!(path = %config_path.display(), "wrote project config");

    print_success(&format!("Wrote {}", config_path.display()));
    println!();
    print_hint("Score a game with:");
    print_command("tenpin score 5 5 3 --pad");

    Ok(())
}
