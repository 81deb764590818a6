//! Configuration management commands.

use anyhow::{Context, Result};
use std::path::Path;
use tenpin_config::{Paths, TenpinConfig};

use crate::style::{Tone, apply_output_config, print_hint};

/// Show current configuration.
pub fn show(project: &str, format: &str) -> Result<()> {
    let project_path = Path::new(project);

    let config =
        TenpinConfig::load_from_dir(project_path).context("Failed to load configuration")?;
    apply_output_config(&config.output);

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        "toml" => {
            let toml_str = toml::to_string_pretty(&config)?;
            println!("{toml_str}");
        }
        "text" => {
            println!("{}", Tone::Header.paint("Tenpin Configuration"));
            println!("====================\n");

            println!("Game:");
            println!("  Throws per game: {}", config.game.throws_per_game);
            println!();

            println!("Scoring:");
            println!("  Pin policy: {:?}", config.scoring.pin_policy);
            println!();

            println!("Output:");
            println!("  Format: {:?}", config.output.format);
            println!("  Color: {}", config.output.color);

            if !Paths::is_initialized(project_path) {
                println!();
                print_hint("No tenpin.toml found, showing defaults. Run 'tenpin init' to create one.");
            }
        }
        other => anyhow::bail!("Unknown format '{other}'. Expected text, json or toml."),
    }

    Ok(())
}
