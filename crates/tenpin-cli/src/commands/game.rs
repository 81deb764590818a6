//! Throw-list preparation shared by `score` and `trace`.

use anyhow::{Context, Result};
use tenpin_config::{ConfigLoader, OutputFormat, PinPolicy, TenpinConfig};
use tenpin_kernel::Throw;

use crate::GameArgs;

/// A game ready to be scored.
pub struct PreparedGame {
    pub config: TenpinConfig,
    pub throws: Vec<Throw>,
}

/// Loads config for the project, checks every pin count against the pin
/// policy in force, and pads the game if asked.
pub fn prepare(args: &GameArgs) -> Result<PreparedGame> {
    let config = ConfigLoader::new()
        .with_project_dir(&args.project)
        .load()
        .context("Failed to load configuration")?;

    crate::style::apply_output_config(&config.output);

    let policy = if args.strict {
        PinPolicy::Strict
    } else {
        config.scoring.pin_policy
    };

    let mut throws = Vec::with_capacity(args.pins.len());
    for (i, &pins) in args.pins.iter().enumerate() {
        let throw = policy
            .check(pins)
            .with_context(|| format!("throw {} rejected", i + 1))?;
        throws.push(throw);
    }

    if args.pad {
        let game_length = config.game.throws_per_game as usize;
        if throws.len() > game_length {
            tracing::warn!(
                throws = throws.len(),
                game_length,
                "more throws than a game holds, nothing to pad"
            );
        }
        throws.resize(game_length.max(throws.len()), Throw::GUTTER);
    }

    tracing::debug!(throws = throws.len(), ?policy, "game prepared");

    Ok(PreparedGame { config, throws })
}

/// Resolves `--format`, falling back to the configured default.
pub fn output_format(flag: Option<&str>, config: &TenpinConfig) -> Result<OutputFormat> {
    match flag {
        None => Ok(config.output.format),
        Some("text") => Ok(OutputFormat::Text),
        Some("json") => Ok(OutputFormat::Json),
        Some(other) => anyhow::bail!("Unknown output format '{other}'. Expected text or json."),
    }
}

/// Hex rendering of a state hash.
pub fn hash_hex(hash: [u8; 32]) -> String {
    blake3::Hash::from(hash).to_hex().to_string()
}
