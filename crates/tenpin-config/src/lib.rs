//! Configuration management for Tenpin
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence, applied by the caller)
//! 2. Environment variables (TENPIN_* prefix, `__` between sections)
//! 3. tenpin.local.toml (gitignored, local overrides)
//! 4. tenpin.toml (git-tracked, project config)
//! 5. ~/.config/tenpin/config.toml (user defaults)
//! 6. Built-in defaults (lowest precedence)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod error;
mod loader;

pub use error::ConfigError;
pub use loader::{ConfigLoader, Paths, write_project_config};
pub use tenpin_kernel::PinPolicy;

/// Upper bound on `game.throws_per_game`. Padding allocates one throw per slot.
pub const MAX_THROWS_PER_GAME: u32 = 1_000;

/// Main Tenpin configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenpinConfig {
    pub game: GameConfig,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Conventional game length, used when padding a short throw list.
    /// The scorer itself never stops a game.
    pub throws_per_game: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            throws_per_game: 20,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub pin_policy: PinPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl TenpinConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Create a configuration that rejects impossible pin counts
    pub fn strict() -> Self {
        Self {
            scoring: ScoringConfig {
                pin_policy: PinPolicy::Strict,
            },
            ..Default::default()
        }
    }

    /// Check values the type system cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.game.throws_per_game {
            0 => Err(ConfigError::ValidationError(
                "game.throws_per_game must be at least 1".to_string(),
            )),
            n if n > MAX_THROWS_PER_GAME => Err(ConfigError::ValidationError(format!(
                "game.throws_per_game is {n}, must be at most {MAX_THROWS_PER_GAME}"
            ))),
            _ => Ok(()),
        }
    }
}
