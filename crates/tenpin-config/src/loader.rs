//! Configuration loader with multi-source merging

use crate::{ConfigError, TenpinConfig};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    include_user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "TENPIN".to_string(),
            include_user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "TENPIN")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip ~/.config/tenpin/config.toml
    pub fn without_user_config(mut self) -> Self {
        self.include_user_config = false;
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<TenpinConfig> {
        let mut builder = config::Config::builder();

        // 1. Start with built-in defaults
        let defaults = TenpinConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. User config (~/.config/tenpin/config.toml)
        if self.include_user_config {
            if let Some(user_config_file) = Paths::user_config_file() {
                if user_config_file.exists() {
                    builder = builder.add_source(
                        config::File::from(user_config_file)
                            .required(false)
                            .format(config::FileFormat::Toml),
                    );
                }
            }
        }

        // 3. Project config (tenpin.toml)
        let project_config_file = Paths::project_config_file(&self.project_dir);
        if project_config_file.exists() {
            builder = builder.add_source(
                config::File::from(project_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 4. Local config (tenpin.local.toml, gitignored)
        let local_config_file = Paths::local_config_file(&self.project_dir);
        if local_config_file.exists() {
            builder = builder.add_source(
                config::File::from(local_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 5. Environment variables (TENPIN_SCORING__PIN_POLICY=strict)
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // Build and deserialize
        let config = builder.build().context("Failed to build configuration")?;

        let tenpin_config: TenpinConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        tenpin_config
            .validate()
            .context("Configuration failed validation")?;

        Ok(tenpin_config)
    }

    /// Load configuration or return defaults if not found
    pub fn load_or_default(self) -> TenpinConfig {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// File locations for each configuration layer.
pub struct Paths;

impl Paths {
    const PROJECT_FILE: &'static str = "tenpin.toml";
    const LOCAL_FILE: &'static str = "tenpin.local.toml";

    /// `config.toml` under the platform config dir, if the platform has one.
    pub fn user_config_file() -> Option<PathBuf> {
        ProjectDirs::from("com", "Tenpin", "tenpin")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn project_config_file(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join(Self::PROJECT_FILE)
    }

    /// Untracked overrides that sit next to tenpin.toml.
    pub fn local_config_file(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join(Self::LOCAL_FILE)
    }

    pub fn is_initialized(project_dir: impl AsRef<Path>) -> bool {
        Self::project_config_file(project_dir).exists()
    }
}

/// Write `config` as the project's tenpin.toml.
///
/// Refuses to overwrite an existing file.
pub fn write_project_config(
    project_dir: impl AsRef<Path>,
    config: &TenpinConfig,
) -> Result<PathBuf, ConfigError> {
    let path = Paths::project_config_file(project_dir);
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path));
    }

    let contents = toml::to_string_pretty(config)?;
    fs::write(&path, contents).map_err(|source| ConfigError::WriteError {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
