//! Configuration module for tagcat
//!
//! Holds the root of the directory tree renamed files are filed into.
//! Values come from built-in defaults, then the user's config file
//! (`~/.config/tagcat/config.toml` on Linux), then `TAGCAT_*` environment
//! variables.

use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Default destination tree for renames
pub const DEFAULT_BASE_DIR: &str = "/home/music";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TagcatConfig {
    /// Root directory renamed files are filed under
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(DEFAULT_BASE_DIR)
}

impl Default for TagcatConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            quiet: false,
        }
    }
}

impl TagcatConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("tagcat").join("config.toml"))
    }

    /// Load configuration from the user's config file and environment.
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file and the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("base_dir", DEFAULT_BASE_DIR)?
            .set_default("quiet", false)?
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("TAGCAT"))
            .build()?;

        settings.try_deserialize()
    }

    /// Load the user's configuration, writing the defaults to the config
    /// file on first run. A failed write is logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn load_or_init() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        let config = Self::load()?;
        if !path.exists() {
            match Self::default().save() {
                Ok(()) => tracing::debug!(path = %path.display(), "wrote default configuration"),
                Err(e) => tracing::warn!("Could not write default configuration: {e}"),
            }
        }
        Ok(config)
    }

    /// Save configuration to the user's config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Override the base directory for this invocation
    #[must_use]
    pub fn with_base_dir(mut self, base_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = base_dir {
            self.base_dir = dir;
        }
        self
    }
}
