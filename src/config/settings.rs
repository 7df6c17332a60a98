use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::data::DEFAULT_DISPLAY_NAME;
use crate::images::DEFAULT_JPEG_QUALITY;
use crate::store::DEFAULT_SLOT_KEY;
use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Key the record collection is saved under
    pub slot_key: String,
    /// Name given to newly imported pictures
    pub default_name: String,
    /// JPEG quality (1-100) for imported pictures
    pub jpeg_quality: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slot_key: DEFAULT_SLOT_KEY.to_string(),
            default_name: DEFAULT_DISPLAY_NAME.to_string(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub slot_key: Option<String>,
    pub default_name: Option<String>,
    pub jpeg_quality: Option<i64>,
}

impl Config {
    /// Load configuration from the data directory, merging with defaults.
    ///
    /// A missing file is replaced by the bundled example. An unreadable or
    /// invalid file is logged and ignored.
    pub fn load() -> Self {
        let config_file = config_path();

        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        match Self::load_from(&config_file) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    path = %config_file.display(),
                    error = %e,
                    "Ignoring config file"
                );
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse TOML and merge it over the defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let toml_config: TomlConfig = toml::from_str(contents)?;
        let mut config = Self::default();

        if let Some(slot_key) = toml_config.slot_key.filter(|key| !key.is_empty()) {
            config.slot_key = slot_key;
        }
        if let Some(default_name) = toml_config.default_name {
            config.default_name = default_name;
        }
        if let Some(quality) = toml_config.jpeg_quality {
            config.jpeg_quality = quality.clamp(1, 100) as u8;
        }

        Ok(config)
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(error = %e, "Failed to create config directory");
                return;
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }
}
