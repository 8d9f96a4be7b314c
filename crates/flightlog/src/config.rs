//! Configuration management for flightlog.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults. The
//! defaults reproduce the tool's historical table geometry and file layout,
//! so a missing config file changes nothing.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "flightlog";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FLIGHTLOG_`)
/// 2. TOML config file at `~/.config/flightlog/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Table rendering configuration.
    pub display: DisplayConfig,
    /// Data file serialization configuration.
    pub storage: StorageConfig,
}

/// Column widths for the rendered table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Width of the destination column.
    pub point_width: usize,
    /// Width of the flight number column.
    pub number_width: usize,
    /// Width of the aircraft type column.
    pub kind_width: usize,
}

/// Serialization settings for the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Spaces of indentation in the saved JSON document.
    pub indent: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            point_width: 30,
            number_width: 10,
            kind_width: 20,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A nonexistent config file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails, or if the
    /// loaded values do not validate.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("FLIGHTLOG_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.display.point_width == 0
            || self.display.number_width == 0
            || self.display.kind_width == 0
        {
            return Err(Error::ConfigValidation {
                message: "display column widths must be greater than 0".to_string(),
            });
        }

        if self.storage.indent == 0 {
            return Err(Error::ConfigValidation {
                message: "storage.indent must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
