//! Configuration loading
//!
//! Reads `~/.config/tipbind/config.toml`. A missing file means defaults; an
//! unreadable or invalid file also means defaults, plus a warning for the
//! caller to show.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use types::{Config, RegistryConfig};

const CONFIG_DIR: &str = "tipbind";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(String),

    #[error("Invalid config file: {0}")]
    Parse(String),
}

/// Loaded config and an optional warning describing why defaults were used
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(error) => {
            log::warn!("Using default config: {}", error);
            ConfigResult {
                config: Config::default(),
                warning: Some(error.to_string()),
            }
        }
    }
}

/// Strict variant: any failure is an error
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
    parse_config(&contents)
}

pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
