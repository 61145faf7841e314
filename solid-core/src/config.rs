//! Scenario configuration stored as TOML

use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config declares no scenarios")]
    Empty,

    #[error("Invalid verbosity {0:?} (expected off, error, warn, info, debug or trace)")]
    InvalidVerbosity(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration structure for solid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default log level when neither -v nor RUST_LOG is given
    #[serde(default = "default_verbosity")]
    pub verbosity: String,

    #[serde(default, rename = "scenario")]
    pub scenarios: Vec<Scenario>,
}

fn default_verbosity() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self { verbosity: default_verbosity(), scenarios: Scenario::builtin() }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.scenarios.is_empty() {
            return Err(ConfigError::Empty);
        }
        if LevelFilter::from_str(&config.verbosity).is_err() {
            return Err(ConfigError::InvalidVerbosity(config.verbosity));
        }
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml(&content)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        fs::write(path, content).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })
    }
}
