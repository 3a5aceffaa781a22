//! Configuration loading and management
//!
//! Handles parsing of `.kanby.toml` configuration files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::remote::DEFAULT_API_URL;
use crate::theme::Theme;

/// Name of the configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = ".kanby.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Endpoint supplying the initial task set
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Override for the data directory holding persisted state
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Theme to fall back to when none has been persisted yet
    #[serde(default)]
    pub default_theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            data_dir: None,
            default_theme: Theme::default(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Config {
    /// Load configuration from a specific file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        if config.api_url.trim().is_empty() {
            return Err(Error::InvalidConfig("api_url must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Load configuration from a directory, falling back to defaults when
    /// the file is missing or unreadable
    pub fn load_from_dir(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, path = %path.display(), "ignoring unreadable config");
                Self::default()
            }
        }
    }
}
