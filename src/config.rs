//! TOML configuration file support
//!
//! Settings load from an optional config file and are overridden by
//! command-line flags. The default location is
//! `<platform config dir>/inkwash/config.toml`; a missing file simply
//! yields defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::web::ServerConfig;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerSection,
}

/// `[server]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub port: Option<u16>,
    pub bind: Option<String>,
    pub upload_limit: Option<usize>,
}

impl Config {
    /// Load from the default platform location; a missing file is not an
    /// error and yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Default config file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("inkwash").join("config.toml"))
    }

    /// Build a [`ServerConfig`] from this file's `[server]` section.
    pub fn server_config(&self) -> ServerConfig {
        let mut config = ServerConfig::default();
        if let Some(port) = self.server.port {
            config = config.with_port(port);
        }
        if let Some(bind) = &self.server.bind {
            config = config.with_bind(bind.clone());
        }
        if let Some(limit) = self.server.upload_limit {
            config = config.with_upload_limit(limit);
        }
        config
    }
}
