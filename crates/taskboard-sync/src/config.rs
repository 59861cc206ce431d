/*
[INPUT]:  YAML configuration file (optional)
[OUTPUT]: Parsed client configuration with defaults
[POS]:    Configuration layer - connection and identity setup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use taskboard_adapter::{ClientConfig, DEFAULT_BASE_URL, EntityId};
use thiserror::Error;

use crate::actor::Actor;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Top-level configuration for the taskboard client
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TaskboardConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Identity attributed to every mutation
    #[serde(default = "default_user_id")]
    pub user_id: EntityId,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Overall request timeout; unset means none
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Tracing filter directive (e.g. "info", "taskboard_sync=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Write logs here instead of stderr
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for TaskboardConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_id: default_user_id(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: None,
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_id() -> EntityId {
    EntityId::Number(1)
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TaskboardConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// An explicit path must exist. Without one, the per-user default
    /// location is used when present, else built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: self.request_timeout_secs.map(Duration::from_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }

    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id.clone())
    }
}

/// `<config dir>/taskboard/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("taskboard").join("config.yaml"))
}
