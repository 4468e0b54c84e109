//! Runtime configuration.
//!
//! Sources, later ones winning:
//!   1. built-in defaults
//!   2. optional JSON file
//!   3. `MANIFEST_*` environment variables

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use manifest_engine::catalogue::PantacleKind;

use crate::logging::{default_log_level, normalize_level};

pub const ENV_OUTPUT_DIR: &str = "MANIFEST_OUTPUT_DIR";
pub const ENV_LOG_LEVEL: &str = "MANIFEST_LOG_LEVEL";
pub const ENV_PANTACLE: &str = "MANIFEST_PANTACLE";
pub const ENV_SEAL: &str = "MANIFEST_SEAL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file `{path}`: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file `{path}`: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Directory that receives `report_<stem>.json` files.
    pub output_dir: PathBuf,
    pub log_level: String,
    /// Seal used when a request does not name one.
    pub default_pantacle: PantacleKind,
    /// Embed the request, sealed with the quantum code, in every report.
    pub seal_reports: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("manifestations"),
            log_level: default_log_level().to_string(),
            default_pantacle: PantacleKind::default(),
            seal_reports: true,
        }
    }
}

impl RuntimeConfig {
    /// Defaults, then `path` if given, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: RuntimeConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validated()
    }

    /// Apply overrides from a key lookup (the environment in production).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        if let Some(kind) = lookup(ENV_PANTACLE) {
            self.default_pantacle =
                kind.parse::<PantacleKind>()
                    .map_err(|e| ConfigError::InvalidValue {
                        key: ENV_PANTACLE.to_string(),
                        message: e.to_string(),
                    })?;
        }
        if let Some(flag) = lookup(ENV_SEAL) {
            self.seal_reports = parse_flag(&flag).ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_SEAL.to_string(),
                message: format!("expected true|false|1|0, got `{flag}`"),
            })?;
        }
        self.validated()
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "output_dir".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        self.log_level = normalize_level(&self.log_level)
            .map_err(|message| ConfigError::InvalidValue {
                key: "log_level".to_string(),
                message,
            })?
            .to_string();
        Ok(self)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
