//! Process Settings
//!
//! Key-value settings read from a JSON file once at startup. Every key has a
//! default, so a missing file is not an error. The loaded value is immutable
//! and handed to each component explicitly.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::password::Argon2Params;

/// Default settings file, relative to the working directory
pub const DEFAULT_SETTINGS_PATH: &str = "config.json";

/// Environment variable naming an alternative settings file
pub const SETTINGS_PATH_ENV: &str = "CODEECHO_CONFIG";

/// Settings loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File exists but could not be read
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid settings JSON
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Process-wide settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub mongo_host: String,
    pub mongo_port: u16,
    pub mongo_db_name: String,
    pub app_host: String,
    pub app_port: u16,
    /// Upper bound for a single store or hashing call
    pub operation_timeout_secs: u64,
    pub argon2_memory_kib: u32,
    pub argon2_iterations: u32,
    pub argon2_parallelism: u32,
}

impl Default for Settings {
    fn default() -> Self {
        let argon2 = Argon2Params::default();
        Self {
            mongo_host: "0.0.0.0".to_string(),
            mongo_port: 27017,
            mongo_db_name: "codeecho".to_string(),
            app_host: "0.0.0.0".to_string(),
            app_port: 8000,
            operation_timeout_secs: 10,
            argon2_memory_kib: argon2.memory_kib,
            argon2_iterations: argon2.iterations,
            argon2_parallelism: argon2.parallelism,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults if it does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %shown, "Settings file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: shown,
                    source,
                });
            }
        };

        Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: shown,
            source,
        })
    }

    /// Load from the path in [`SETTINGS_PATH_ENV`], or [`DEFAULT_SETTINGS_PATH`]
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let path = std::env::var(SETTINGS_PATH_ENV)
            .unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string());
        Self::load(path)
    }

    /// Parse settings from a JSON document
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Address the HTTP server binds to
    pub fn app_addr(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_secs)
    }

    pub fn argon2_params(&self) -> Argon2Params {
        Argon2Params {
            memory_kib: self.argon2_memory_kib,
            iterations: self.argon2_iterations,
            parallelism: self.argon2_parallelism,
        }
    }
}
