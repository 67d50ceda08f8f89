//! # RIALTO Configuration
//!
//! Typed settings for the derivative pipeline, read from TOML and then
//! overridden by `RIALTO_*` environment variables.
//!
//! ```rust
//! use rialto_config::DerivativesConfig;
//!
//! let config = DerivativesConfig::from_toml_str(
//!     r#"
//!     [storage]
//!     path = ":memory:"
//!
//!     [pipeline]
//!     channel_capacity = 8
//!     "#,
//! )?;
//! assert_eq!(config.pipeline.channel_capacity, 8);
//! assert!(config.storage.wal_mode);
//! # Ok::<(), rialto_config::ConfigError>(())
//! ```

pub mod components;

pub use components::{PipelineConfig, StorageConfig};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const ENV_DB_PATH: &str = "RIALTO_DB_PATH";
pub const ENV_DB_WAL: &str = "RIALTO_DB_WAL";
pub const ENV_CHANNEL_CAPACITY: &str = "RIALTO_CHANNEL_CAPACITY";
pub const ENV_SKIP_ENRICHMENT: &str = "RIALTO_SKIP_ENRICHMENT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidEnv { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivativesConfig {
    pub storage: StorageConfig,
    pub pipeline: PipelineConfig,
}

impl DerivativesConfig {
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read `path`, then apply environment overrides.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading configuration");

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_toml_str(&content)?;
        config.apply_env_with(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus environment overrides, for running without a file
    pub fn from_env() -> ConfigResult<Self> {
        let mut config = Self::default();
        config.apply_env_with(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_DB_PATH) {
            debug!(key = ENV_DB_PATH, "Overriding storage path");
            self.storage.path = PathBuf::from(path);
        }
        if let Some(value) = lookup(ENV_DB_WAL) {
            self.storage.wal_mode = parse_bool(ENV_DB_WAL, &value)?;
        }
        if let Some(value) = lookup(ENV_CHANNEL_CAPACITY) {
            self.pipeline.channel_capacity =
                value.parse().map_err(|_| ConfigError::InvalidEnv {
                    key: ENV_CHANNEL_CAPACITY.to_string(),
                    value: value.clone(),
                })?;
        }
        if let Some(value) = lookup(ENV_SKIP_ENRICHMENT) {
            self.pipeline.skip_enrichment = parse_bool(ENV_SKIP_ENRICHMENT, &value)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.pipeline.channel_capacity == 0 {
            return Err(ConfigError::Invalid(
                "pipeline.channel_capacity must be at least 1".to_string(),
            ));
        }
        if self.storage.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("storage.path is empty".to_string()));
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
