//! Client configuration.
//!
//! All types derive Serde traits for deserialization from TOML config
//! files; every field has a default so a partial (or missing) file works.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for [`HeroClient`](crate::HeroClient).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Collection endpoint base (e.g. "http://localhost:3000/api/heroes").
    /// Item requests append `/{id}`; filters go in the query string.
    pub base_url: String,

    /// Per-request timeout in seconds, applied to the whole request
    /// including body download.
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api/heroes".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for this schema.
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ClientConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
