//! Simulation configuration.
//!
//! YAML-backed settings for driving matches (seed, match count, event log).
//! Loads with defaults applied for missing fields.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Settings for a batch of simulated matches.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchConfig {
    /// Base RNG seed; match i uses seed + i.
    #[serde(default)]
    pub seed: u64,
    /// Number of matches to play.
    #[serde(default = "default_games")]
    pub games: u32,
    /// Optional NDJSON event log path.
    #[serde(default)]
    pub log_path: Option<PathBuf>,
    /// Flush the event log every N lines; 0 disables periodic flushing.
    #[serde(default = "default_log_flush_every")]
    pub log_flush_every: u64,
}

fn default_games() -> u32 {
    1
}

fn default_log_flush_every() -> u64 {
    64
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            games: default_games(),
            log_path: None,
            log_flush_every: default_log_flush_every(),
        }
    }
}

impl MatchConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: MatchConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
