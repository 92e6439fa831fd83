//! Configuration File Loader
//!
//! Loads a [`GameConfig`] from a JSON file. Missing fields fall back to their
//! defaults; the result is validated before it is returned.

use super::GameConfig;
use crate::{Result, SimonError};
use std::fs;
use std::path::Path;

/// Loads game configuration files from disk
pub struct ConfigLoader;

impl ConfigLoader {
    /// Read and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<GameConfig> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            SimonError::ConfigError(format!(
                "Failed to read config '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config = Self::parse(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded game configuration");
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn parse(text: &str) -> Result<GameConfig> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

/// Convenience function to load a configuration file
pub fn load_config(path: impl AsRef<Path>) -> Result<GameConfig> {
    ConfigLoader::load(path)
}
