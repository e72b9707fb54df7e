//! Configuration loading from TOML with built-in defaults.
//!
//! Reads `quasar.toml` when present and deserializes into strongly-typed
//! structs. Every field has a default, so the game runs with no config
//! file at all — the stock invocation starts the player with 1000 credits.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub game: GameConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GameConfig {
    /// Credits the player starts with.
    #[serde(default = "default_starting_credits")]
    pub starting_credits: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_credits: default_starting_credits(),
        }
    }
}

fn default_starting_credits() -> u64 {
    1000
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to defaults
    /// when the file does not exist.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let cfg = AppConfig::load_or_default("/nonexistent/quasar.toml").unwrap();
        assert_eq!(cfg.game.starting_credits, 1000);
    }

    #[test]
    fn test_parse_overrides() {
        let cfg: AppConfig = toml::from_str("[game]\nstarting_credits = 500\n").unwrap();
        assert_eq!(cfg.game.starting_credits, 500);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.game.starting_credits, 1000);
    }
}
