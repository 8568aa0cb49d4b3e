use crate::client::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Optional user config, read from the platform config directory
/// (`~/.config/spielplan/config.toml` on Linux). Only the feed base URL is
/// configurable; everything else is fixed.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Config {
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("de", "spielplan", "spielplan")
            .map(|proj| proj.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path().context("No config directory available")?;
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config at {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_is_read() {
        let cfg: Config = toml::from_str("base_url = \"http://localhost:1234/\"").unwrap();
        assert_eq!(cfg.base_url, "http://localhost:1234/");
    }
}
