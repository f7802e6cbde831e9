//! Global planitout configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

// The hosted demo project. Point the config file at your own backend to
// self-host.
static DEFAULT_API_URL: &str = "https://qjzvketmdmzuqbxpagtd.supabase.co";
static DEFAULT_API_KEY: &str = "sb_publishable_qjzvketmdmzuqbxpagtd_planitout";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_api_key() -> String {
    DEFAULT_API_KEY.to_string()
}

/// Global configuration at ~/.config/planitout/config.toml
///
/// Session state is not kept here; it lives in the data directory and is
/// managed through the session store.
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_api_key")]
    pub api_key: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            api_url: default_api_url(),
            api_key: default_api_key(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("planitout");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, falling back to the defaults when absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        toml::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }
}
