//! Console configuration
//!
//! `config.json` next to the session file. Every field has a default, so a
//! fresh install starts against the staging API with the dark theme without
//! any file present.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use dialer_console_api::DEFAULT_API_BASE;
use dialer_console_core::error::{CoreError, CoreResult};
use dialer_console_core::types::DEFAULT_PAGE_SIZE;

use crate::model::state::Theme;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the dialer API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Color theme
    #[serde(default)]
    pub theme: Theme,
    /// Rows per listing page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            theme: Theme::default(),
            page_size: default_page_size(),
        }
    }
}

/// Loads and saves [`AppConfig`]. Reads happen once, before the runtime is
/// up, so this stays synchronous.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            path: super::config_dir().join(CONFIG_FILE),
        }
    }

    #[cfg(test)]
    fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the config, falling back to defaults when the file is absent
    /// or malformed. A broken file must never keep the console from
    /// starting.
    pub fn load(&self) -> AppConfig {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return AppConfig::default(),
        };
        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring malformed config file: {err}");
                AppConfig::default()
            }
        }
    }

    pub fn save(&self, config: &AppConfig) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CoreError::StorageError(e.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(config)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|e| CoreError::StorageError(e.to_string()))
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
