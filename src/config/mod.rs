//! Session configuration
//!
//! Persists the per-session presentation defaults, most importantly the
//! raw/prettified mode flag, as a TOML file in the platform config
//! directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{FrameLensError, FrameLensResult};

/// Persisted session defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Present properties raw instead of prettified by default
    pub raw_props: bool,
    /// Default logging level when RUST_LOG is unset
    pub log_level: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            raw_props: false,
            log_level: "info".to_string(),
        }
    }
}

impl SessionConfig {
    /// Default config file location.
    ///
    /// `%APPDATA%` on Windows, `$XDG_CONFIG_HOME` or `~/.config` elsewhere,
    /// with a working-directory fallback when neither resolves.
    pub fn default_path() -> PathBuf {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("FrameLens").join("config.toml");
        }
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("framelens").join("config.toml");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("framelens")
                .join("config.toml");
        }
        PathBuf::from("framelens_config.toml")
    }

    /// Load the config from a file, falling back to defaults when the file
    /// does not exist yet.
    pub fn load(path: &Path) -> FrameLensResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| FrameLensError::ConfigError {
                message: format!("failed to read {}: {}", path.display(), e),
            })?;
        toml::from_str(&content).map_err(|e| FrameLensError::ConfigError {
            message: format!("failed to parse {}: {}", path.display(), e),
        })
    }

    /// Persist the config, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> FrameLensResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FrameLensError::ConfigError {
                message: format!("failed to create {}: {}", parent.display(), e),
            })?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| FrameLensError::ConfigError {
            message: format!("failed to serialize config: {}", e),
        })?;
        std::fs::write(path, content).map_err(|e| FrameLensError::ConfigError {
            message: format!("failed to write {}: {}", path.display(), e),
        })?;
        info!("Saved session config to {}", path.display());
        Ok(())
    }
}
