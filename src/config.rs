//! Session configuration persistence
//!
//! Stores user preferences in `~/.config/markpane/config.yaml`

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::persistence::SAVE_DEBOUNCE_MS;
use crate::scroll_sync::SCROLL_SYNC_WINDOW_MS;
use crate::storage::DEFAULT_SLOT;

/// Errors from writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No config directory available")]
    NoConfigDir,

    #[error("Failed to write config to {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

/// Session configuration that persists across runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Idle time before the buffer is saved
    #[serde(default = "default_save_debounce_ms")]
    pub save_debounce_ms: u64,

    /// How long a pane that drove a scroll sync ignores echoes
    #[serde(default = "default_scroll_sync_window_ms")]
    pub scroll_sync_window_ms: u64,

    #[serde(default = "default_true")]
    pub scroll_sync_enabled: bool,

    /// Name of the storage slot holding the document
    #[serde(default = "default_storage_slot")]
    pub storage_slot: String,
}

fn default_save_debounce_ms() -> u64 {
    SAVE_DEBOUNCE_MS
}

fn default_scroll_sync_window_ms() -> u64 {
    SCROLL_SYNC_WINDOW_MS
}

fn default_true() -> bool {
    true
}

fn default_storage_slot() -> String {
    DEFAULT_SLOT.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            save_debounce_ms: default_save_debounce_ms(),
            scroll_sync_window_ms: default_scroll_sync_window_ms(),
            scroll_sync_enabled: true,
            storage_slot: default_storage_slot(),
        }
    }
}

impl SessionConfig {
    pub fn save_debounce(&self) -> Duration {
        Duration::from_millis(self.save_debounce_ms)
    }

    pub fn scroll_sync_window(&self) -> Duration {
        Duration::from_millis(self.scroll_sync_window_ms)
    }

    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        match crate::config_paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No config directory available, using defaults");
                Self::default()
            }
        }
    }

    /// Load config from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse YAML config text; missing fields take their defaults
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Save config to `~/.config/markpane/config.yaml`, returning the path
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content).map_err(io_err)?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
