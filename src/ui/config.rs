//! # Configuration Persistence
//!
//! Manages user configuration stored in `~/.config/ps1-studio/config.json`.
//!
//! ## Overview
//!
//! The [`Config`] struct is serialized to / deserialized from a JSON file in
//! the user's XDG config directory. It holds the selected theme and the
//! preview animation timings. Every field has a default, so a partial file
//! is fine.
//!
//! ## File Location
//!
//! ```text
//! ~/.config/ps1-studio/config.json
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory.

use crate::ui::preview::AnimationTiming;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Persisted user configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The name of the selected theme (must match a built-in theme name).
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Milliseconds between typed characters in the preview.
    #[serde(default = "default_type_delay_ms")]
    pub type_delay_ms: u64,

    /// Milliseconds between deleted characters in the preview.
    #[serde(default = "default_delete_delay_ms")]
    pub delete_delay_ms: u64,

    /// How long the copy button says "Copied!".
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,
}

fn default_theme_name() -> String {
    "Catppuccin Mocha".to_string()
}

fn default_type_delay_ms() -> u64 {
    15
}

fn default_delete_delay_ms() -> u64 {
    5
}

fn default_copy_feedback_ms() -> u64 {
    2000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            type_delay_ms: default_type_delay_ms(),
            delete_delay_ms: default_delete_delay_ms(),
            copy_feedback_ms: default_copy_feedback_ms(),
        }
    }
}

impl Config {
    /// Load configuration from disk. Returns `Config::default()` if the file
    /// does not exist or cannot be parsed.
    pub fn load() -> Self {
        match Self::config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default config: {e:#}");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the current configuration to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save the current configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Return the path to the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "ps1-studio")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }

    pub fn timing(&self) -> AnimationTiming {
        AnimationTiming {
            delete_delay: Duration::from_millis(self.delete_delay_ms),
            type_delay: Duration::from_millis(self.type_delay_ms),
        }
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}
