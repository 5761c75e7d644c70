// ABOUTME: Configuration management for saasforge
// Handles UI preferences and generator defaults stored as TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::ModelOption;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,

    /// Generator defaults
    #[serde(default)]
    pub generator: GeneratorDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Whether to show phase descriptions in the sidebar
    #[serde(default = "default_true")]
    pub show_phase_descriptions: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            show_phase_descriptions: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorDefaults {
    /// Model identifier preselected in the form
    #[serde(default = "default_model")]
    pub default_model: String,
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self {
            default_model: default_model(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            ui_preferences: UiPreferences::default(),
            generator: GeneratorDefaults::default(),
        }
    }
}

impl AppConfig {
    /// Directory holding config and logs: `~/.saasforge`
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .map(|home| home.join(".saasforge"))
            .unwrap_or_else(|| PathBuf::from(".saasforge"))
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load the config file; a missing file yields defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Write the config file, creating the directory if needed
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {}", dir.display()))?;
        }

        let raw = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, raw)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_true() -> bool {
    true
}

fn default_model() -> String {
    ModelOption::default_model().id().to_string()
}
