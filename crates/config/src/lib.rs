//! Configuration management for solpad.
//!
//! This crate provides configuration loading, saving, and validation
//! with support for TOML format and XDG directory conventions.

mod settings;
mod xdg;

pub use settings::{Config, EditorSettings, GeneralSettings, LayoutSettings, LoggingSettings};
pub use xdg::{get_config_dir, get_data_dir};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const THEME: &str = "light";
    pub const ACTIVITY_BAR_WIDTH: u16 = 48;
    pub const HEADER_HEIGHT: u16 = 56;
    pub const TAB_BAR_HEIGHT: u16 = 40;
    pub const STATUS_BAR_HEIGHT: u16 = 24;
    pub const EXPLORER_WIDTH: u16 = 256;
    pub const MIN_EXPLORER_WIDTH: u16 = 160;
    pub const MAX_EXPLORER_WIDTH: u16 = 480;
    pub const EXPLORER_VISIBLE: bool = true;
    pub const TERMINAL_HEIGHT: u16 = 256;
    pub const MIN_TERMINAL_HEIGHT: u16 = 100;
    pub const MAX_TERMINAL_HEIGHT: u16 = 600;
    pub const FONT_SIZE: u16 = 14;
    pub const MINIMAP: bool = true;
    pub const WORD_WRAP: bool = false;
    pub const COMPILER_VERSION: &str = "0.8.24";
    pub const NETWORK: &str = "Base Sepolia";
    pub const MIN_LOG_LEVEL: &str = "info";
    pub const MAX_LOG_ENTRIES: usize = 1000;
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// On first run, creates config file with default values.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit path.
    ///
    /// Missing file is created with defaults. Missing keys are filled in
    /// and the normalized content is written back.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config: Self = toml::from_str(&original_content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate();

        // Serialize back to get normalized content
        let normalized_content = toml::to_string_pretty(&config)?;
        if original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Get default log file path.
    pub fn default_log_path() -> Result<PathBuf> {
        Ok(get_data_dir()?.join("solpad.log"))
    }

    /// Swap inverted min/max pairs so clamping ranges are well formed.
    pub fn validate(&mut self) {
        let layout = &mut self.layout;
        if layout.min_explorer_width > layout.max_explorer_width {
            std::mem::swap(&mut layout.min_explorer_width, &mut layout.max_explorer_width);
        }
        if layout.min_terminal_height > layout.max_terminal_height {
            std::mem::swap(
                &mut layout.min_terminal_height,
                &mut layout.max_terminal_height,
            );
        }
        // Terminal height must stay positive
        layout.min_terminal_height = layout.min_terminal_height.max(1);
        layout.max_terminal_height = layout.max_terminal_height.max(1);
    }
}
