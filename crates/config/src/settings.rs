//! Configuration structures for solpad settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General application settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Pane geometry settings
    #[serde(default)]
    pub layout: LayoutSettings,

    /// Editor widget settings
    #[serde(default)]
    pub editor: EditorSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// General application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Initial theme (light or dark)
    #[serde(default = "default_theme")]
    pub theme: String,
}

/// Pane geometry in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Fixed width of the activity bar on the far left
    #[serde(default = "default_activity_bar_width")]
    pub activity_bar_width: u16,

    /// Height of the top navigation bar
    #[serde(default = "default_header_height")]
    pub header_height: u16,

    /// Height of the tab strip above the editing pane
    #[serde(default = "default_tab_bar_height")]
    pub tab_bar_height: u16,

    /// Height of the status bar below the editing pane
    #[serde(default = "default_status_bar_height")]
    pub status_bar_height: u16,

    /// Initial explorer width
    #[serde(default = "default_explorer_width")]
    pub explorer_width: u16,

    #[serde(default = "default_min_explorer_width")]
    pub min_explorer_width: u16,

    #[serde(default = "default_max_explorer_width")]
    pub max_explorer_width: u16,

    /// Show explorer side panel on startup
    #[serde(default = "default_explorer_visible")]
    pub explorer_visible: bool,

    /// Initial terminal height
    #[serde(default = "default_terminal_height")]
    pub terminal_height: u16,

    #[serde(default = "default_min_terminal_height")]
    pub min_terminal_height: u16,

    #[serde(default = "default_max_terminal_height")]
    pub max_terminal_height: u16,
}

/// Editor widget settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Font size in pixels
    #[serde(default = "default_font_size")]
    pub font_size: u16,

    /// Show minimap in edit mode
    #[serde(default = "default_minimap")]
    pub minimap: bool,

    /// Enable word wrap
    #[serde(default = "default_word_wrap")]
    pub word_wrap: bool,

    /// Compiler version shown in the status bar
    #[serde(default = "default_compiler_version")]
    pub compiler_version: String,

    /// Target network shown in the status bar
    #[serde(default = "default_network")]
    pub network: String,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,

    /// Number of entries kept in memory
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

// Default value functions for serde
fn default_theme() -> String {
    defaults::THEME.to_string()
}

fn default_activity_bar_width() -> u16 {
    defaults::ACTIVITY_BAR_WIDTH
}

fn default_header_height() -> u16 {
    defaults::HEADER_HEIGHT
}

fn default_tab_bar_height() -> u16 {
    defaults::TAB_BAR_HEIGHT
}

fn default_status_bar_height() -> u16 {
    defaults::STATUS_BAR_HEIGHT
}

fn default_explorer_width() -> u16 {
    defaults::EXPLORER_WIDTH
}

fn default_min_explorer_width() -> u16 {
    defaults::MIN_EXPLORER_WIDTH
}

fn default_max_explorer_width() -> u16 {
    defaults::MAX_EXPLORER_WIDTH
}

fn default_explorer_visible() -> bool {
    defaults::EXPLORER_VISIBLE
}

fn default_terminal_height() -> u16 {
    defaults::TERMINAL_HEIGHT
}

fn default_min_terminal_height() -> u16 {
    defaults::MIN_TERMINAL_HEIGHT
}

fn default_max_terminal_height() -> u16 {
    defaults::MAX_TERMINAL_HEIGHT
}

fn default_font_size() -> u16 {
    defaults::FONT_SIZE
}

fn default_minimap() -> bool {
    defaults::MINIMAP
}

fn default_word_wrap() -> bool {
    defaults::WORD_WRAP
}

fn default_compiler_version() -> String {
    defaults::COMPILER_VERSION.to_string()
}

fn default_network() -> String {
    defaults::NETWORK.to_string()
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

fn default_max_entries() -> usize {
    defaults::MAX_LOG_ENTRIES
}

// Default implementations
impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            activity_bar_width: default_activity_bar_width(),
            header_height: default_header_height(),
            tab_bar_height: default_tab_bar_height(),
            status_bar_height: default_status_bar_height(),
            explorer_width: default_explorer_width(),
            min_explorer_width: default_min_explorer_width(),
            max_explorer_width: default_max_explorer_width(),
            explorer_visible: default_explorer_visible(),
            terminal_height: default_terminal_height(),
            min_terminal_height: default_min_terminal_height(),
            max_terminal_height: default_max_terminal_height(),
        }
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            minimap: default_minimap(),
            word_wrap: default_word_wrap(),
            compiler_version: default_compiler_version(),
            network: default_network(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
            max_entries: default_max_entries(),
        }
    }
}
