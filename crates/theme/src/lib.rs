//! Theme system for solpad.
//!
//! Two built-in palettes (`based-light`, `based-dark`) and the
//! controller that tracks which one the session uses.

mod colors;
mod loader;

pub use colors::{SyntaxColors, Theme};
use loader::load_theme_from_str;

use ratatui::style::Color;
use std::sync::OnceLock;

use solpad_state::ThemeMode;

// Embed theme files at compile time
const THEME_LIGHT_TOML: &str = include_str!("../themes/based-light.toml");
const THEME_DARK_TOML: &str = include_str!("../themes/based-dark.toml");

static THEME_LIGHT: OnceLock<Theme> = OnceLock::new();
static THEME_DARK: OnceLock<Theme> = OnceLock::new();

/// Hardcoded fallback theme in case of parse errors.
fn get_hardcoded_fallback_theme(name: &'static str) -> Theme {
    Theme {
        name,
        bg: Color::Black,
        fg: Color::White,
        accented_bg: Color::DarkGray,
        accented_fg: Color::Cyan,
        selected_bg: Color::Blue,
        selected_fg: Color::White,
        disabled: Color::Gray,
        success: Color::Green,
        warning: Color::Yellow,
        error: Color::Red,
        syntax: SyntaxColors {
            keyword: Color::Blue,
            type_name: Color::Cyan,
            function: Color::Yellow,
            string: Color::Red,
            number: Color::Green,
            comment: Color::Gray,
        },
    }
}

/// Load theme from embedded TOML content.
fn load_builtin(content: &str, name: &'static str) -> Theme {
    match load_theme_from_str(content, name) {
        Ok(theme) => theme,
        Err(e) => {
            log::error!(
                "Failed to parse built-in theme '{}': {}. Using fallback theme.",
                name,
                e
            );
            get_hardcoded_fallback_theme(name)
        }
    }
}

impl Theme {
    /// Get built-in palette for a mode.
    pub fn for_mode(mode: ThemeMode) -> &'static Theme {
        match mode {
            ThemeMode::Light => {
                THEME_LIGHT.get_or_init(|| load_builtin(THEME_LIGHT_TOML, theme_name(mode)))
            }
            ThemeMode::Dark => {
                THEME_DARK.get_or_init(|| load_builtin(THEME_DARK_TOML, theme_name(mode)))
            }
        }
    }
}

/// Theme name passed to the editor widget.
pub fn theme_name(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "based-light",
        ThemeMode::Dark => "based-dark",
    }
}

/// Tracks the process-wide light/dark choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeController {
    mode: ThemeMode,
}

impl ThemeController {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Set theme. Returns true when the mode changed.
    pub fn set_theme(&mut self, mode: ThemeMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        if changed {
            log::info!("Theme switched to {}", theme_name(mode));
        }
        changed
    }

    /// Switch between light and dark.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.set_theme(self.mode.toggled());
        self.mode
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Active theme name, e.g. `based-dark`.
    pub fn name(&self) -> &'static str {
        theme_name(self.mode)
    }

    /// Active palette.
    pub fn palette(&self) -> &'static Theme {
        Theme::for_mode(self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes_parse() {
        let light = load_theme_from_str(THEME_LIGHT_TOML, "based-light").unwrap();
        let dark = load_theme_from_str(THEME_DARK_TOML, "based-dark").unwrap();

        assert_eq!(light.bg, Color::Rgb(255, 255, 255));
        assert_eq!(dark.selected_fg, Color::White);
        assert_ne!(light.syntax.keyword, dark.syntax.keyword);
    }

    #[test]
    fn test_palette_follows_mode() {
        let mut controller = ThemeController::default();
        assert_eq!(controller.mode(), ThemeMode::Light);
        assert_eq!(controller.palette().name, "based-light");

        controller.set_theme(ThemeMode::Dark);
        assert_eq!(controller.name(), "based-dark");
        assert_eq!(controller.palette().name, "based-dark");
    }

    #[test]
    fn test_double_toggle_returns_to_start() {
        let mut controller = ThemeController::new(ThemeMode::Light);

        assert_eq!(controller.toggle_theme(), ThemeMode::Dark);
        assert_eq!(controller.toggle_theme(), ThemeMode::Light);
    }

    #[test]
    fn test_set_same_theme_is_unchanged() {
        let mut controller = ThemeController::new(ThemeMode::Dark);
        assert!(!controller.set_theme(ThemeMode::Dark));
        assert!(controller.set_theme(ThemeMode::Light));
    }

    #[test]
    fn test_dark_palette_contrasts_with_light() {
        let light = Theme::for_mode(ThemeMode::Light);
        let dark = Theme::for_mode(ThemeMode::Dark);

        assert_ne!(light.bg, dark.bg);
        assert_ne!(light.success, light.error);
        assert_eq!(dark.name, theme_name(ThemeMode::Dark));
    }
}
