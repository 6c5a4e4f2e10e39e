//! Theme loading from TOML.

use anyhow::Result;
use ratatui::style::Color;
use serde::Deserialize;

use crate::{SyntaxColors, Theme};

/// Color representation in TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TomlColor {
    Named(String),
    Rgb { rgb: [u8; 3] },
}

impl TomlColor {
    fn to_color(&self) -> Color {
        match self {
            TomlColor::Named(name) => match name.as_str() {
                "Black" => Color::Black,
                "Red" => Color::Red,
                "Green" => Color::Green,
                "Yellow" => Color::Yellow,
                "Blue" => Color::Blue,
                "Magenta" => Color::Magenta,
                "Cyan" => Color::Cyan,
                "Gray" => Color::Gray,
                "DarkGray" => Color::DarkGray,
                "White" => Color::White,
                _ => Color::White,
            },
            TomlColor::Rgb { rgb } => Color::Rgb(rgb[0], rgb[1], rgb[2]),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct TomlColors {
    bg: TomlColor,
    fg: TomlColor,
    accented_bg: TomlColor,
    accented_fg: TomlColor,
    selected_bg: TomlColor,
    selected_fg: TomlColor,
    disabled: TomlColor,
    success: TomlColor,
    warning: TomlColor,
    error: TomlColor,
}

#[derive(Debug, Clone, Deserialize)]
struct TomlSyntax {
    keyword: TomlColor,
    type_name: TomlColor,
    function: TomlColor,
    string: TomlColor,
    number: TomlColor,
    comment: TomlColor,
}

#[derive(Debug, Clone, Deserialize)]
struct TomlTheme {
    colors: TomlColors,
    syntax: TomlSyntax,
}

/// Load theme from TOML string with a static name.
pub(crate) fn load_theme_from_str(content: &str, name: &'static str) -> Result<Theme> {
    let toml_theme: TomlTheme = toml::from_str(content)?;
    let colors = toml_theme.colors;
    let syntax = toml_theme.syntax;

    Ok(Theme {
        name,
        bg: colors.bg.to_color(),
        fg: colors.fg.to_color(),
        accented_bg: colors.accented_bg.to_color(),
        accented_fg: colors.accented_fg.to_color(),
        selected_bg: colors.selected_bg.to_color(),
        selected_fg: colors.selected_fg.to_color(),
        disabled: colors.disabled.to_color(),
        success: colors.success.to_color(),
        warning: colors.warning.to_color(),
        error: colors.error.to_color(),
        syntax: SyntaxColors {
            keyword: syntax.keyword.to_color(),
            type_name: syntax.type_name.to_color(),
            function: syntax.function.to_color(),
            string: syntax.string.to_color(),
            number: syntax.number.to_color(),
            comment: syntax.comment.to_color(),
        },
    })
}
