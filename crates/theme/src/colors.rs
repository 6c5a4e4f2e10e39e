//! Theme color definitions.

use ratatui::style::Color;

/// Editor chrome palette with semantic color assignments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Theme name as passed to the editor widget
    pub name: &'static str,

    // === Base ===
    /// Pane backgrounds
    pub bg: Color,
    /// Main text
    pub fg: Color,

    // === Accented ===
    /// Navbar, status bar, tab strip background
    pub accented_bg: Color,
    /// Active tab marker, toggled toolbar buttons
    pub accented_fg: Color,

    // === Selection ===
    pub selected_bg: Color,
    pub selected_fg: Color,

    /// Inactive elements, secondary text, separators
    pub disabled: Color,

    // === Semantic ===
    /// Diff additions
    pub success: Color,
    /// Diff modifications
    pub warning: Color,
    /// Diff deletions
    pub error: Color,

    /// Token colors for syntax highlighting
    pub syntax: SyntaxColors,
}

/// Highlight palette shared by all languages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntaxColors {
    pub keyword: Color,
    pub type_name: Color,
    pub function: Color,
    pub string: Color,
    pub number: Color,
    pub comment: Color,
}
