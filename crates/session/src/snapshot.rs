//! Read-only view of the session handed to the rendering layer.

use ratatui::layout::Rect;

use solpad_diff::DiffStats;
use solpad_state::{File, FileId, TerminalState, ThemeMode, ViewMode};
use solpad_theme::Theme;

/// Coarse session state: presence of a file crossed with view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoFile,
    Edit,
    Diff,
}

/// Entry of the tab strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: FileId,
    pub title: String,
    pub active: bool,
}

/// Options for the single editable pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    pub font_size: u16,
    pub minimap: bool,
    pub line_numbers: bool,
    pub word_wrap: bool,
}

/// Options for the side-by-side diff pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    pub side_by_side: bool,
    /// Always false: edits only apply to the modified side
    pub original_editable: bool,
    pub font_size: u16,
    pub minimap: bool,
}

/// What the editor widget must draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderRequest {
    /// No file open
    Empty,
    Edit {
        code: String,
        language: &'static str,
        theme: &'static str,
        read_only: bool,
        options: EditorOptions,
    },
    Diff {
        original: String,
        modified: String,
        language: &'static str,
        theme: &'static str,
        options: DiffOptions,
    },
}

/// Bottom status bar contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBar {
    /// e.g. `Solidity 0.8.24`
    pub compiler: String,
    pub network: String,
    /// Line count of the active file (0 without one)
    pub lines: usize,
    pub encoding: &'static str,
}

impl StatusBar {
    /// Line counter label, e.g. `12 lines`.
    pub fn lines_label(&self) -> String {
        format!("{} lines", self.lines)
    }
}

/// Consistent copy of everything the rendering layer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Incremented by every completed mutation
    pub revision: u64,
    pub state: SessionState,
    pub active_file: Option<File>,
    pub tabs: Vec<Tab>,
    /// Mode as rendered (edit when no file is open)
    pub view_mode: ViewMode,
    /// Left side of the diff, present in diff mode only
    pub diff_original: Option<String>,
    pub diff_stats: Option<DiffStats>,
    pub theme: ThemeMode,
    pub theme_name: &'static str,
    /// Colors of the active theme, for chrome and diff markers
    pub palette: &'static Theme,
    pub window: Rect,
    pub editing_rect: Rect,
    pub explorer_visible: bool,
    pub terminal: TerminalState,
    pub terminal_rect: Option<Rect>,
    pub status_bar: StatusBar,
    pub render: RenderRequest,
}
