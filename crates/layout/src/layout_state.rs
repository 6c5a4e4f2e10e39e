//! Explorer and terminal geometry with derived pane rectangles.

use ratatui::layout::Rect;

use solpad_config::LayoutSettings;
use solpad_state::TerminalState;

/// Clamp a drag-gesture value into `[min, max]`.
fn clamp_px(value: i32, min: u16, max: u16, what: &str) -> u16 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let clamped = value.clamp(i32::from(lo), i32::from(hi));
    if clamped != value {
        log::debug!("{} {} clamped to {}", what, value, clamped);
    }
    // In range of u16 because min/max are u16
    clamped as u16
}

/// Clamp a terminal height; the panel is never zero pixels tall.
fn clamp_terminal_height(px: i32, settings: &LayoutSettings) -> u16 {
    clamp_px(
        px,
        settings.min_terminal_height.max(1),
        settings.max_terminal_height.max(1),
        "Terminal height",
    )
}

/// Sidebar and terminal geometry.
///
/// All setters clamp instead of failing; rectangles are computed on
/// every call from the current fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutState {
    explorer_width: u16,
    explorer_visible: bool,
    terminal_visible: bool,
    terminal_height: u16,
    settings: LayoutSettings,
}

impl LayoutState {
    /// Create layout from settings, clamping the initial sizes.
    pub fn new(settings: LayoutSettings) -> Self {
        let explorer_width = clamp_px(
            i32::from(settings.explorer_width),
            settings.min_explorer_width,
            settings.max_explorer_width,
            "Explorer width",
        );
        let terminal_height = clamp_terminal_height(i32::from(settings.terminal_height), &settings);

        Self {
            explorer_width,
            explorer_visible: settings.explorer_visible,
            terminal_visible: false,
            terminal_height,
            settings,
        }
    }

    /// Set explorer width, clamped to the configured range.
    pub fn set_explorer_width(&mut self, px: i32) -> u16 {
        self.explorer_width = clamp_px(
            px,
            self.settings.min_explorer_width,
            self.settings.max_explorer_width,
            "Explorer width",
        );
        self.explorer_width
    }

    /// Show or hide the explorer side panel.
    pub fn set_explorer_visible(&mut self, visible: bool) {
        self.explorer_visible = visible;
    }

    /// Toggle explorer side panel.
    pub fn toggle_explorer(&mut self) -> bool {
        self.explorer_visible = !self.explorer_visible;
        self.explorer_visible
    }

    /// Show or hide the terminal panel.
    pub fn set_terminal_visible(&mut self, visible: bool) {
        self.terminal_visible = visible;
    }

    /// Set terminal height, clamped to the configured range.
    ///
    /// Allowed while the terminal is hidden; the height is used on the
    /// next show.
    pub fn set_terminal_height(&mut self, px: i32) -> u16 {
        self.terminal_height = clamp_terminal_height(px, &self.settings);
        self.terminal_height
    }

    /// Toggle terminal panel.
    pub fn toggle_terminal(&mut self) -> bool {
        self.terminal_visible = !self.terminal_visible;
        self.terminal_visible
    }

    pub fn explorer_width(&self) -> u16 {
        self.explorer_width
    }

    pub fn explorer_visible(&self) -> bool {
        self.explorer_visible
    }

    pub fn terminal(&self) -> TerminalState {
        TerminalState {
            visible: self.terminal_visible,
            height: self.terminal_height,
        }
    }

    /// Width taken by the activity bar and, when shown, the explorer.
    pub fn sidebar_width(&self) -> u16 {
        let explorer = if self.explorer_visible {
            self.explorer_width
        } else {
            0
        };
        self.settings.activity_bar_width.saturating_add(explorer)
    }

    /// Rectangle of the editing pane inside the window.
    pub fn editing_rect(&self, window: Rect) -> Rect {
        let s = &self.settings;
        let left = self.sidebar_width();
        let top = s.header_height.saturating_add(s.tab_bar_height);
        let terminal = if self.terminal_visible {
            self.terminal_height
        } else {
            0
        };

        Rect {
            x: window.x.saturating_add(left),
            y: window.y.saturating_add(top),
            width: window.width.saturating_sub(left),
            height: window
                .height
                .saturating_sub(top)
                .saturating_sub(s.status_bar_height)
                .saturating_sub(terminal),
        }
    }

    /// Rectangle of the terminal panel, directly below the editing pane.
    pub fn terminal_rect(&self, window: Rect) -> Option<Rect> {
        if !self.terminal_visible {
            return None;
        }

        let editing = self.editing_rect(window);
        let bottom_limit = window
            .y
            .saturating_add(window.height)
            .saturating_sub(self.settings.status_bar_height);
        let y = editing.y.saturating_add(editing.height);

        Some(Rect {
            x: editing.x,
            y,
            width: editing.width,
            height: self.terminal_height.min(bottom_limit.saturating_sub(y)),
        })
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new(LayoutSettings::default())
    }
}
