//! Editor session coordinator.

use std::sync::mpsc;

use ratatui::layout::Rect;

use solpad_config::{Config, EditorSettings};
use solpad_diff::{DiffStats, DiffView, ViewModeController};
use solpad_files::FileRegistry;
use solpad_layout::LayoutState;
use solpad_state::{EditorError, File, FileId, TerminalState, ThemeMode, ViewMode};
use solpad_theme::ThemeController;

use crate::event::{EventBus, SessionEvent};
use crate::snapshot::{
    DiffOptions, EditorOptions, RenderRequest, SessionState, Snapshot, StatusBar, Tab,
};

/// Name of the starter file opened by [`EditorSession::with_default_file`].
pub const DEFAULT_FILE_NAME: &str = "Contract.sol";

/// Content of the starter file.
pub const DEFAULT_FILE_CODE: &str = "// SPDX-License-Identifier: MIT
pragma solidity ^0.8.24;

contract Based {
    string public greeting = \"gm\";

    function setGreeting(string calldata newGreeting) external {
        greeting = newGreeting;
    }
}
";

/// Window size used until the first resize.
const DEFAULT_WINDOW: Rect = Rect {
    x: 0,
    y: 0,
    width: 1280,
    height: 800,
};

/// Single source of truth for the editor shell.
///
/// Owns open files, view mode, layout and theme. The rendering layer
/// reads [`Snapshot`]s and requests changes through the methods here;
/// every method either succeeds or is a documented no-op.
#[derive(Debug)]
pub struct EditorSession {
    files: FileRegistry,
    view: ViewModeController,
    layout: LayoutState,
    theme: ThemeController,
    editor: EditorSettings,
    window: Rect,
    revision: u64,
    events: EventBus,
}

impl EditorSession {
    /// Create session with no open file.
    pub fn new(config: &Config) -> Self {
        let theme = config.general.theme.parse::<ThemeMode>().unwrap_or_else(|e| {
            log::warn!("{}, using light theme", e);
            ThemeMode::Light
        });

        Self {
            files: FileRegistry::new(),
            view: ViewModeController::new(),
            layout: LayoutState::new(config.layout.clone()),
            theme: ThemeController::new(theme),
            editor: config.editor.clone(),
            window: DEFAULT_WINDOW,
            revision: 0,
            events: EventBus::default(),
        }
    }

    /// Create session with the starter contract open.
    pub fn with_default_file(config: &Config) -> Self {
        let mut session = Self::new(config);
        session.open_file(DEFAULT_FILE_NAME, DEFAULT_FILE_CODE);
        session
    }

    /// Receive one event per completed mutation.
    pub fn subscribe(&mut self) -> mpsc::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    fn commit(&mut self, event: SessionEvent) {
        self.revision += 1;
        self.events.publish(event);
    }

    /// Bring the view mode in line with the current active file.
    ///
    /// In diff mode a newly shown file gets its baseline resolved; with no
    /// file left the session falls back to edit mode. Does not commit.
    fn sync_active(&mut self) {
        match self.files.active_file() {
            Some(file) => {
                if self.view.mode() == ViewMode::Diff {
                    self.view.resolve_baseline(file);
                }
            }
            None => self.view.exit_diff_mode(),
        }
        log::debug!("Active file: {:?}", self.files.active_id());
    }

    // === Files ===

    /// Open a file as a new tab and make it active.
    pub fn open_file(
        &mut self,
        file_name: impl Into<String>,
        initial_code: impl Into<String>,
    ) -> FileId {
        let id = self.files.open_file(file_name, initial_code);
        self.sync_active();
        self.commit(SessionEvent::FileOpened(id));
        id
    }

    /// Close a tab. Returns false when the id was not open.
    pub fn close_file(&mut self, id: FileId) -> bool {
        if self.files.close_file(id).is_none() {
            return false;
        }

        self.view.forget(id);
        self.sync_active();
        let active = self.files.active_id();
        self.commit(SessionEvent::FileClosed { id, active });
        true
    }

    /// Switch to another open tab.
    pub fn set_active(&mut self, id: FileId) -> Result<(), EditorError> {
        let previous = self.files.active_id();
        self.files.set_active(id)?;
        if previous != Some(id) {
            self.sync_active();
            self.commit(SessionEvent::ActiveChanged(id));
        }
        Ok(())
    }

    /// Replace a file's content with the full new text from the widget.
    ///
    /// The diff baseline is left untouched.
    pub fn update_code(
        &mut self,
        id: FileId,
        new_code: impl Into<String>,
    ) -> Result<(), EditorError> {
        self.files.update_code(id, new_code)?;
        self.commit(SessionEvent::CodeChanged(id));
        Ok(())
    }

    pub fn active_file(&self) -> Option<&File> {
        self.files.active_file()
    }

    pub fn files(&self) -> &[File] {
        self.files.files()
    }

    pub fn file(&self, id: FileId) -> Option<&File> {
        self.files.get(id)
    }

    // === View mode ===

    /// Enter diff mode. No-op without an active file.
    pub fn enter_diff_mode(&mut self) {
        if self.files.is_empty() || self.view.mode() == ViewMode::Diff {
            return;
        }
        self.view.enter_diff_mode(self.files.active_file());
        self.commit(SessionEvent::ViewModeChanged(ViewMode::Diff));
    }

    /// Return to edit mode, keeping baselines for a later re-entry.
    pub fn exit_diff_mode(&mut self) {
        if self.view.mode() == ViewMode::Edit {
            return;
        }
        self.view.exit_diff_mode();
        self.commit(SessionEvent::ViewModeChanged(ViewMode::Edit));
    }

    pub fn toggle_diff_mode(&mut self) -> ViewMode {
        match self.view.mode() {
            ViewMode::Edit => self.enter_diff_mode(),
            ViewMode::Diff => self.exit_diff_mode(),
        }
        self.view_mode()
    }

    /// Record the diff baseline of the active file.
    ///
    /// Returns false (and changes nothing) when no file is open.
    pub fn set_baseline(&mut self, text: impl Into<String>) -> bool {
        let Some(id) = self.files.active_id() else {
            return false;
        };
        self.view.set_baseline(id, text);
        self.commit(SessionEvent::BaselineChanged(id));
        true
    }

    /// Mode as rendered.
    pub fn view_mode(&self) -> ViewMode {
        self.view.effective_mode(self.files.active_file())
    }

    /// Original and modified text in diff mode.
    pub fn diff_view(&self) -> Option<DiffView<'_>> {
        self.view.diff_view(self.files.active_file())
    }

    pub fn state(&self) -> SessionState {
        match (self.files.active_file(), self.view.mode()) {
            (None, _) => SessionState::NoFile,
            (Some(_), ViewMode::Edit) => SessionState::Edit,
            (Some(_), ViewMode::Diff) => SessionState::Diff,
        }
    }

    // === Layout ===

    pub fn set_explorer_width(&mut self, px: i32) -> u16 {
        let width = self.layout.set_explorer_width(px);
        self.commit(SessionEvent::LayoutChanged);
        width
    }

    pub fn set_explorer_visible(&mut self, visible: bool) {
        self.layout.set_explorer_visible(visible);
        self.commit(SessionEvent::LayoutChanged);
    }

    pub fn toggle_explorer(&mut self) -> bool {
        let visible = self.layout.toggle_explorer();
        self.commit(SessionEvent::LayoutChanged);
        visible
    }

    pub fn set_terminal_visible(&mut self, visible: bool) {
        self.layout.set_terminal_visible(visible);
        self.commit(SessionEvent::LayoutChanged);
    }

    pub fn set_terminal_height(&mut self, px: i32) -> u16 {
        let height = self.layout.set_terminal_height(px);
        self.commit(SessionEvent::LayoutChanged);
        height
    }

    pub fn toggle_terminal(&mut self) -> bool {
        let visible = self.layout.toggle_terminal();
        self.commit(SessionEvent::LayoutChanged);
        visible
    }

    /// Browser window resized.
    pub fn resize_window(&mut self, window: Rect) {
        self.window = window;
        self.commit(SessionEvent::LayoutChanged);
    }

    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    pub fn terminal(&self) -> TerminalState {
        self.layout.terminal()
    }

    /// Editing pane rectangle for the current window.
    pub fn editing_rect(&self) -> Rect {
        self.layout.editing_rect(self.window)
    }

    // === Theme ===

    pub fn set_theme(&mut self, mode: ThemeMode) {
        if self.theme.set_theme(mode) {
            self.commit(SessionEvent::ThemeChanged(mode));
        }
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        let mode = self.theme.toggle_theme();
        self.commit(SessionEvent::ThemeChanged(mode));
        mode
    }

    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    // === Derived views ===

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn tabs(&self) -> Vec<Tab> {
        let active = self.files.active_id();
        self.files
            .files()
            .iter()
            .map(|f| Tab {
                id: f.id,
                title: f.file_name.clone(),
                active: Some(f.id) == active,
            })
            .collect()
    }

    pub fn status_bar(&self) -> StatusBar {
        StatusBar {
            compiler: format!("Solidity {}", self.editor.compiler_version),
            network: self.editor.network.clone(),
            lines: self.files.active_file().map(File::line_count).unwrap_or(0),
            encoding: "UTF-8",
        }
    }

    /// Parameters for the external editor widget.
    pub fn render_request(&self) -> RenderRequest {
        let Some(file) = self.files.active_file() else {
            return RenderRequest::Empty;
        };
        let theme = self.theme.name();

        match self.diff_view() {
            Some(diff) => RenderRequest::Diff {
                original: diff.original.to_string(),
                modified: diff.modified.to_string(),
                language: file.language,
                theme,
                options: DiffOptions {
                    side_by_side: true,
                    original_editable: false,
                    font_size: self.editor.font_size,
                    minimap: false,
                },
            },
            None => RenderRequest::Edit {
                code: file.code.clone(),
                language: file.language,
                theme,
                read_only: false,
                options: EditorOptions {
                    font_size: self.editor.font_size,
                    minimap: self.editor.minimap,
                    line_numbers: true,
                    word_wrap: self.editor.word_wrap,
                },
            },
        }
    }

    /// Pull the complete derived state.
    pub fn snapshot(&self) -> Snapshot {
        let diff = self.diff_view();

        Snapshot {
            revision: self.revision,
            state: self.state(),
            active_file: self.files.active_file().cloned(),
            tabs: self.tabs(),
            view_mode: self.view_mode(),
            diff_original: diff.map(|d| d.original.to_string()),
            diff_stats: diff.map(|d| DiffStats::compute(d.original, d.modified)),
            theme: self.theme.mode(),
            theme_name: self.theme.name(),
            palette: self.theme.palette(),
            window: self.window,
            editing_rect: self.editing_rect(),
            explorer_visible: self.layout.explorer_visible(),
            terminal: self.layout.terminal(),
            terminal_rect: self.layout.terminal_rect(self.window),
            status_bar: self.status_bar(),
            render: self.render_request(),
        }
    }
}
