//! Edit/diff mode and per-file diff baselines.

use std::collections::HashMap;

use solpad_state::{File, FileId, ViewMode};

/// Texts handed to the diff pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffView<'a> {
    /// Read-only left side
    pub original: &'a str,
    /// Editable right side (the file's current code)
    pub modified: &'a str,
}

/// Tracks the session view mode and the baselines recorded per file.
///
/// Baselines are frozen snapshots: editing a file never moves its
/// baseline. They live until the file is closed.
#[derive(Debug, Default)]
pub struct ViewModeController {
    mode: ViewMode,
    baselines: HashMap<FileId, String>,
}

impl ViewModeController {
    /// Create controller in edit mode with no baselines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode as requested by the user.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Mode as rendered: diff without a file renders as edit.
    pub fn effective_mode(&self, active: Option<&File>) -> ViewMode {
        match active {
            Some(_) => self.mode,
            None => ViewMode::Edit,
        }
    }

    /// Switch to diff mode, freezing the active file's code as baseline
    /// unless one is already recorded.
    pub fn enter_diff_mode(&mut self, active: Option<&File>) {
        self.mode = ViewMode::Diff;
        if let Some(file) = active {
            self.resolve_baseline(file);
        }
        log::debug!("View mode: diff");
    }

    /// Switch to edit mode. Recorded baselines are kept.
    pub fn exit_diff_mode(&mut self) {
        self.mode = ViewMode::Edit;
        log::debug!("View mode: edit");
    }

    /// Flip between edit and diff mode.
    pub fn toggle_diff_mode(&mut self, active: Option<&File>) -> ViewMode {
        match self.mode {
            ViewMode::Edit => self.enter_diff_mode(active),
            ViewMode::Diff => self.exit_diff_mode(),
        }
        self.mode
    }

    /// Record (or replace) the baseline of a file.
    pub fn set_baseline(&mut self, id: FileId, text: impl Into<String>) {
        self.baselines.insert(id, text.into());
    }

    /// Freeze the file's current code as baseline if none is recorded.
    ///
    /// Called whenever a new file becomes active while in diff mode.
    pub fn resolve_baseline(&mut self, file: &File) {
        self.baselines
            .entry(file.id)
            .or_insert_with(|| file.code.clone());
    }

    /// Drop the baseline of a closed file.
    pub fn forget(&mut self, id: FileId) {
        if self.baselines.remove(&id).is_some() {
            log::debug!("Discarded diff baseline of {}", id);
        }
    }

    /// Recorded baseline of a file.
    pub fn baseline(&self, id: FileId) -> Option<&str> {
        self.baselines.get(&id).map(String::as_str)
    }

    /// Diff texts for the active file, or `None` outside diff mode.
    pub fn diff_view<'a>(&'a self, active: Option<&'a File>) -> Option<DiffView<'a>> {
        let file = active?;
        if self.mode != ViewMode::Diff {
            return None;
        }

        Some(DiffView {
            original: self.baseline(file.id).unwrap_or(file.code.as_str()),
            modified: &file.code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(id: u64, code: &str) -> File {
        File::new(FileId::from_raw(id), format!("F{}.sol", id), code.to_string(), "solidity")
    }

    #[test]
    fn test_enter_without_baseline_is_empty_diff() {
        let mut controller = ViewModeController::new();
        let a = file(1, "contract A {}");

        controller.enter_diff_mode(Some(&a));
        let view = controller.diff_view(Some(&a)).unwrap();
        assert_eq!(view.original, view.modified);
    }

    #[test]
    fn test_baseline_frozen_on_entry() {
        let mut controller = ViewModeController::new();
        let mut a = file(1, "v1");

        controller.enter_diff_mode(Some(&a));
        a.code = "v2".to_string();

        let view = controller.diff_view(Some(&a)).unwrap();
        assert_eq!(view.original, "v1");
        assert_eq!(view.modified, "v2");
    }

    #[test]
    fn test_baseline_survives_toggle() {
        let mut controller = ViewModeController::new();
        let mut a = file(1, "v1");

        controller.set_baseline(a.id, "base");
        a.code = "edited".to_string();

        assert_eq!(controller.toggle_diff_mode(Some(&a)), ViewMode::Diff);
        assert_eq!(controller.toggle_diff_mode(Some(&a)), ViewMode::Edit);
        assert!(controller.diff_view(Some(&a)).is_none());
        assert_eq!(controller.toggle_diff_mode(Some(&a)), ViewMode::Diff);

        let view = controller.diff_view(Some(&a)).unwrap();
        assert_eq!(view.original, "base");
        assert_eq!(view.modified, "edited");
    }

    #[test]
    fn test_forget_discards_baseline() {
        let mut controller = ViewModeController::new();
        let a = file(1, "code");

        controller.set_baseline(a.id, "base");
        controller.forget(a.id);
        assert_eq!(controller.baseline(a.id), None);
    }

    #[test]
    fn test_diff_without_file_renders_as_edit() {
        let mut controller = ViewModeController::new();
        controller.enter_diff_mode(None);

        assert_eq!(controller.mode(), ViewMode::Diff);
        assert_eq!(controller.effective_mode(None), ViewMode::Edit);
        assert!(controller.diff_view(None).is_none());
    }

    #[test]
    fn test_baselines_are_per_file() {
        let mut controller = ViewModeController::new();
        let a = file(1, "a");
        let b = file(2, "b");

        controller.set_baseline(a.id, "base-a");
        controller.enter_diff_mode(Some(&a));
        controller.resolve_baseline(&b);

        assert_eq!(controller.diff_view(Some(&a)).unwrap().original, "base-a");
        assert_eq!(controller.diff_view(Some(&b)).unwrap().original, "b");
    }
}
