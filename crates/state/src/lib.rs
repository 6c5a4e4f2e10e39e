//! State types and data structures for solpad.
//!
//! This crate contains pure data types shared by the session crates,
//! without dependencies on specific implementations.

use std::fmt;

/// Opaque identifier of an open file (one per tab).
///
/// Identity is by id, never by name: opening the same file name twice
/// yields two distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u64);

impl FileId {
    /// Create id from raw value.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get raw value.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Open file with its current text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// Unique id
    pub id: FileId,
    /// Display name (tab title)
    pub file_name: String,
    /// Current text content
    pub code: String,
    /// Language derived from the file name extension
    pub language: &'static str,
}

impl File {
    /// Create new file.
    pub fn new(id: FileId, file_name: String, code: String, language: &'static str) -> Self {
        Self {
            id,
            file_name,
            code,
            language,
        }
    }

    /// Number of lines, counted as `\n`-separated segments.
    pub fn line_count(&self) -> usize {
        self.code.split('\n').count()
    }
}

/// Editing pane mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Single editable pane
    #[default]
    Edit,
    /// Read-only original next to editable modified text
    Diff,
}

impl ViewMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Edit => ViewMode::Diff,
            ViewMode::Diff => ViewMode::Edit,
        }
    }
}

/// Light or dark color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Short name as used in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Embedded terminal panel state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalState {
    /// Is terminal panel shown
    pub visible: bool,
    /// Panel height in pixels (kept while hidden)
    pub height: u16,
}

/// Errors reported by session operations.
///
/// None of these are fatal: the UI can only produce them through a
/// stale reference, and ignoring them leaves the session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("unknown file {0}")]
    UnknownFile(FileId),
}
