//! Editor session coordinator for solpad.
//!
//! `EditorSession` composes the file registry, view mode controller,
//! layout and theme into one consistent state. The rendering layer pulls
//! [`Snapshot`]s after each mutation and may subscribe to
//! [`SessionEvent`]s to know when to pull.
//!
//! ```text
//! user action ──→ EditorSession ──→ Snapshot ──→ editor widget
//!                      │
//!                      └──→ SessionEvent (mpsc) ──→ subscribers
//! ```

mod event;
mod session;
mod snapshot;

pub use event::SessionEvent;
pub use session::{EditorSession, DEFAULT_FILE_CODE, DEFAULT_FILE_NAME};
pub use snapshot::{
    DiffOptions, EditorOptions, RenderRequest, SessionState, Snapshot, StatusBar, Tab,
};

// Re-export foundation types used in the session API
pub use solpad_diff::{DiffStats, DiffView, LineStatus};
pub use solpad_state::{EditorError, File, FileId, TerminalState, ThemeMode, ViewMode};
pub use solpad_theme::Theme;
