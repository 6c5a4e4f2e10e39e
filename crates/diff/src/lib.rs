//! View mode management for solpad.
//!
//! - `ViewModeController` - edit/diff mode and per-file baselines
//! - `DiffStats` - line change markers for the diff pane

mod controller;
mod stats;

pub use controller::{DiffView, ViewModeController};
pub use stats::{DiffStats, LineStatus};
