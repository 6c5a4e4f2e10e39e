//! Pane geometry for solpad.
//!
//! `LayoutState` owns the explorer width, terminal visibility and
//! height, and derives the editing pane rectangle from them.

pub mod layout_state;

pub use layout_state::LayoutState;
