//! Open file management for solpad.
//!
//! - `FileRegistry` - open files in tab order with one active file
//! - `detect_language` - language name from a file extension

mod language;
mod registry;

pub use language::{detect_language, PLAIN_TEXT};
pub use registry::FileRegistry;
