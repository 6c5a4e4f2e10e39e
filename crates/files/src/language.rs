//! Language detection from file names.

use std::path::Path;

/// Language used when the extension is unknown or missing.
pub const PLAIN_TEXT: &str = "plaintext";

/// Detect language from file extension.
pub fn detect_language(file_name: &str) -> &'static str {
    let ext = match Path::new(file_name).extension().and_then(|e| e.to_str()) {
        Some(ext) => ext,
        None => return PLAIN_TEXT,
    };

    match ext.to_lowercase().as_str() {
        "sol" => "solidity",
        "rs" => "rust",
        "py" | "pyw" => "python",
        "go" => "go",
        "js" | "mjs" | "cjs" => "javascript",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" => "tsx",
        "jsx" => "jsx",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" | "hxx" => "cpp",
        "java" => "java",
        "html" | "htm" => "html",
        "css" => "css",
        "json" => "json",
        "toml" => "toml",
        "yaml" | "yml" => "yaml",
        "sh" | "bash" | "zsh" => "bash",
        "md" | "markdown" => "markdown",
        _ => PLAIN_TEXT,
    }
}
