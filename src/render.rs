//! Plain-text rendering of session snapshots.

use std::fmt::Write as _;

use ratatui::layout::Rect;
use ratatui::style::Color;

use solpad_session::{LineStatus, RenderRequest, Snapshot};

fn rect_str(rect: Rect) -> String {
    format!("{}x{}+{}+{}", rect.width, rect.height, rect.x, rect.y)
}

/// ANSI foreground escape for a palette color.
fn ansi_fg(color: Color) -> String {
    let code = match color {
        Color::Rgb(r, g, b) => return format!("\x1b[38;2;{};{};{}m", r, g, b),
        Color::Indexed(i) => return format!("\x1b[38;5;{}m", i),
        Color::Black => 30,
        Color::Red => 31,
        Color::Green => 32,
        Color::Yellow => 33,
        Color::Blue => 34,
        Color::Magenta => 35,
        Color::Cyan => 36,
        Color::Gray => 37,
        Color::DarkGray => 90,
        Color::LightRed => 91,
        Color::LightGreen => 92,
        Color::LightYellow => 93,
        Color::LightBlue => 94,
        Color::LightMagenta => 95,
        Color::LightCyan => 96,
        Color::White => 97,
        Color::Reset => 39,
    };
    format!("\x1b[{}m", code)
}

/// Text painter, a no-op when color output is off.
struct Painter {
    enabled: bool,
}

impl Painter {
    fn paint(&self, text: impl std::fmt::Display, color: Color) -> String {
        if self.enabled {
            format!("{}{}\x1b[0m", ansi_fg(color), text)
        } else {
            text.to_string()
        }
    }
}

/// Describe a snapshot the way the editor shell would lay it out.
///
/// With `color`, diff markers and comments use the snapshot's palette.
pub fn describe(snapshot: &Snapshot, color: bool) -> String {
    let palette = snapshot.palette;
    let painter = Painter { enabled: color };
    let mut out = String::new();

    let tabs: Vec<String> = snapshot
        .tabs
        .iter()
        .map(|tab| {
            if tab.active {
                painter.paint(format!("[{} {}]", tab.id, tab.title), palette.accented_fg)
            } else {
                format!(" {} {} ", tab.id, tab.title)
            }
        })
        .collect();
    let tabs = if tabs.is_empty() {
        "-".to_string()
    } else {
        tabs.join("")
    };
    let _ = writeln!(
        out,
        "rev {} | {:?} | {}",
        snapshot.revision, snapshot.state, snapshot.theme_name
    );
    let _ = writeln!(out, "tabs: {}", tabs);
    let _ = writeln!(
        out,
        "editing pane: {} | explorer: {} | terminal: {}",
        rect_str(snapshot.editing_rect),
        if snapshot.explorer_visible { "shown" } else { "hidden" },
        match snapshot.terminal_rect {
            Some(rect) => rect_str(rect),
            None => format!("hidden ({}px)", snapshot.terminal.height),
        }
    );

    let code_line = |line: &str| -> String {
        if line.trim_start().starts_with("//") {
            painter.paint(line, palette.syntax.comment)
        } else {
            line.to_string()
        }
    };

    match &snapshot.render {
        RenderRequest::Empty => {
            let _ = writeln!(out, "(no file open)");
        }
        RenderRequest::Edit { code, language, .. } => {
            let _ = writeln!(out, "--- edit ({}) ---", language);
            for (idx, line) in code.split('\n').enumerate() {
                let _ = writeln!(out, "{:>4} {}", idx + 1, code_line(line));
            }
        }
        RenderRequest::Diff {
            original,
            modified,
            language,
            ..
        } => {
            let _ = writeln!(out, "--- diff ({}) ---", language);
            let _ = writeln!(out, "original:");
            for (idx, line) in original.split('\n').enumerate() {
                let _ = writeln!(out, "{:>4}   {}", idx + 1, code_line(line));
            }
            let _ = writeln!(out, "modified:");
            let stats = snapshot.diff_stats.as_ref();
            let deleted_marker = |out: &mut String, deleted: usize| {
                if deleted > 0 {
                    let marker = painter.paint(format!("-{}", deleted), palette.error);
                    let _ = writeln!(out, "     {}", marker);
                }
            };
            deleted_marker(&mut out, stats.map_or(0, |s| s.deleted_before_start()));
            for (idx, line) in modified.split('\n').enumerate() {
                let marker = match stats.map(|s| s.status(idx)) {
                    Some(LineStatus::Added) => painter.paint('+', palette.success),
                    Some(LineStatus::Modified) => painter.paint('~', palette.warning),
                    _ => " ".to_string(),
                };
                let _ = writeln!(out, "{:>4} {} {}", idx + 1, marker, code_line(line));
                deleted_marker(&mut out, stats.map_or(0, |s| s.deleted_after(idx)));
            }
            if let Some(stats) = stats {
                let _ = writeln!(
                    out,
                    "{} {}",
                    painter.paint(format!("+{}", stats.added_lines()), palette.success),
                    painter.paint(format!("-{}", stats.removed_lines()), palette.error)
                );
            }
        }
    }

    let status = &snapshot.status_bar;
    let _ = write!(
        out,
        "{} | {} | {} | {}",
        status.compiler,
        status.network,
        status.lines_label(),
        status.encoding
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use solpad_config::Config;
    use solpad_session::EditorSession;

    #[test]
    fn test_describe_empty_session() {
        let session = EditorSession::new(&Config::default());
        let text = describe(&session.snapshot(), false);

        assert!(text.contains("NoFile"));
        assert!(text.contains("(no file open)"));
        assert!(text.ends_with("Solidity 0.8.24 | Base Sepolia | 0 lines | UTF-8"));
    }

    #[test]
    fn test_describe_diff_markers() {
        let mut session = EditorSession::new(&Config::default());
        let id = session.open_file("A.sol", "contract A {}");
        session.enter_diff_mode();
        session.update_code(id, "// edited\ncontract A {}").unwrap();

        let text = describe(&session.snapshot(), false);
        assert!(text.contains("--- diff (solidity) ---"));
        assert!(text.contains("   1 + // edited"));
        assert!(text.contains("+1 -0"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_colored_markers_use_palette() {
        let mut session = EditorSession::new(&Config::default());
        let id = session.open_file("A.sol", "a\nb");
        session.enter_diff_mode();
        session.update_code(id, "a\nb\nc").unwrap();

        let snapshot = session.snapshot();
        let text = describe(&snapshot, true);
        let added = format!("{}+\x1b[0m", ansi_fg(snapshot.palette.success));
        assert!(text.contains(&format!("   3 {} c", added)));
    }

    #[test]
    fn test_deletion_at_top_is_shown_before_first_line() {
        let mut session = EditorSession::new(&Config::default());
        let id = session.open_file("A.sol", "a\nb");
        session.enter_diff_mode();
        session.update_code(id, "b").unwrap();

        let text = describe(&session.snapshot(), false);
        assert!(text.contains("modified:\n     -1\n   1   b\n"));
    }

    #[test]
    fn test_ansi_codes() {
        assert_eq!(ansi_fg(Color::Rgb(1, 2, 3)), "\x1b[38;2;1;2;3m");
        assert_eq!(ansi_fg(Color::Red), "\x1b[31m");
    }
}
