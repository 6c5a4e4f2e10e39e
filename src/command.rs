//! Line-oriented commands understood by the driver.

use anyhow::{anyhow, bail, Context, Result};

use solpad_session::{FileId, ThemeMode};

/// Tri-state switch argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    On,
    Off,
    Toggle,
}

impl Switch {
    fn parse(word: Option<&str>) -> Result<Self> {
        match word {
            Some("on") | Some("show") => Ok(Switch::On),
            Some("off") | Some("hide") => Ok(Switch::Off),
            Some("toggle") | None => Ok(Switch::Toggle),
            Some(other) => bail!("Expected on/off/toggle, got '{}'", other),
        }
    }
}

/// Parsed driver command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open a tab, content read from `path` when given
    Open { name: String, path: Option<String> },
    Close(FileId),
    Activate(FileId),
    /// Replace file content (`\n` escapes allowed)
    Edit { id: FileId, code: String },
    Baseline(String),
    Diff(Switch),
    Theme(Option<ThemeMode>),
    ExplorerWidth(i32),
    Explorer(Switch),
    TerminalHeight(i32),
    Terminal(Switch),
    Resize { width: u16, height: u16 },
    Snapshot,
    Log,
    Help,
    Quit,
}

/// Turn `\n` and `\t` escapes into real characters.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn parse_id(word: Option<&str>) -> Result<FileId> {
    let word = word.ok_or_else(|| anyhow!("Missing file id"))?;
    let raw = word.trim_start_matches('#');
    let value: u64 = raw
        .parse()
        .with_context(|| format!("Invalid file id '{}'", word))?;
    Ok(FileId::from_raw(value))
}

fn parse_px(word: Option<&str>) -> Result<i32> {
    let word = word.ok_or_else(|| anyhow!("Missing size"))?;
    word.parse()
        .with_context(|| format!("Invalid size '{}'", word))
}

impl std::str::FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim_start()),
            None => (line, ""),
        };
        let mut words = rest.split_whitespace();

        let command = match head {
            "open" => {
                let name = words
                    .next()
                    .ok_or_else(|| anyhow!("Usage: open NAME [PATH]"))?
                    .to_string();
                let path = words.next().map(str::to_string);
                Command::Open { name, path }
            }
            "close" => Command::Close(parse_id(words.next())?),
            "activate" => Command::Activate(parse_id(words.next())?),
            "edit" => {
                let (id, code) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Command::Edit {
                    id: parse_id(Some(id).filter(|s| !s.is_empty()))?,
                    code: unescape(code.trim_start()),
                }
            }
            "baseline" => Command::Baseline(unescape(rest)),
            "diff" => Command::Diff(Switch::parse(words.next())?),
            "theme" => match words.next() {
                None | Some("toggle") => Command::Theme(None),
                Some(name) => {
                    let mode = name.parse::<ThemeMode>().map_err(|e| anyhow!(e))?;
                    Command::Theme(Some(mode))
                }
            },
            "explorer" => match words.next() {
                Some("width") => Command::ExplorerWidth(parse_px(words.next())?),
                other => Command::Explorer(Switch::parse(other)?),
            },
            "terminal" => match words.next() {
                Some("height") => Command::TerminalHeight(parse_px(words.next())?),
                other => Command::Terminal(Switch::parse(other)?),
            },
            "resize" => {
                let width = parse_px(words.next())?;
                let height = parse_px(words.next())?;
                Command::Resize {
                    width: width.clamp(0, i32::from(u16::MAX)) as u16,
                    height: height.clamp(0, i32::from(u16::MAX)) as u16,
                }
            }
            "snapshot" | "show" => Command::Snapshot,
            "log" => Command::Log,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "" => bail!("Empty command"),
            other => bail!("Unknown command '{}'", other),
        };

        Ok(command)
    }
}

pub const HELP: &str = "\
Commands:
  open NAME [PATH]          open a new tab (content from PATH)
  close ID | activate ID    close or switch tab
  edit ID TEXT              replace content (\\n for newlines)
  baseline TEXT             set diff baseline of the active file
  diff [on|off|toggle]      switch diff view
  theme [light|dark|toggle] switch theme
  explorer [width PX|on|off|toggle]
  terminal [height PX|on|off|toggle]
  resize W H                set window size
  snapshot | log | help | quit";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        line.parse().unwrap()
    }

    #[test]
    fn test_open() {
        assert_eq!(
            parse("open A.sol"),
            Command::Open {
                name: "A.sol".into(),
                path: None
            }
        );
        assert_eq!(
            parse("open B.sol ./contracts/B.sol"),
            Command::Open {
                name: "B.sol".into(),
                path: Some("./contracts/B.sol".into())
            }
        );
    }

    #[test]
    fn test_edit_keeps_spacing_and_unescapes() {
        assert_eq!(
            parse("edit #2 // edited\\ncontract B {  }"),
            Command::Edit {
                id: FileId::from_raw(2),
                code: "// edited\ncontract B {  }".into()
            }
        );
    }

    #[test]
    fn test_switches() {
        assert_eq!(parse("diff"), Command::Diff(Switch::Toggle));
        assert_eq!(parse("diff on"), Command::Diff(Switch::On));
        assert_eq!(parse("terminal hide"), Command::Terminal(Switch::Off));
        assert_eq!(parse("terminal height 300"), Command::TerminalHeight(300));
        assert_eq!(parse("explorer width -50"), Command::ExplorerWidth(-50));
        assert_eq!(parse("theme dark"), Command::Theme(Some(ThemeMode::Dark)));
        assert_eq!(parse("theme"), Command::Theme(None));
    }

    #[test]
    fn test_resize_saturates() {
        assert_eq!(
            parse("resize 100000 -5"),
            Command::Resize {
                width: u16::MAX,
                height: 0
            }
        );
    }

    #[test]
    fn test_errors() {
        assert!("frobnicate".parse::<Command>().is_err());
        assert!("close".parse::<Command>().is_err());
        assert!("close abc".parse::<Command>().is_err());
        assert!("edit".parse::<Command>().is_err());
        assert!("diff sideways".parse::<Command>().is_err());
        assert!("theme neon".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape("a\\nb\\tc\\\\d\\q"), "a\nb\tc\\d\\q");
    }
}
