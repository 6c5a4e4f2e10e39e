mod command;
mod render;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use ratatui::layout::Rect;

use solpad_config::Config;
use solpad_logger::LogLevel;
use solpad_session::EditorSession;

use crate::command::{Command, Switch, HELP};

fn init_logging(config: &Config) {
    let file_path = match &config.logging.file_path {
        Some(path) => Some(PathBuf::from(path)),
        None => Config::default_log_path().ok(),
    };
    let min_level = config
        .logging
        .min_level
        .parse::<LogLevel>()
        .unwrap_or(LogLevel::Info);

    solpad_logger::init(file_path, config.logging.max_entries, min_level);
}

/// Open every path from the command line, or the starter contract.
fn open_initial_files(config: &Config, paths: &[String]) -> Result<EditorSession> {
    if paths.is_empty() {
        return Ok(EditorSession::with_default_file(config));
    }

    let mut session = EditorSession::new(config);
    for path in paths {
        let code = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path))?;
        let name = std::path::Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.clone());
        session.open_file(name, code);
    }
    Ok(session)
}

fn apply_switch(switch: Switch, current: bool) -> bool {
    match switch {
        Switch::On => true,
        Switch::Off => false,
        Switch::Toggle => !current,
    }
}

/// Apply one command. Returns false when the driver should stop.
fn apply(
    session: &mut EditorSession,
    command: Command,
    color: bool,
    out: &mut impl Write,
) -> Result<bool> {
    match command {
        Command::Open { name, path } => {
            let code = match path {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path))?,
                None => String::new(),
            };
            let id = session.open_file(name, code);
            writeln!(out, "opened {}", id)?;
        }
        Command::Close(id) => {
            if !session.close_file(id) {
                log::warn!("close: no file {}", id);
            }
        }
        Command::Activate(id) => session.set_active(id)?,
        Command::Edit { id, code } => session.update_code(id, code)?,
        Command::Baseline(text) => {
            if !session.set_baseline(text) {
                log::warn!("baseline: no active file");
            }
        }
        Command::Diff(switch) => match switch {
            Switch::On => session.enter_diff_mode(),
            Switch::Off => session.exit_diff_mode(),
            Switch::Toggle => {
                session.toggle_diff_mode();
            }
        },
        Command::Theme(Some(mode)) => session.set_theme(mode),
        Command::Theme(None) => {
            session.toggle_theme();
        }
        Command::ExplorerWidth(px) => {
            let width = session.set_explorer_width(px);
            writeln!(out, "explorer width {}", width)?;
        }
        Command::Explorer(switch) => {
            let visible = apply_switch(switch, session.layout().explorer_visible());
            session.set_explorer_visible(visible);
        }
        Command::TerminalHeight(px) => {
            let height = session.set_terminal_height(px);
            writeln!(out, "terminal height {}", height)?;
        }
        Command::Terminal(switch) => {
            let visible = apply_switch(switch, session.terminal().visible);
            session.set_terminal_visible(visible);
        }
        Command::Resize { width, height } => session.resize_window(Rect {
            x: 0,
            y: 0,
            width,
            height,
        }),
        Command::Snapshot => writeln!(out, "{}", render::describe(&session.snapshot(), color))?,
        Command::Log => {
            for entry in solpad_logger::get_entries() {
                writeln!(
                    out,
                    "{} {:5} {}",
                    entry.timestamp,
                    entry.level.to_str(),
                    entry.message
                )?;
            }
        }
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn main() -> Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Config error: {:#}, using defaults", e);
        Config::default()
    });
    init_logging(&config);
    log::info!("solpad {} starting", env!("CARGO_PKG_VERSION"));

    let paths: Vec<String> = std::env::args().skip(1).collect();
    let mut session = open_initial_files(&config, &paths)?;

    let stdin = io::stdin();
    let color = io::stdout().is_terminal();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", render::describe(&session.snapshot(), color))?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                log::warn!("{:#}", e);
                writeln!(stdout, "error: {:#}", e)?;
                continue;
            }
        };

        let before = session.revision();
        match apply(&mut session, command, color, &mut stdout) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                log::error!("{:#}", e);
                writeln!(stdout, "error: {:#}", e)?;
                continue;
            }
        }
        if session.revision() != before {
            writeln!(stdout, "{}", render::describe(&session.snapshot(), color))?;
        }
        stdout.flush()?;
    }

    log::info!("solpad exiting");
    Ok(())
}
