//! End-to-end walk through a typical editing session.

use std::collections::HashSet;

use ratatui::layout::Rect;

use solpad_config::Config;
use solpad_session::{
    EditorSession, RenderRequest, SessionEvent, SessionState, ThemeMode, ViewMode,
};

const A_CODE: &str = "contract A {}";
const B_CODE: &str = "pragma solidity ^0.8.0;\ncontract B {}";

fn session() -> EditorSession {
    EditorSession::new(&Config::default())
}

#[test]
fn test_two_files_diff_and_close() {
    let mut session = session();
    assert_eq!(session.state(), SessionState::NoFile);

    let a = session.open_file("A.sol", A_CODE);
    let b = session.open_file("B.sol", B_CODE);
    assert_ne!(a, b);

    let active = session.active_file().unwrap();
    assert_eq!(active.id, b);
    assert_eq!(active.line_count(), 2);
    assert_eq!(session.status_bar().lines, 2);

    session.enter_diff_mode();
    assert_eq!(session.state(), SessionState::Diff);
    let view = session.diff_view().unwrap();
    assert_eq!(view.original, B_CODE);
    assert_eq!(view.modified, B_CODE);

    let edited = format!("{}\n// note", B_CODE);
    session.update_code(b, edited.clone()).unwrap();
    let view = session.diff_view().unwrap();
    assert_eq!(view.original, B_CODE);
    assert_eq!(view.modified, edited);

    assert!(session.close_file(a));
    assert_eq!(session.active_file().unwrap().id, b);
    assert_eq!(session.state(), SessionState::Diff);

    assert!(session.close_file(b));
    assert_eq!(session.state(), SessionState::NoFile);
    assert_eq!(session.view_mode(), ViewMode::Edit);
    assert_eq!(session.snapshot().render, RenderRequest::Empty);
}

#[test]
fn test_theme_round_trip() {
    let mut session = session();
    let initial = session.theme().mode();

    assert_eq!(session.toggle_theme(), ThemeMode::Dark);
    assert_eq!(session.snapshot().theme_name, "based-dark");
    session.toggle_theme();
    assert_eq!(session.theme().mode(), initial);
    assert_eq!(session.snapshot().theme_name, "based-light");
}

#[test]
fn test_drag_values_are_clamped() {
    let mut session = session();

    assert_eq!(session.set_explorer_width(-50), 160);
    assert_eq!(session.set_explorer_width(100_000), 480);
    assert_eq!(session.set_terminal_height(-50), 100);
    assert_eq!(session.set_terminal_height(100_000), 600);
}

#[test]
fn test_many_files_keep_order_and_unique_ids() {
    let mut session = session();
    let ids: Vec<_> = (0..25)
        .map(|i| session.open_file(format!("F{}.sol", i), ""))
        .collect();

    let unique: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());

    let tab_ids: Vec<_> = session.tabs().iter().map(|t| t.id).collect();
    assert_eq!(tab_ids, ids);
    assert_eq!(session.active_file().unwrap().id, ids[24]);
}

#[test]
fn test_editing_rect_follows_panels() {
    let mut session = session();
    session.open_file("A.sol", A_CODE);
    session.resize_window(Rect {
        x: 0,
        y: 0,
        width: 1280,
        height: 800,
    });

    // activity bar + explorer, header + tab bar, status bar
    let rect = session.editing_rect();
    assert_eq!((rect.x, rect.y), (48 + 256, 56 + 40));
    assert_eq!((rect.width, rect.height), (1280 - 304, 800 - 96 - 24));

    session.set_terminal_visible(true);
    session.set_explorer_visible(false);
    let rect = session.editing_rect();
    assert_eq!(rect.x, 48);
    assert_eq!(rect.height, 800 - 96 - 24 - 256);

    let terminal = session.snapshot().terminal_rect.unwrap();
    assert_eq!(terminal.y, rect.y + rect.height);
    assert_eq!(terminal.height, 256);
}

#[test]
fn test_subscriber_sees_every_mutation() {
    let mut session = session();
    let events = session.subscribe();

    let a = session.open_file("A.sol", A_CODE);
    session.toggle_diff_mode();
    session.set_theme(ThemeMode::Dark);
    session.close_file(a);

    let received: Vec<_> = events.try_iter().collect();
    assert_eq!(
        received,
        vec![
            SessionEvent::FileOpened(a),
            SessionEvent::ViewModeChanged(ViewMode::Diff),
            SessionEvent::ThemeChanged(ThemeMode::Dark),
            SessionEvent::FileClosed { id: a, active: None },
        ]
    );
    assert_eq!(session.revision(), 4);
}
