/*
[INPUT]:  Key sequences and terminal sizes
[OUTPUT]: Shared AppState fixtures, key helpers and screen capture
[POS]:    Test infrastructure - shared across TUI test modules
[UPDATE]: When adding new fixtures
*/

//! Common test utilities for taskboard-tui tests

#![allow(dead_code)]

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskboard_store::{ManualClock, SortKey, TaskStore};
use taskboard_tui::tui::{handle_key_event, ui};
use taskboard_tui::AppState;

/// Board with a frozen clock, sorted by creation time
pub fn board() -> AppState {
    AppState::new(
        TaskStore::with_clock(ManualClock::new(1_700_000_000_000)),
        SortKey::CreatedAt,
    )
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

/// Sends each key, returning whether quit was requested by the last one
pub fn press(app: &mut AppState, codes: &[KeyCode]) -> bool {
    let mut quit = false;
    for code in codes {
        quit = handle_key_event(app, key(*code));
    }
    quit
}

pub fn type_text(app: &mut AppState, text: &str) {
    for ch in text.chars() {
        handle_key_event(app, key(KeyCode::Char(ch)));
    }
}

/// Types `text` into the focused input and presses Enter
pub fn add_task(app: &mut AppState, text: &str) {
    type_text(app, text);
    press(app, &[KeyCode::Enter]);
}

/// Renders the board and returns the screen as lines
pub fn screen(app: &AppState, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

/// Index of the first screen line containing `needle`
pub fn line_of(lines: &[String], needle: &str) -> Option<usize> {
    lines.iter().position(|line| line.contains(needle))
}

pub fn screen_text(lines: &[String]) -> String {
    lines.join("\n")
}

/// Task texts in display order
pub fn visible_texts(app: &AppState) -> Vec<String> {
    app.visible_tasks()
        .iter()
        .map(|task| task.text.clone())
        .collect()
}
