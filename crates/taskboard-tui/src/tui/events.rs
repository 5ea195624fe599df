/*
[INPUT]:  Crossterm key events and current focus/editor/popup state
[OUTPUT]: Intents dispatched into AppState
[POS]:    TUI key routing
[UPDATE]: When changing keybindings
*/

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::InputRequest;

use super::app::{AppState, Focus};
use super::intent::Intent;

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub fn handle_key_event(app: &mut AppState, key: KeyEvent) -> bool {
    if let Some(intent) = key_to_intent(app, key) {
        app.dispatch(intent);
    }
    app.should_quit()
}

/// Maps a key to an intent. Routing order: popup, task editor, new-task
/// input, then list navigation.
pub fn key_to_intent(app: &AppState, key: KeyEvent) -> Option<Intent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Intent::Quit);
    }

    if app.popup().is_some() {
        return match key.code {
            KeyCode::Esc => Some(Intent::ClosePicker),
            _ => Some(Intent::PickerKey(key)),
        };
    }

    if app.editor().is_some() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(Intent::ToggleEditing),
            KeyCode::Char('d') if ctrl => Some(Intent::RemoveSelected),
            _ => input_request(key).map(Intent::EditTask),
        };
    }

    match app.focus() {
        Focus::NewTask => match key.code {
            KeyCode::Enter => Some(Intent::SubmitNewTask),
            KeyCode::Tab | KeyCode::Esc | KeyCode::Down => Some(Intent::FocusList),
            _ => input_request(key).map(Intent::EditNewTask),
        },
        Focus::List => list_intent(key),
    }
}

fn list_intent(key: KeyEvent) -> Option<Intent> {
    let intent = match key.code {
        KeyCode::Char('q') => Intent::Quit,
        KeyCode::Tab | KeyCode::Char('a') | KeyCode::Char('i') => Intent::FocusInput,
        KeyCode::Up | KeyCode::Char('k') => Intent::MoveSelection(-1),
        KeyCode::Down | KeyCode::Char('j') => Intent::MoveSelection(1),
        KeyCode::Home | KeyCode::Char('g') => Intent::SelectFirst,
        KeyCode::End | KeyCode::Char('G') => Intent::SelectLast,
        KeyCode::Char(' ') | KeyCode::Char('x') => Intent::ToggleCompleted,
        KeyCode::Char('e') | KeyCode::Enter => Intent::ToggleEditing,
        KeyCode::Char('d') | KeyCode::Delete => Intent::RemoveSelected,
        KeyCode::Char('p') => Intent::OpenPriorityPicker,
        KeyCode::Char('s') => Intent::OpenSortPicker,
        KeyCode::Char('l') => Intent::ToggleLogPanel,
        _ => return None,
    };
    Some(intent)
}

/// Text editing keys shared by the new-task input and the task editor.
pub fn input_request(key: KeyEvent) -> Option<InputRequest> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let request = match key.code {
        KeyCode::Char('w') if ctrl => InputRequest::DeletePrevWord,
        KeyCode::Char('u') if ctrl => InputRequest::DeleteLine,
        KeyCode::Char('k') if ctrl => InputRequest::DeleteTillEnd,
        KeyCode::Char('a') if ctrl => InputRequest::GoToStart,
        KeyCode::Char('e') if ctrl => InputRequest::GoToEnd,
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(ch) => InputRequest::InsertChar(ch),
        KeyCode::Backspace => InputRequest::DeletePrevChar,
        KeyCode::Delete => InputRequest::DeleteNextChar,
        KeyCode::Left if ctrl => InputRequest::GoToPrevWord,
        KeyCode::Right if ctrl => InputRequest::GoToNextWord,
        KeyCode::Left => InputRequest::GoToPrevChar,
        KeyCode::Right => InputRequest::GoToNextChar,
        KeyCode::Home => InputRequest::GoToStart,
        KeyCode::End => InputRequest::GoToEnd,
        _ => return None,
    };
    Some(request)
}
