/*
[INPUT]:  Focus, editor and popup state, status message
[OUTPUT]: Context-sensitive hotkey bar
[POS]:    TUI UI footer rendering
[UPDATE]: When keybindings change
*/

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::theme::{border_style, key_style};
use crate::tui::app::{AppState, Focus};

pub(crate) fn draw_footer(frame: &mut Frame, area: Rect, app: &AppState) {
    let hints: &[(&str, &str)] = if app.popup().is_some() {
        &[("[Up/Down]", "Choose"), ("[Enter]", "Apply"), ("[Esc]", "Cancel")]
    } else if app.editor().is_some() {
        &[("[Enter/Esc]", "Save"), ("[Ctrl+D]", "Remove"), ("[Ctrl+C]", "Quit")]
    } else if app.focus() == Focus::NewTask {
        &[("[Enter]", "Add"), ("[Tab/Esc]", "Tasks"), ("[Ctrl+C]", "Quit")]
    } else {
        &[
            ("[Up/Down]", "Select"),
            ("[Space]", "Done"),
            ("[e]", "Edit"),
            ("[p]", "Priority"),
            ("[d]", "Remove"),
            ("[s]", "Sort"),
            ("[a]", "New"),
            ("[l]", "Activity"),
            ("[q]", "Quit"),
        ]
    };

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(*key, key_style()));
        spans.push(Span::raw(format!(" {label}  ")));
    }

    let text = Text::from(vec![
        Line::from(spans),
        Line::from(format!("Status: {}", app.status_message())),
    ]);
    let widget = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(false))
                .title("Hotkeys"),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}
