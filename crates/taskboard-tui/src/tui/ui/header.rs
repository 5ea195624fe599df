/*
[INPUT]:  Current sort key
[OUTPUT]: Title bar with the "Sort by" selector
[POS]:    TUI UI header rendering
[UPDATE]: When changing the header layout
*/

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::theme::{border_style, header_style, key_style};
use crate::tui::app::{AppState, Focus};

pub(crate) fn draw_header(frame: &mut Frame, area: Rect, app: &AppState) {
    let mut spans = vec![
        Span::raw("Sort by: "),
        Span::styled(format!(" {} ▾ ", app.sort_key().label()), header_style()),
    ];
    // `s` only opens the picker from the list; elsewhere it is text
    let list_keys_active =
        app.focus() == Focus::List && app.editor().is_none() && app.popup().is_none();
    if list_keys_active {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("[s]", key_style()));
        spans.push(Span::raw(" change"));
    }
    let line = Line::from(spans);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(false))
        .title(Span::styled(
            " To-Do List ",
            Style::default().add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(Paragraph::new(line).block(block), area);
}
