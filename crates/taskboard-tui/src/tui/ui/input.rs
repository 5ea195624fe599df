/*
[INPUT]:  New-task input buffer and focus
[OUTPUT]: Input field with placeholder, cursor and Add control
[POS]:    TUI UI new-task input rendering
[UPDATE]: When changing the input bar
*/

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::theme::{border_style, key_style, placeholder_style};
use crate::tui::app::{AppState, Focus};

const PLACEHOLDER: &str = "Add a new task";

pub(crate) fn draw_new_task_input(frame: &mut Frame, area: Rect, app: &AppState) {
    let [field_area, button_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(9)]).areas(area);

    let focused = app.focus() == Focus::NewTask && app.editor().is_none() && app.popup().is_none();
    let input = app.new_task_input();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title("New task");
    let inner = block.inner(field_area);

    let width = inner.width.max(1) as usize;
    let scroll = input.visual_scroll(width);
    let content = if input.value().is_empty() {
        Line::from(Span::styled(PLACEHOLDER, placeholder_style()))
    } else {
        Line::from(input.value())
    };
    let paragraph = Paragraph::new(content)
        .block(block)
        .scroll((0, scroll as u16));
    frame.render_widget(paragraph, field_area);

    let button = Paragraph::new(Line::from(Span::styled(
        "Add",
        if input.value().trim().is_empty() {
            Style::default()
        } else {
            key_style()
        },
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(border_style(false)));
    frame.render_widget(button, button_area);

    if focused {
        let offset = input.visual_cursor().saturating_sub(scroll) as u16;
        frame.set_cursor_position((inner.x + offset.min(inner.width.saturating_sub(1)), inner.y));
    }
}
