/*
[INPUT]:  LogBufferHandle snapshots for UI
[OUTPUT]: Activity panel rendered into Ratatui frame
[POS]:    TUI UI logs panel rendering
[UPDATE]: When changing the activity panel
*/

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::theme::{border_style, placeholder_style};
use crate::tui::log_buffer::LogBufferHandle;

pub(crate) fn draw_logs(frame: &mut Frame, area: Rect, buffer: Option<&LogBufferHandle>) {
    let available = area.height.saturating_sub(2) as usize;
    let lines = buffer
        .and_then(|buffer| buffer.lock().ok().map(|guard| guard.tail(available)))
        .unwrap_or_default();

    let text = if lines.is_empty() {
        vec![Line::from(Span::styled("No activity yet", placeholder_style()))]
    } else {
        lines.into_iter().map(Line::from).collect::<Vec<_>>()
    };
    let log_widget = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(false))
            .title("Activity"),
    );
    frame.render_widget(log_widget, area);
}
