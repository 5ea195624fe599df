/*
[INPUT]:  Focus flags
[OUTPUT]: Shared ratatui styles for borders, headers, hotkeys and priorities
[POS]:    TUI palette
[UPDATE]: When adjusting colours
*/

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use taskboard_store::Priority;

pub(crate) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Magenta)
    }
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn key_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub(crate) fn completed_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub(crate) fn priority_style(priority: Priority) -> Style {
    match priority {
        Priority::High => Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        Priority::Medium => Style::default().fg(Color::Yellow),
        Priority::Low => Style::default().fg(Color::Green),
    }
}

/// Rect of `width` x `height` centred in `area`, clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 4);
        assert_eq!(centered_rect(20, 10, area), area);
        assert_eq!(centered_rect(4, 2, area), Rect::new(3, 1, 4, 2));
    }
}
