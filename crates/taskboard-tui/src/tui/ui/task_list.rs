/*
[INPUT]:  AppState display order, selection and task editor
[OUTPUT]: Task table rendered into the Ratatui frame
[POS]:    TUI UI task list rendering
[UPDATE]: When changing task row columns or styling
*/

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use taskboard_store::Task;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::{border_style, completed_style, placeholder_style, priority_style};
use crate::tui::app::{AppState, EditBuffer, Focus};

const HIGHLIGHT_SYMBOL: &str = "> ";
const COLUMN_SPACING: u16 = 1;
const DONE_WIDTH: u16 = 3;
const PRIORITY_WIDTH: u16 = 6;
const CREATED_WIDTH: u16 = 8;
const ACTION_WIDTH: u16 = 4;
const REMOVE_WIDTH: u16 = 6;

pub(crate) fn draw_task_list(frame: &mut Frame, area: Rect, app: &AppState) {
    let tasks = app.visible_tasks();
    let done = tasks.iter().filter(|task| task.completed).count();
    let focused = app.focus() == Focus::List || app.editor().is_some();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(format!("Tasks ({done}/{} done)", tasks.len()));

    if tasks.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No tasks yet. Type above and press Enter.",
            placeholder_style(),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let text_width = task_column_width(block.inner(area).width) as usize;
    let header = Row::new(vec![
        Cell::from("Done"),
        Cell::from("Task"),
        Cell::from("Prio"),
        Cell::from("Created"),
        Cell::from(""),
        Cell::from(""),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = tasks
        .iter()
        .map(|task| {
            let editor = app.editor().filter(|editor| editor.task_id() == task.id);
            task_row(task, editor, text_width)
        })
        .collect();

    let highlight = if focused {
        Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(Color::DarkGray)
    };

    let table = Table::new(rows, [
        Constraint::Length(DONE_WIDTH),
        Constraint::Fill(1),
        Constraint::Length(PRIORITY_WIDTH),
        Constraint::Length(CREATED_WIDTH),
        Constraint::Length(ACTION_WIDTH),
        Constraint::Length(REMOVE_WIDTH),
    ])
    .header(header)
    .column_spacing(COLUMN_SPACING)
    .row_highlight_style(highlight)
    .highlight_symbol(HIGHLIGHT_SYMBOL)
    .block(block);

    let mut state = TableState::default().with_selected(app.selected_index());
    frame.render_stateful_widget(table, area, &mut state);
}

fn task_row<'a>(task: &'a Task, editor: Option<&EditBuffer>, text_width: usize) -> Row<'a> {
    let checkbox = if task.completed {
        Span::styled("[x]", Style::default().fg(Color::Green))
    } else {
        Span::raw("[ ]")
    };

    let text = match editor {
        Some(editor) => editing_line(editor.input().value(), editor.input().cursor(), text_width),
        None if task.completed => {
            Line::from(Span::styled(truncate_to_width(&task.text, text_width), completed_style()))
        }
        None => Line::from(truncate_to_width(&task.text, text_width)),
    };

    let created = task
        .created_at()
        .map(|at| at.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());
    let action = if editor.is_some() { "Save" } else { "Edit" };

    Row::new(vec![
        Cell::from(checkbox),
        Cell::from(text),
        Cell::from(Span::styled(task.priority.label(), priority_style(task.priority))),
        Cell::from(created),
        Cell::from(Span::styled(action, Style::default().fg(Color::LightBlue))),
        Cell::from(Span::styled("Remove", Style::default().fg(Color::LightRed))),
    ])
}

/// Width left for the task text after the fixed columns and spacing.
fn task_column_width(inner_width: u16) -> u16 {
    let fixed = DONE_WIDTH + PRIORITY_WIDTH + CREATED_WIDTH + ACTION_WIDTH + REMOVE_WIDTH;
    let spacing = COLUMN_SPACING * 5;
    inner_width.saturating_sub(HIGHLIGHT_SYMBOL.width() as u16 + fixed + spacing)
}

/// Cuts `text` to `max_width` display columns, ending with `…` when cut.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Editable text with a block cursor, scrolled so the cursor stays visible.
pub(crate) fn editing_line(value: &str, cursor: usize, max_width: usize) -> Line<'static> {
    let chars: Vec<char> = value.chars().collect();
    let cursor = cursor.min(chars.len());
    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);
    let field_style = Style::default().add_modifier(Modifier::UNDERLINED);

    // leave one column for the cursor cell
    let budget = max_width.saturating_sub(1);
    let mut start = 0;
    let mut before_width: usize = chars[..cursor].iter().map(|ch| ch.width().unwrap_or(0)).sum();
    while before_width > budget && start < cursor {
        before_width -= chars[start].width().unwrap_or(0);
        start += 1;
    }

    let before: String = chars[start..cursor].iter().collect();
    let at = chars.get(cursor).map(|ch| ch.to_string()).unwrap_or_else(|| " ".to_string());
    let after: String = chars
        .get(cursor + 1..)
        .map(|rest| rest.iter().collect())
        .unwrap_or_default();

    Line::from(vec![
        Span::styled(before, field_style),
        Span::styled(at, cursor_style),
        Span::styled(after, field_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("Buy milk", 20), "Buy milk");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate_to_width("Buy milk and eggs", 8), "Buy mil…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn wide_chars_count_double() {
        let cut = truncate_to_width("日本語のタスク", 5);
        assert_eq!(cut, "日本…");
        assert!(cut.width() <= 5);
    }

    #[test]
    fn editing_line_marks_cursor_cell() {
        let line = editing_line("milk", 2, 20);
        assert_eq!(line.spans[0].content, "mi");
        assert_eq!(line.spans[1].content, "l");
        assert_eq!(line.spans[2].content, "k");
    }

    #[test]
    fn editing_line_at_end_shows_blank_cursor() {
        let line = editing_line("milk", 4, 20);
        assert_eq!(line_text(&line), "milk ");
    }

    #[test]
    fn editing_line_scrolls_to_keep_cursor_visible() {
        let line = editing_line("abcdefghij", 10, 5);
        assert_eq!(line_text(&line), "ghij ");
    }

    #[test]
    fn column_width_never_underflows() {
        assert_eq!(task_column_width(10), 0);
        assert_eq!(task_column_width(100), 100 - 2 - 27 - 5);
    }
}
