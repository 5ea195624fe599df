/*
[INPUT]:  Fixed option list (priorities or sort keys) and picker keys
[OUTPUT]: Chosen value on Enter; popup list drawn over the board
[POS]:    Reusable TUI component behind the priority and sort pickers
[UPDATE]: When picker keys or popup styling change
*/

use std::fmt::Display;

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::tui::ui::theme::{border_style, placeholder_style};

const HINT: &str = "Enter pick · Esc cancel";

/// Popup list of values where the value in effect is marked and the cursor
/// starts on it.
#[derive(Debug, Clone)]
pub struct Picker<T> {
    title: &'static str,
    options: Vec<T>,
    current: Option<usize>,
    cursor: usize,
}

impl<T> Picker<T>
where
    T: Copy + Display + PartialEq,
{
    pub fn new(title: &'static str, options: &[T], current: T) -> Self {
        let current = options.iter().position(|option| *option == current);
        Self {
            title,
            options: options.to_vec(),
            current,
            cursor: current.unwrap_or(0),
        }
    }

    pub fn highlighted(&self) -> Option<T> {
        self.options.get(self.cursor).copied()
    }

    /// Moves the cursor, returning the value once Enter confirms it.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<T> {
        let last = self.options.len().saturating_sub(1);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.cursor = (self.cursor + 1).min(last),
            KeyCode::Home | KeyCode::Char('g') => self.cursor = 0,
            KeyCode::End | KeyCode::Char('G') => self.cursor = last,
            KeyCode::Enter => return self.highlighted(),
            _ => {}
        }
        None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(true))
            .title(self.title);
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let [list_area, hint_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let marker = if self.current == Some(index) { "● " } else { "  " };
                ListItem::new(Line::from(vec![Span::raw(marker), Span::raw(option.to_string())]))
            })
            .collect();
        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        let mut state = ListState::default().with_selected(self.highlighted().map(|_| self.cursor));
        frame.render_stateful_widget(list, list_area, &mut state);

        frame.render_widget(
            Paragraph::new(Span::styled(HINT, placeholder_style())),
            hint_area,
        );
    }
}
