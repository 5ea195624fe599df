/*
[INPUT]:  TUI app state
[OUTPUT]: Full-frame render and module exports
[POS]:    TUI UI module root
[UPDATE]: When adding panels or changing the screen layout
*/

mod footer;
mod header;
mod input;
mod logs;
mod task_list;
mod theme;

pub mod components;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use self::footer::draw_footer;
use self::header::draw_header;
use self::input::draw_new_task_input;
use self::logs::draw_logs;
use self::task_list::draw_task_list;
use self::theme::centered_rect;
use crate::tui::app::{AppState, Popup};

/// Main render function - called every frame
pub fn render(frame: &mut Frame, app: &AppState) {
    let area = frame.area();

    let [header_area, input_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(5),
    ])
    .areas(area);

    draw_header(frame, header_area, app);
    draw_new_task_input(frame, input_area, app);

    if app.log_panel_visible() {
        let [tasks_area, logs_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(body_area);
        draw_task_list(frame, tasks_area, app);
        draw_logs(frame, logs_area, app.log_buffer());
    } else {
        draw_task_list(frame, body_area, app);
    }

    draw_footer(frame, footer_area, app);

    if let Some(popup) = app.popup() {
        let popup_area = centered_rect(30, 6, area);
        match popup {
            Popup::Priority(picker) => picker.render(frame, popup_area),
            Popup::Sort(picker) => picker.render(frame, popup_area),
        }
    }
}
