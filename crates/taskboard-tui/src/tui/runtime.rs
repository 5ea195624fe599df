/*
[INPUT]:  App configuration, log buffer, crossterm input events
[OUTPUT]: Ratatui-based TUI run loop
[POS]:    TUI runtime loop
[UPDATE]: When changing the event loop, tick handling or redraw policy
*/

use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use taskboard_store::TaskStore;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::app::AppState;
use super::events::handle_key_event;
use super::log_buffer::LogBufferHandle;
use super::terminal::TerminalGuard;
use super::ui::render;
use crate::config::AppConfig;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

enum UiEvent {
    Input(CrosstermEvent),
}

/// Runs the board until the user quits. Tasks live only for this call.
pub async fn run_tui(config: &AppConfig, log_buffer: LogBufferHandle) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();
    let _input_guard = input_shutdown.drop_guard();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            match event::poll(INPUT_POLL_INTERVAL) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if event_tx.send(UiEvent::Input(event)).is_err() {
                            break;
                        }
                    }
                    Err(err) => warn!(error = %err, "failed to read terminal event"),
                },
                Ok(false) => {}
                Err(err) => {
                    warn!(error = %err, "failed to poll terminal events");
                    break;
                }
            }
        }
    });

    let mut app = AppState::new(TaskStore::new(), config.default_sort)
        .with_log_buffer(log_buffer)
        .with_log_panel(config.show_log_panel);
    app.seed(config.seed_tasks.as_slice());
    info!(sort = ?config.default_sort, "task board ready");

    let mut tick = tokio::time::interval(Duration::from_millis(config.tick_rate_ms));

    while !app.should_quit() {
        if app.take_dirty() {
            terminal.draw(|frame| render(frame, &app))?;
        }

        tokio::select! {
            _ = tick.tick() => {
                // new log lines arrive outside of key handling
                if app.log_panel_visible() {
                    app.mark_dirty();
                }
            }
            maybe_event = event_rx.recv() => match maybe_event {
                Some(UiEvent::Input(CrosstermEvent::Key(key)))
                    if key.kind == KeyEventKind::Press =>
                {
                    handle_key_event(&mut app, key);
                }
                Some(UiEvent::Input(CrosstermEvent::Resize(..))) => app.mark_dirty(),
                Some(_) => {}
                None => {
                    warn!("input reader stopped");
                    break;
                }
            },
        }
    }

    info!(tasks = app.store().len(), "task board closed");
    Ok(())
}
