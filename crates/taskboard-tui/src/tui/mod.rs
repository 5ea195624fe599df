/*
[INPUT]:  Task store, configuration and log buffer
[OUTPUT]: Ratatui-based task board: state, key routing, rendering and run loop
[POS]:    TUI module for the taskboard binary
[UPDATE]: When adding TUI submodules or public exports
*/

mod app;
mod events;
mod intent;
mod log_buffer;
mod runtime;
mod terminal;

pub mod ui;

pub use app::{AppState, EditBuffer, Focus, Popup};
pub use events::{handle_key_event, input_request, key_to_intent};
pub use intent::Intent;
pub use log_buffer::{LogBuffer, LogBufferHandle, LogWriterFactory};
pub use runtime::run_tui;
