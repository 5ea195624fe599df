/*
[INPUT]:  Decoded key events
[OUTPUT]: User intents applied by AppState::dispatch
[POS]:    TUI intent vocabulary between key routing and state mutation
[UPDATE]: When adding user actions
*/

use ratatui::crossterm::event::KeyEvent;
use taskboard_store::{Priority, SortKey};
use tui_input::InputRequest;

/// One user action, independent of the key that triggered it.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Edit the new-task input buffer
    EditNewTask(InputRequest),
    /// Add the new-task buffer as a task
    SubmitNewTask,
    FocusInput,
    FocusList,
    MoveSelection(isize),
    SelectFirst,
    SelectLast,
    ToggleCompleted,
    /// Edit/Save toggle on the selected task
    ToggleEditing,
    /// Edit the text field of the task being edited
    EditTask(InputRequest),
    RemoveSelected,
    SetPriority(Priority),
    SetSort(SortKey),
    OpenPriorityPicker,
    OpenSortPicker,
    /// Key routed to the open picker popup
    PickerKey(KeyEvent),
    ClosePicker,
    ToggleLogPanel,
    Quit,
}
