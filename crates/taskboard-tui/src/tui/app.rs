/*
[INPUT]:  TaskStore, selected sort key, user intents
[OUTPUT]: View state (focus, selection, input buffers, popups) and store mutations
[POS]:    TUI app state - the view layer's single owner of the store
[UPDATE]: When adding intents or view state
*/

use std::cell::Cell;
use std::rc::Rc;

use ratatui::crossterm::event::KeyCode;
use taskboard_store::{Priority, SortKey, StoreEvent, Task, TaskId, TaskStore};
use tracing::{debug, info};
use tui_input::Input;

use super::intent::Intent;
use super::log_buffer::LogBufferHandle;
use super::ui::components::picker::Picker;

/// Which part of the screen receives text keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The "Add a new task" input
    NewTask,
    /// The task table
    List,
}

#[derive(Debug, Clone)]
pub enum Popup {
    Priority(Picker<Priority>),
    Sort(Picker<SortKey>),
}

/// Text field of the task currently in edit mode.
#[derive(Debug, Clone)]
pub struct EditBuffer {
    task_id: TaskId,
    input: Input,
}

impl EditBuffer {
    fn new(task_id: TaskId, text: &str) -> Self {
        Self {
            task_id,
            input: Input::new(text.to_string()),
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn input(&self) -> &Input {
        &self.input
    }
}

pub struct AppState {
    store: TaskStore,
    sort_key: SortKey,
    new_task: Input,
    focus: Focus,
    selected: Option<TaskId>,
    editor: Option<EditBuffer>,
    popup: Option<Popup>,
    status_message: String,
    show_log_panel: bool,
    log_buffer: Option<LogBufferHandle>,
    dirty: Rc<Cell<bool>>,
    should_quit: bool,
}

impl AppState {
    pub fn new(mut store: TaskStore, sort_key: SortKey) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = dirty.clone();
        store.subscribe(move |event: &StoreEvent| {
            debug!(task_id = %event.task_id(), ?event, "store changed");
            flag.set(true);
        });

        Self {
            store,
            sort_key,
            new_task: Input::default(),
            focus: Focus::NewTask,
            selected: None,
            editor: None,
            popup: None,
            status_message: "Ready".to_string(),
            show_log_panel: false,
            log_buffer: None,
            dirty,
            should_quit: false,
        }
    }

    pub fn with_log_buffer(mut self, log_buffer: LogBufferHandle) -> Self {
        self.log_buffer = Some(log_buffer);
        self
    }

    pub fn with_log_panel(mut self, visible: bool) -> Self {
        self.show_log_panel = visible;
        self
    }

    /// Adds startup tasks without touching the input buffer.
    pub fn seed<S: AsRef<str>>(&mut self, texts: &[S]) {
        let mut added = 0;
        for text in texts {
            if self.store.add(text.as_ref()).is_some() {
                added += 1;
            }
        }
        if added > 0 {
            info!(count = added, "seeded tasks");
            self.select_index(0);
        }
    }

    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::EditNewTask(request) => {
                if self.new_task.handle(request).is_some() {
                    self.mark_dirty();
                }
            }
            Intent::SubmitNewTask => self.submit_new_task(),
            Intent::FocusInput => {
                self.focus = Focus::NewTask;
                self.mark_dirty();
            }
            Intent::FocusList => {
                self.focus = Focus::List;
                if self.selected_index().is_none() {
                    self.select_index(0);
                }
                self.mark_dirty();
            }
            Intent::MoveSelection(delta) => self.move_selection(delta),
            Intent::SelectFirst => self.select_index(0),
            Intent::SelectLast => self.select_index(usize::MAX),
            Intent::ToggleCompleted => {
                if let Some(id) = self.selected_task_id() {
                    self.store.toggle_completed(id);
                    if let Some(task) = self.store.get(id) {
                        info!(task_id = %id, completed = task.completed, "completion toggled");
                        self.status_message = if task.completed {
                            format!("completed {id}")
                        } else {
                            format!("reopened {id}")
                        };
                    }
                }
            }
            Intent::ToggleEditing => self.toggle_editing(),
            Intent::EditTask(request) => {
                let Some(editor) = self.editor.as_mut() else {
                    return;
                };
                match editor.input.handle(request) {
                    Some(changed) if changed.value => {
                        self.store.set_text(editor.task_id, editor.input.value());
                    }
                    // cursor-only moves redraw without touching the store
                    Some(_) => self.mark_dirty(),
                    None => {}
                }
            }
            Intent::RemoveSelected => self.remove_selected(),
            Intent::SetPriority(priority) => {
                if let Some(id) = self.selected_task_id() {
                    self.store.set_priority(id, priority);
                    info!(task_id = %id, priority = priority.level(), "priority changed");
                    self.status_message = format!("{id} priority {priority}");
                }
            }
            Intent::SetSort(sort_key) => {
                if self.sort_key != sort_key {
                    info!(sort = ?sort_key, "sort order changed");
                }
                self.sort_key = sort_key;
                self.status_message = format!("sorted by {sort_key}");
                self.mark_dirty();
            }
            Intent::OpenPriorityPicker => {
                if let Some(task) = self.selected_task() {
                    let picker = Picker::new("Priority", &Priority::ALL, task.priority);
                    self.popup = Some(Popup::Priority(picker));
                    self.mark_dirty();
                }
            }
            Intent::OpenSortPicker => {
                let picker = Picker::new("Sort by", &SortKey::ALL, self.sort_key);
                self.popup = Some(Popup::Sort(picker));
                self.mark_dirty();
            }
            Intent::PickerKey(key) => self.handle_picker_key(key),
            Intent::ClosePicker => {
                self.popup = None;
                self.mark_dirty();
            }
            Intent::ToggleLogPanel => {
                self.show_log_panel = !self.show_log_panel;
                self.mark_dirty();
            }
            Intent::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn new_task_input(&self) -> &Input {
        &self.new_task
    }

    pub fn editor(&self) -> Option<&EditBuffer> {
        self.editor.as_ref()
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn log_panel_visible(&self) -> bool {
        self.show_log_panel
    }

    pub fn log_buffer(&self) -> Option<&LogBufferHandle> {
        self.log_buffer.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Tasks in display order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.store.sorted(self.sort_key)
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.selected.filter(|id| self.store.get(*id).is_some())
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selected.and_then(|id| self.store.get(id))
    }

    /// Row of the selected task in the current display order.
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected?;
        self.visible_tasks().iter().position(|task| task.id == id)
    }

    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    fn submit_new_task(&mut self) {
        let Some(id) = self.store.add(self.new_task.value()) else {
            return;
        };
        info!(task_id = %id, "task added");
        self.new_task.reset();
        self.selected = Some(id);
        self.status_message = format!("added {id}");
    }

    fn toggle_editing(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if let Some(previous) = self.editor.take() {
            if previous.task_id != id {
                self.store.toggle_editing(previous.task_id);
            }
        }

        self.store.toggle_editing(id);
        if self.store.is_editing(id) {
            let text = self.store.get(id).map(|task| task.text.as_str()).unwrap_or_default();
            self.editor = Some(EditBuffer::new(id, text));
            self.status_message = format!("editing {id}");
        } else {
            info!(task_id = %id, "task text saved");
            self.status_message = format!("saved {id}");
        }
    }

    fn remove_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let index = self.selected_index().unwrap_or(0);
        if self.editor.as_ref().is_some_and(|editor| editor.task_id == id) {
            self.editor = None;
        }
        if self.store.remove(id) {
            info!(task_id = %id, "task removed");
            self.status_message = format!("removed {id}");
            self.select_index(index);
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let current = self.selected_index().unwrap_or(0) as isize;
        let next = (current + delta).max(0) as usize;
        self.select_index(next);
    }

    // Clamps to the last row; clears the selection when the list is empty.
    fn select_index(&mut self, index: usize) {
        let next = {
            let visible = self.visible_tasks();
            if visible.is_empty() {
                None
            } else {
                Some(visible[index.min(visible.len() - 1)].id)
            }
        };
        self.selected = next;
        self.mark_dirty();
    }

    fn handle_picker_key(&mut self, key: ratatui::crossterm::event::KeyEvent) {
        let Some(popup) = self.popup.take() else {
            return;
        };
        self.mark_dirty();
        if key.code == KeyCode::Esc {
            return;
        }

        match popup {
            Popup::Priority(mut picker) => match picker.handle_key(key) {
                Some(priority) => self.dispatch(Intent::SetPriority(priority)),
                None => self.popup = Some(Popup::Priority(picker)),
            },
            Popup::Sort(mut picker) => match picker.handle_key(key) {
                Some(sort_key) => self.dispatch(Intent::SetSort(sort_key)),
                None => self.popup = Some(Popup::Sort(picker)),
            },
        }
    }
}
