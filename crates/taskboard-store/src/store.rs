/*
[INPUT]:  User intents (add, edit, toggle, remove, reprioritize) keyed by task id
[OUTPUT]: Mutated in-memory task collection and change notifications
[POS]:    Task list store - single owner of task state
[UPDATE]: When adding store operations or changing edit-commit rules
*/

use std::collections::HashMap;

use tracing::debug;

use crate::clock::{Clock, IdGenerator, SystemClock};
use crate::error::Result;
use crate::observer::{StoreEvent, SubscriptionId, Subscribers};
use crate::sort::{SortKey, sorted_view};
use crate::task::{Priority, Task, TaskId, normalize_text};

/// Transient state of a task whose text field is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Text the task had when editing began, restored if the edit ends blank
    pub original_text: String,
}

/// In-memory task collection.
///
/// `tasks` keeps insertion order; display order is always derived through
/// [`TaskStore::sorted`]. Every operation is total: unknown ids are ignored
/// and reported through the `bool` return value.
pub struct TaskStore {
    tasks: Vec<Task>,
    editing: HashMap<TaskId, EditSession>,
    ids: IdGenerator,
    clock: Box<dyn Clock>,
    last_created_ms: Option<i64>,
    subscribers: Subscribers,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            tasks: Vec::new(),
            editing: HashMap::new(),
            ids: IdGenerator::new(),
            clock: Box::new(clock),
            last_created_ms: None,
            subscribers: Subscribers::default(),
        }
    }

    /// Trims `text` and appends a new task. Blank input is dropped silently.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = match normalize_text(text) {
            Ok(text) => text,
            Err(err) => {
                debug!(error = %err, "ignoring new task");
                return None;
            }
        };

        let id = self.ids.next_id();
        let created_at_ms = self.next_created_at();
        self.tasks.push(Task {
            id,
            text,
            completed: false,
            priority: Priority::default(),
            created_at_ms,
        });
        debug!(task_id = %id, created_at_ms, "task added");
        self.subscribers.notify(StoreEvent::Added(id));
        Some(id)
    }

    pub fn remove(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.tasks.remove(index);
        self.editing.remove(&id);
        debug!(task_id = %id, "task removed");
        self.subscribers.notify(StoreEvent::Removed(id));
        true
    }

    /// Replaces the text verbatim. Intermediate edit values, including the
    /// empty string, are accepted as-is.
    pub fn set_text(&mut self, id: TaskId, text: &str) -> bool {
        let Some(task) = self.task_mut(id) else {
            return false;
        };
        task.text = text.to_string();
        self.subscribers.notify(StoreEvent::Updated(id));
        true
    }

    /// Enters or leaves edit mode.
    ///
    /// Leaving commits the text trimmed; if nothing but whitespace is left the
    /// text from before the edit is restored.
    pub fn toggle_editing(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        match self.editing.remove(&id) {
            Some(session) => {
                let task = &mut self.tasks[index];
                task.text = normalize_text(&task.text).unwrap_or(session.original_text);
                debug!(task_id = %id, "edit committed");
            }
            None => {
                let original_text = self.tasks[index].text.clone();
                self.editing.insert(id, EditSession { original_text });
                debug!(task_id = %id, "edit started");
            }
        }
        self.subscribers.notify(StoreEvent::EditingChanged(id));
        true
    }

    pub fn toggle_completed(&mut self, id: TaskId) -> bool {
        let Some(task) = self.task_mut(id) else {
            return false;
        };
        task.completed = !task.completed;
        debug!(task_id = %id, completed = task.completed, "completion toggled");
        self.subscribers.notify(StoreEvent::Updated(id));
        true
    }

    pub fn set_priority(&mut self, id: TaskId, priority: Priority) -> bool {
        let Some(task) = self.task_mut(id) else {
            return false;
        };
        task.priority = priority;
        debug!(task_id = %id, priority = priority.level(), "priority set");
        self.subscribers.notify(StoreEvent::Updated(id));
        true
    }

    /// Sets the priority from a raw selector level.
    ///
    /// Levels outside 1..=3 are rejected and the stored priority is left
    /// untouched.
    pub fn set_priority_level(&mut self, id: TaskId, level: i64) -> Result<bool> {
        let priority = Priority::from_level(level)?;
        Ok(self.set_priority(id, priority))
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn sorted(&self, key: SortKey) -> Vec<&Task> {
        sorted_view(&self.tasks, key)
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.editing.contains_key(&id)
    }

    pub fn edit_session(&self, id: TaskId) -> Option<&EditSession> {
        self.editing.get(&id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.subscribers.add(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    // Keeps creation stamps strictly increasing so recency order is total.
    fn next_created_at(&mut self) -> i64 {
        let now = self.clock.now_millis();
        let stamp = match self.last_created_ms {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last_created_ms = Some(stamp);
        stamp
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("editing", &self.editing)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}
