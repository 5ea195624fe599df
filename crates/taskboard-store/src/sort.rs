/*
[INPUT]:  Canonical insertion-ordered tasks and the selected sort key
[OUTPUT]: Derived display order (descending, stable)
[POS]:    Pure projection used by the view layer
[UPDATE]: When adding sort keys or changing tie-breaking
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskError};
use crate::task::Task;

/// Field used to derive display order. Both keys sort descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Most recently created first
    #[default]
    CreatedAt,
    /// Highest priority first
    Priority,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::CreatedAt, SortKey::Priority];

    pub const fn label(self) -> &'static str {
        match self {
            SortKey::CreatedAt => "Time Created",
            SortKey::Priority => "Priority",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKey {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "created" | "created_at" | "createdat" | "time" => Ok(SortKey::CreatedAt),
            "priority" => Ok(SortKey::Priority),
            _ => Err(TaskError::UnknownSortKey(s.to_string())),
        }
    }
}

/// Returns the tasks ordered by `key`, descending.
///
/// `slice::sort_by` is stable, so tasks with equal keys keep their canonical
/// relative order. The input slice is never reordered.
pub fn sorted_view(tasks: &[Task], key: SortKey) -> Vec<&Task> {
    let mut view: Vec<&Task> = tasks.iter().collect();
    match key {
        SortKey::CreatedAt => view.sort_by(|a, b| b.created_at_ms.cmp(&a.created_at_ms)),
        SortKey::Priority => view.sort_by(|a, b| b.priority.cmp(&a.priority)),
    }
    view
}
