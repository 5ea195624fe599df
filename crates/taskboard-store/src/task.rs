/*
[INPUT]:  New-task text, id generator output, creation timestamps
[OUTPUT]: Durable task record, task id and priority types
[POS]:    Data layer - task model
[UPDATE]: When task fields or priority levels change
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskError};

/// Identifier of a live task, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Urgency level of a task. Ordered `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Numeric level as shown by the priority selector (1..=3).
    pub const fn level(self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Converts a raw selector level, rejecting anything outside 1..=3.
    pub fn from_level(level: i64) -> Result<Self> {
        match level {
            1 => Ok(Priority::Low),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::High),
            other => Err(TaskError::InvalidPriority(other)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<i64> for Priority {
    type Error = TaskError;

    fn try_from(level: i64) -> Result<Self> {
        Priority::from_level(level)
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "low" => Ok(Priority::Low),
            "2" | "medium" => Ok(Priority::Medium),
            "3" | "high" => Ok(Priority::High),
            _ => Err(TaskError::UnknownPriority(s.to_string())),
        }
    }
}

/// Durable task record.
///
/// Transient view state (the editing flag) is tracked separately by
/// [`crate::TaskStore`], so a `Task` only carries what the user entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    /// Creation time in unix milliseconds
    pub created_at_ms: i64,
}

impl Task {
    /// Builds a new task from user input, trimming the text.
    pub fn new(id: TaskId, text: &str, created_at_ms: i64) -> Result<Self> {
        let text = normalize_text(text)?;
        Ok(Self {
            id,
            text,
            completed: false,
            priority: Priority::default(),
            created_at_ms,
        })
    }

    pub fn created_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp_millis(self.created_at_ms)
    }
}

/// Trims task text and rejects blank input.
pub fn normalize_text(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TaskError::EmptyText);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_has_defaults() {
        let task = Task::new(TaskId::new(7), "  Buy milk ", 1_000).unwrap();
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.priority.level(), 1);
        assert_eq!(task.created_at_ms, 1_000);
    }

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(Task::new(TaskId::new(1), " \t\n", 0), Err(TaskError::EmptyText));
    }

    #[test]
    fn priority_ordering_matches_levels() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
        for priority in Priority::ALL {
            assert_eq!(Priority::from_level(priority.level() as i64), Ok(priority));
        }
    }

    #[test]
    fn priority_parses_names_and_levels() {
        assert_eq!("High".parse::<Priority>(), Ok(Priority::High));
        assert_eq!("2".parse::<Priority>(), Ok(Priority::Medium));
        assert!(matches!(
            "urgent".parse::<Priority>(),
            Err(TaskError::UnknownPriority(_))
        ));
    }

    #[test]
    fn created_at_converts_to_datetime() {
        let task = Task::new(TaskId::new(1), "x", 1_700_000_000_000).unwrap();
        let created = task.created_at().unwrap();
        assert_eq!(created.timestamp_millis(), 1_700_000_000_000);
    }
}
