/*
[INPUT]:  Raw values crossing into the store (selector levels, config strings, new-task text)
[OUTPUT]: Structured error type for boundary validation
[POS]:    Error handling layer - store crate
[UPDATE]: When adding new boundary parsers or validation rules
*/

use thiserror::Error;

/// Validation errors raised at the edges of the task store.
///
/// Store mutations themselves are total; these only surface when a raw value
/// has to be turned into a typed one first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Task text was empty after trimming
    #[error("task text cannot be empty")]
    EmptyText,

    /// Priority level outside of 1..=3
    #[error("invalid priority level {0}, expected 1 (low), 2 (medium) or 3 (high)")]
    InvalidPriority(i64),

    /// Priority name not recognised
    #[error("unknown priority: {0}")]
    UnknownPriority(String),

    /// Sort key name not recognised
    #[error("unknown sort key: {0}, expected created_at or priority")]
    UnknownSortKey(String),
}

pub type Result<T> = std::result::Result<T, TaskError>;
