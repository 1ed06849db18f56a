//! Structured error handling for the todo core.
//!
//! Every failure the lifecycle engine can produce is a typed variant here;
//! the web layer maps them to transport responses without the engine ever
//! swallowing or retrying anything.

use thiserror::Error;
use uuid::Uuid;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Failure taxonomy for task lifecycle operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TodoError {
    /// The requested task id does not exist.
    #[error("task {0} not found")]
    TaskNotFound(Uuid),

    /// The title collides with an existing task's title.
    #[error("a task titled '{0}' already exists")]
    DuplicateTask(String),

    /// Malformed input, caught before the engine runs.
    #[error("validation failed: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// Unclassified store failure. Logged and surfaced as an internal
    /// error; no partial-state recovery is attempted.
    #[error("storage error: {0}")]
    Storage(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;

impl From<sqlx::Error> for TodoError {
    fn from(err: sqlx::Error) -> Self {
        TodoError::Storage(err.to_string())
    }
}
