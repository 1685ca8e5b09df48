use thiserror::Error;

/// Reasons a board operation declined to change anything.
///
/// Every variant is recoverable; the board is left exactly as it was.
/// Out-of-range drop indices are not errors, they are clamped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Subtask {subtask_id} not found on task {task_id}")]
    SubtaskNotFound { task_id: String, subtask_id: String },

    #[error("Task {task_id} is not in column {column_id}")]
    NotInColumn { task_id: String, column_id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl StoreError {
    pub fn task_not_found(id: impl Into<String>) -> Self {
        StoreError::TaskNotFound(id.into())
    }

    pub fn column_not_found(id: impl Into<String>) -> Self {
        StoreError::ColumnNotFound(id.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        StoreError::InvalidInput(msg.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
