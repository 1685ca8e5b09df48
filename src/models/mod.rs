pub mod column;
pub mod task;

// Board data types shared by the store and the views
pub use column::{Column, ColumnId};
pub use task::{Subtask, Task, TaskDraft, TaskPatch};
