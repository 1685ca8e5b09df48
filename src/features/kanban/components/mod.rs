pub mod add_task_form;
pub mod board;
pub mod column;
pub mod focus_timer;
pub mod subtask_list;
pub mod task_card;

pub use add_task_form::AddTaskForm;
pub use board::KanbanBoard;
pub use column::KanbanColumn;
pub use focus_timer::FocusTimer;
pub use subtask_list::SubtaskList;
pub use task_card::TaskCard;
