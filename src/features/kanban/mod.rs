pub mod components;
pub mod services;
pub mod hooks;

pub use components::KanbanBoard;
pub use hooks::{provide_board, use_board, BoardStore};
