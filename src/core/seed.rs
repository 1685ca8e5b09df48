use crate::core::config::BoardConfig;
use crate::core::errors::StoreResult;
use crate::core::store::Board;
use crate::models::{ColumnId, Task};

/// The board the app starts with: four columns, two example tasks.
pub fn seeded_board(config: &BoardConfig) -> StoreResult<Board> {
    let mut board = Board::new(ColumnId::ALL.to_vec()).with_default_title(&config.default_task_title);

    let mut store_task = Task::new("1".into(), "Build Zustand Store".into());
    store_task.description = Some("Set up store for Kanban board".into());
    store_task.labels = vec!["coding".into()];
    store_task.deadline = Some("2025-08-20".into());
    board.insert_seed_task(ColumnId::ToDo, store_task)?;

    let mut tailwind_task = Task::new("2".into(), "Setup Tailwind".into());
    tailwind_task.labels = vec!["frontend".into()];
    tailwind_task.deadline = Some("2025-08-18".into());
    board.insert_seed_task(ColumnId::InProgress, tailwind_task)?;

    Ok(board)
}
