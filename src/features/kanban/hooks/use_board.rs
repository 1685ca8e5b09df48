use leptos::prelude::*;

use crate::core::errors::{StoreError, StoreResult};
use crate::core::store::Board;
use crate::features::kanban::services::DropReport;
use crate::models::{ColumnId, Task, TaskDraft, TaskPatch};

/// The board as the views see it.
///
/// One instance is created by the app root and shared through context. Views
/// read snapshots through it and every change goes through its methods, each
/// of which applies a single `Board` operation inside one signal update.
#[derive(Clone, Copy)]
pub struct BoardStore {
    board: RwSignal<Board>,
}

impl BoardStore {
    pub fn new(board: Board) -> Self {
        Self {
            board: RwSignal::new(board),
        }
    }

    pub fn with<U>(&self, f: impl FnOnce(&Board) -> U) -> U {
        self.board.with(f)
    }

    pub fn with_untracked<U>(&self, f: impl FnOnce(&Board) -> U) -> U {
        self.board.with_untracked(f)
    }

    pub fn task(&self, task_id: &str) -> Option<Task> {
        self.board.with(|b| b.task(task_id).cloned())
    }

    pub fn task_ids(&self, column_id: ColumnId) -> Vec<String> {
        self.board
            .with(|b| b.column(column_id).map(|c| c.task_ids.clone()).unwrap_or_default())
    }

    pub fn position_of(&self, column_id: ColumnId, task_id: &str) -> Option<usize> {
        self.board
            .with_untracked(|b| b.column(column_id).ok().and_then(|c| c.position(task_id)))
    }

    // Subscribers are only notified when the operation actually changed the board
    fn mutate<T>(&self, op: &str, f: impl FnOnce(&mut Board) -> StoreResult<T>) -> StoreResult<T> {
        let result = self
            .board
            .try_maybe_update(|board| {
                let result = f(board);
                (result.is_ok(), result)
            })
            .unwrap_or_else(|| Err(StoreError::invalid("board store is no longer available")));

        if let Err(e) = &result {
            log::warn!("{} rejected: {}", op, e);
        }
        result
    }

    pub fn add_task(&self, column_id: ColumnId, draft: TaskDraft) -> StoreResult<String> {
        self.mutate("add_task", |b| b.add_task(column_id, draft))
    }

    pub fn move_task(
        &self,
        task_id: &str,
        source: ColumnId,
        dest: ColumnId,
        dest_index: usize,
    ) -> StoreResult<usize> {
        self.mutate("move_task", |b| b.move_task(task_id, source, dest, dest_index))
    }

    pub fn edit_task(&self, task_id: &str, new_title: &str) -> StoreResult<()> {
        self.mutate("edit_task", |b| b.edit_task(task_id, new_title))
    }

    pub fn edit_task_details(&self, task_id: &str, patch: TaskPatch) -> StoreResult<()> {
        self.mutate("edit_task_details", |b| b.edit_task_details(task_id, patch))
    }

    pub fn delete_task(&self, task_id: &str) -> StoreResult<Task> {
        self.mutate("delete_task", |b| b.delete_task(task_id))
    }

    pub fn toggle_subtask(&self, task_id: &str, subtask_id: &str) -> StoreResult<bool> {
        self.mutate("toggle_subtask", |b| b.toggle_subtask(task_id, subtask_id))
    }

    pub fn add_subtask(&self, task_id: &str, title: &str) -> StoreResult<String> {
        self.mutate("add_subtask", |b| b.add_subtask(task_id, title))
    }

    /// Applies a finished drag. Returns the final index, or `None` for a no-op drop.
    pub fn apply_drop(&self, report: DropReport) -> StoreResult<Option<usize>> {
        let request = match report.into_move() {
            Ok(Some(request)) => request,
            Ok(None) => return Ok(None),
            Err(e) => {
                log::warn!("drop rejected: {}", e);
                return Err(e);
            }
        };
        self.move_task(
            &request.task_id,
            request.source,
            request.dest,
            request.dest_index,
        )
        .map(Some)
    }
}

pub fn provide_board(board: Board) -> BoardStore {
    let store = BoardStore::new(board);
    provide_context(store);
    store
}

pub fn use_board() -> BoardStore {
    use_context::<BoardStore>().expect("BoardStore context")
}
