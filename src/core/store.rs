use std::collections::BTreeMap;

use thiserror::Error;

use crate::core::config::DEFAULT_TASK_TITLE;
use crate::core::errors::{StoreError, StoreResult};
use crate::core::ids::fresh_id;
use crate::core::subtasks;
use crate::models::{Column, ColumnId, Task, TaskDraft, TaskPatch};

/// A broken board invariant, as reported by [`Board::check_integrity`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityViolation {
    #[error("column {column} references missing task {task_id}")]
    DanglingTaskId { column: ColumnId, task_id: String },

    #[error("task {task_id} is listed more than once across columns")]
    MultipleOwners { task_id: String },

    #[error("task stored under key {key} carries id {task_id}")]
    KeyMismatch { key: String, task_id: String },

    #[error("task {task_id} has duplicate subtask ids")]
    DuplicateSubtaskIds { task_id: String },

    #[error("column {0} is in the display order but not on the board")]
    MissingColumn(ColumnId),
}

/// The task/column store.
///
/// Owns the task mapping, the column mapping and the column display order.
/// Every mutation validates before it writes, so an `Err` always means the
/// board is untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    tasks: BTreeMap<String, Task>,
    columns: BTreeMap<ColumnId, Column>,
    column_order: Vec<ColumnId>,
    default_title: String,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(ColumnId::ALL.to_vec())
    }
}

impl Board {
    /// Empty board with one column per id, displayed in the given order.
    pub fn new(column_order: Vec<ColumnId>) -> Self {
        let mut column_order = column_order;
        let mut seen = Vec::with_capacity(column_order.len());
        column_order.retain(|id| {
            let fresh = !seen.contains(id);
            seen.push(*id);
            fresh
        });

        let columns = column_order.iter().map(|id| (*id, Column::new(*id))).collect();
        Self {
            tasks: BTreeMap::new(),
            columns,
            column_order,
            default_title: DEFAULT_TASK_TITLE.to_string(),
        }
    }

    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    // Used by the seed to place tasks with known ids
    pub(crate) fn insert_seed_task(&mut self, column_id: ColumnId, task: Task) -> StoreResult<()> {
        if self.tasks.contains_key(&task.id) {
            return Err(StoreError::invalid(format!("duplicate task id {}", task.id)));
        }
        let column = self.column_mut(column_id)?;
        column.task_ids.push(task.id.clone());
        self.tasks.insert(task.id.clone(), task);
        Ok(())
    }

    // ---- queries ----

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    pub fn tasks(&self) -> &BTreeMap<String, Task> {
        &self.tasks
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn column(&self, column_id: ColumnId) -> StoreResult<&Column> {
        self.columns
            .get(&column_id)
            .ok_or_else(|| StoreError::column_not_found(column_id.as_str()))
    }

    fn column_mut(&mut self, column_id: ColumnId) -> StoreResult<&mut Column> {
        self.columns
            .get_mut(&column_id)
            .ok_or_else(|| StoreError::column_not_found(column_id.as_str()))
    }

    pub fn column_order(&self) -> &[ColumnId] {
        &self.column_order
    }

    /// Columns in display order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.column_order.iter().filter_map(|id| self.columns.get(id))
    }

    pub fn tasks_in(&self, column_id: ColumnId) -> StoreResult<Vec<&Task>> {
        let column = self.column(column_id)?;
        Ok(column.task_ids.iter().filter_map(|id| self.tasks.get(id)).collect())
    }

    pub fn column_of(&self, task_id: &str) -> Option<ColumnId> {
        self.columns().find(|c| c.contains(task_id)).map(|c| c.id)
    }

    /// Total number of task ids placed across all columns.
    pub fn placed_count(&self) -> usize {
        self.columns.values().map(Column::len).sum()
    }

    // ---- operations ----

    /// Creates a task from `draft` and appends it to the end of `column_id`.
    pub fn add_task(&mut self, column_id: ColumnId, draft: TaskDraft) -> StoreResult<String> {
        self.column(column_id)?;

        let id = fresh_id(|candidate| self.tasks.contains_key(candidate));
        let title = draft
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| self.default_title.clone());

        let mut task = Task::new(id.clone(), title);
        task.description = draft.description;
        task.labels = draft.labels.unwrap_or_default();
        task.deadline = draft.deadline;

        self.column_mut(column_id)?.task_ids.push(id.clone());
        self.tasks.insert(id.clone(), task);

        log::debug!("event=task_added task_id={} column={}", id, column_id);
        self.debug_check();
        Ok(id)
    }

    /// Moves `task_id` out of `source` and into `dest` at `dest_index`.
    ///
    /// The index is clamped to the destination length after removal; the
    /// position actually used is returned. Within one column the removal and
    /// insertion apply to the same sequence, so a same-slot move is a no-op.
    pub fn move_task(
        &mut self,
        task_id: &str,
        source: ColumnId,
        dest: ColumnId,
        dest_index: usize,
    ) -> StoreResult<usize> {
        if !self.tasks.contains_key(task_id) {
            return Err(StoreError::task_not_found(task_id));
        }
        self.column(dest)?;
        let from = self
            .column(source)?
            .position(task_id)
            .ok_or_else(|| StoreError::NotInColumn {
                task_id: task_id.to_string(),
                column_id: source.as_str().to_string(),
            })?;

        let removed = self.column_mut(source)?.task_ids.remove(from);

        let target = self.column_mut(dest)?;
        let index = dest_index.min(target.len());
        if index != dest_index {
            log::debug!(
                "event=move_index_clamped task_id={} requested={} used={}",
                task_id,
                dest_index,
                index
            );
        }
        target.task_ids.insert(index, removed);

        log::debug!(
            "event=task_moved task_id={} from={}[{}] to={}[{}]",
            task_id,
            source,
            from,
            dest,
            index
        );
        self.debug_check();
        Ok(index)
    }

    /// Replaces the title verbatim. Blank titles are rejected.
    pub fn edit_task(&mut self, task_id: &str, new_title: &str) -> StoreResult<()> {
        let task = self
            .tasks
            .get_mut(task_id)
            .ok_or_else(|| StoreError::task_not_found(task_id))?;
        if new_title.trim().is_empty() {
            return Err(StoreError::invalid("task title must not be blank"));
        }
        task.title = new_title.to_string();

        log::debug!("event=task_renamed task_id={}", task_id);
        self.debug_check();
        Ok(())
    }

    /// Shallow-merges `patch` onto the task. See [`TaskPatch`].
    pub fn edit_task_details(&mut self, task_id: &str, patch: TaskPatch) -> StoreResult<()> {
        if !self.tasks.contains_key(task_id) {
            return Err(StoreError::task_not_found(task_id));
        }
        if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(StoreError::invalid("task title must not be blank"));
        }
        if patch.subtasks.as_deref().is_some_and(subtasks::has_duplicate_ids) {
            return Err(StoreError::invalid("subtask ids must be unique"));
        }

        if let Some(task) = self.tasks.get_mut(task_id) {
            task.apply(patch);
        }

        log::debug!("event=task_patched task_id={}", task_id);
        self.debug_check();
        Ok(())
    }

    /// Removes the task and scrubs its id from every column.
    pub fn delete_task(&mut self, task_id: &str) -> StoreResult<Task> {
        let removed = self.tasks.remove(task_id);
        for column in self.columns.values_mut() {
            column.task_ids.retain(|id| id != task_id);
        }

        match removed {
            Some(task) => {
                log::debug!("event=task_deleted task_id={}", task_id);
                self.debug_check();
                Ok(task)
            }
            None => Err(StoreError::task_not_found(task_id)),
        }
    }

    /// Flips `done` on one subtask and returns its new value.
    pub fn toggle_subtask(&mut self, task_id: &str, subtask_id: &str) -> StoreResult<bool> {
        let task = self
            .task(task_id)
            .ok_or_else(|| StoreError::task_not_found(task_id))?;
        let updated = subtasks::toggled(&task.subtasks, subtask_id).ok_or_else(|| {
            StoreError::SubtaskNotFound {
                task_id: task_id.to_string(),
                subtask_id: subtask_id.to_string(),
            }
        })?;
        let done = updated.iter().any(|s| s.id == subtask_id && s.done);

        self.edit_task_details(task_id, TaskPatch::new().subtasks(updated))?;
        Ok(done)
    }

    /// Appends an unfinished subtask and returns its id.
    pub fn add_subtask(&mut self, task_id: &str, title: &str) -> StoreResult<String> {
        let task = self
            .task(task_id)
            .ok_or_else(|| StoreError::task_not_found(task_id))?;
        let (updated, subtask_id) = subtasks::appended(&task.subtasks, title)?;

        self.edit_task_details(task_id, TaskPatch::new().subtasks(updated))?;
        Ok(subtask_id)
    }

    // ---- invariants ----

    /// Checks every board invariant and reports the first one broken.
    pub fn check_integrity(&self) -> Result<(), IntegrityViolation> {
        for id in &self.column_order {
            if !self.columns.contains_key(id) {
                return Err(IntegrityViolation::MissingColumn(*id));
            }
        }

        for (key, task) in &self.tasks {
            if *key != task.id {
                return Err(IntegrityViolation::KeyMismatch {
                    key: key.clone(),
                    task_id: task.id.clone(),
                });
            }
            if subtasks::has_duplicate_ids(&task.subtasks) {
                return Err(IntegrityViolation::DuplicateSubtaskIds {
                    task_id: task.id.clone(),
                });
            }
        }

        let mut placed: Vec<&str> = Vec::with_capacity(self.placed_count());
        for column in self.columns.values() {
            for task_id in &column.task_ids {
                if !self.tasks.contains_key(task_id) {
                    return Err(IntegrityViolation::DanglingTaskId {
                        column: column.id,
                        task_id: task_id.clone(),
                    });
                }
                placed.push(task_id);
            }
        }
        placed.sort_unstable();
        if let Some(pair) = placed.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(IntegrityViolation::MultipleOwners {
                task_id: pair[0].to_string(),
            });
        }

        Ok(())
    }

    fn debug_check(&self) {
        debug_assert_eq!(self.check_integrity(), Ok(()));
    }
}
