use crate::core::errors::{StoreError, StoreResult};
use crate::core::ids::fresh_id;
use crate::models::Subtask;

// Subtask changes never touch the board directly: each helper returns the
// complete new sequence, which the caller writes back as a `subtasks` patch.

pub fn toggled(subtasks: &[Subtask], subtask_id: &str) -> Option<Vec<Subtask>> {
    if !subtasks.iter().any(|s| s.id == subtask_id) {
        return None;
    }
    Some(
        subtasks
            .iter()
            .map(|s| {
                if s.id == subtask_id {
                    Subtask { done: !s.done, ..s.clone() }
                } else {
                    s.clone()
                }
            })
            .collect(),
    )
}

pub fn appended(subtasks: &[Subtask], title: &str) -> StoreResult<(Vec<Subtask>, String)> {
    if title.trim().is_empty() {
        return Err(StoreError::invalid("subtask title must not be blank"));
    }
    let id = fresh_id(|candidate| subtasks.iter().any(|s| s.id == candidate));
    let mut updated = subtasks.to_vec();
    updated.push(Subtask::new(id.clone(), title.to_string()));
    Ok((updated, id))
}

pub fn has_duplicate_ids(subtasks: &[Subtask]) -> bool {
    subtasks
        .iter()
        .enumerate()
        .any(|(i, s)| subtasks[..i].iter().any(|earlier| earlier.id == s.id))
}
