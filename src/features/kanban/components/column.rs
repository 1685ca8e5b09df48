use leptos::ev::DragEvent;
use leptos::prelude::*;
use crate::features::kanban::components::{AddTaskForm, TaskCard};
use crate::features::kanban::hooks::{use_board, BoardStore};
use crate::features::kanban::services::drag::read_payload;
use crate::models::{Column, ColumnId};

// Drops on the column body land at the end; drops on a card land in its slot
pub(crate) fn drop_into(store: BoardStore, ev: &DragEvent, column_id: ColumnId, index: usize) {
    let Some(payload) = read_payload(ev) else {
        return;
    };
    // Rejections are logged by the store
    if let Ok(Some(used)) = store.apply_drop(payload.dropped_at(column_id, index)) {
        log::debug!("card dropped into {} at {}", column_id, used);
    }
}

#[component]
pub fn KanbanColumn(column_id: ColumnId) -> impl IntoView {
    let store = use_board();
    let (drag_over, set_drag_over) = signal(false);

    let title = move || {
        store.with(|b| b.column(column_id).map(|c| c.title.clone()).unwrap_or_default())
    };
    let task_ids = move || store.task_ids(column_id);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        let end = store.with_untracked(|b| b.column(column_id).map(Column::len).unwrap_or(0));
        drop_into(store, &ev, column_id, end);
    };

    view! {
        <div
            class=format!("kanban-column column-{}", column_id.as_str())
            class:drag-over=move || drag_over.get()
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                set_drag_over.set(true);
            }
            on:dragleave=move |_| set_drag_over.set(false)
            on:drop=on_drop
        >
            <div class="column-header">
                <h2>{title}</h2>
                <span class="task-count">{move || task_ids().len()}</span>
            </div>
            <div class="column-content">
                <For
                    each=task_ids
                    key=|id| id.clone()
                    children=move |task_id: String| view! { <TaskCard task_id=task_id column_id=column_id /> }
                />
            </div>
            <AddTaskForm column_id=column_id />
        </div>
    }
}
