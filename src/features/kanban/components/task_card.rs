use leptos::ev::{DragEvent, KeyboardEvent};
use leptos::prelude::*;
use crate::core::config::BoardConfig;
use crate::features::kanban::components::column::drop_into;
use crate::features::kanban::components::{FocusTimer, SubtaskList};
use crate::features::kanban::hooks::use_board;
use crate::features::kanban::services::deadline_label;
use crate::features::kanban::services::drag::{write_payload, DragPayload};
use crate::models::ColumnId;

#[component]
pub fn TaskCard(task_id: String, column_id: ColumnId) -> impl IntoView {
    let store = use_board();
    let focus_seconds = use_context::<BoardConfig>().unwrap_or_default().focus_seconds();

    let task = {
        let id = task_id.clone();
        Memo::new(move |_| store.task(&id))
    };

    let (editing, set_editing) = signal(false);
    let (draft_title, set_draft_title) = signal(String::new());

    let start_edit = move || {
        let current = task.with_untracked(|t| t.as_ref().map(|t| t.title.clone()).unwrap_or_default());
        set_draft_title.set(current);
        set_editing.set(true);
    };

    // Blank titles keep the editor open
    let save_title = {
        let id = task_id.clone();
        Callback::new(move |()| {
            let title = draft_title.get_untracked();
            let title = title.trim();
            if title.is_empty() {
                return;
            }
            if store.edit_task(&id, title).is_ok() {
                set_editing.set(false);
            }
        })
    };

    let on_drag_start = {
        let id = task_id.clone();
        move |ev: DragEvent| {
            if let Some(index) = store.position_of(column_id, &id) {
                let payload = DragPayload {
                    task_id: id.clone(),
                    column_id,
                    index,
                };
                write_payload(&ev, &payload);
            }
        }
    };

    let on_drop = {
        let id = task_id.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            if let Some(index) = store.position_of(column_id, &id) {
                drop_into(store, &ev, column_id, index);
            }
        }
    };

    let on_delete = {
        let id = task_id.clone();
        move |_| {
            if let Ok(task) = store.delete_task(&id) {
                log::info!("deleted task {:?}", task.title);
            }
        }
    };

    let title = move || task.with(|t| t.as_ref().map(|t| t.title.clone()).unwrap_or_default());
    let description = move || task.with(|t| t.as_ref().and_then(|t| t.description.clone()));
    let labels = move || task.with(|t| t.as_ref().map(|t| t.labels.clone()).unwrap_or_default());
    let deadline = move || task.with(|t| t.as_ref().and_then(deadline_label));

    view! {
        <div
            class=format!("task-card card-{}", column_id.as_str())
            draggable="true"
            on:dragstart=on_drag_start
            on:dragover=|ev: DragEvent| ev.prevent_default()
            on:drop=on_drop
        >
            {move || {
                if editing.get() {
                    view! {
                        <input
                            type="text"
                            class="title-input"
                            prop:value=move || draft_title.get()
                            on:input=move |ev| set_draft_title.set(event_target_value(&ev))
                            on:blur=move |_| save_title.run(())
                            on:keydown=move |ev: KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    save_title.run(());
                                }
                            }
                            autofocus=true
                        />
                    }
                        .into_any()
                } else {
                    view! { <h3 class="task-title" on:click=move |_| start_edit()>{title}</h3> }
                        .into_any()
                }
            }}

            {move || description().map(|d| view! { <p class="task-description">{d}</p> })}

            <div class="task-labels">
                <For
                    each=move || labels().into_iter().enumerate()
                    key=|(i, label)| (*i, label.clone())
                    children=move |(_, label): (usize, String)| view! { <span class="task-label">{label}</span> }
                />
            </div>

            {move || deadline().map(|d| view! { <p class="task-deadline">{d}</p> })}

            <SubtaskList task_id=task_id.clone() />

            <div class="task-actions">
                <button class="task-action-btn edit-btn" title="Edit title" on:click=move |_| start_edit()>"✏️"</button>
                <button class="task-action-btn delete-btn" title="Delete task" on:click=on_delete>"🗑️"</button>
                <FocusTimer seconds=focus_seconds />
            </div>
        </div>
    }
}
