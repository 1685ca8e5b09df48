use leptos::ev;
use leptos::prelude::*;
use crate::features::kanban::hooks::use_board;
use crate::features::kanban::services::parse_labels;
use crate::models::{ColumnId, TaskDraft};

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn AddTaskForm(column_id: ColumnId) -> impl IntoView {
    let store = use_board();
    let (is_adding, set_is_adding) = signal(false);
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (labels, set_labels) = signal(String::new());
    let (deadline, set_deadline) = signal(String::new());

    let reset = move || {
        set_title.set(String::new());
        set_description.set(String::new());
        set_labels.set(String::new());
        set_deadline.set(String::new());
        set_is_adding.set(false);
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let task_title = title.get_untracked();
        if task_title.trim().is_empty() {
            return;
        }

        let draft = TaskDraft {
            title: Some(task_title),
            description: non_empty(description.get_untracked()),
            labels: Some(parse_labels(&labels.get_untracked())),
            deadline: non_empty(deadline.get_untracked()),
        };
        if store.add_task(column_id, draft).is_ok() {
            reset();
        }
    };

    view! {
        {move || {
            if is_adding.get() {
                view! {
                    <form class="add-task-form" on:submit=handle_submit>
                        <input
                            type="text"
                            placeholder="Task Title"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            autofocus=true
                        />
                        <input
                            type="text"
                            placeholder="Description (optional)"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Labels (comma separated)"
                            prop:value=move || labels.get()
                            on:input=move |ev| set_labels.set(event_target_value(&ev))
                        />
                        <input
                            type="date"
                            prop:value=move || deadline.get()
                            on:input=move |ev| set_deadline.set(event_target_value(&ev))
                        />
                        <div class="form-actions">
                            <button type="submit" class="btn-primary">"✔ Add"</button>
                            <button type="button" class="btn-secondary" on:click=move |_| reset()>"✕ Cancel"</button>
                        </div>
                    </form>
                }
                    .into_any()
            } else {
                view! {
                    <button class="add-task-btn" on:click=move |_| set_is_adding.set(true)>"+ Add Task"</button>
                }
                    .into_any()
            }
        }}
    }
}
