use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use crate::features::kanban::hooks::use_board;
use crate::models::Subtask;

#[component]
pub fn SubtaskList(task_id: String) -> impl IntoView {
    let store = use_board();
    let (new_subtask, set_new_subtask) = signal(String::new());

    let subtasks = {
        let id = task_id.clone();
        move || store.task(&id).map(|t| t.subtasks).unwrap_or_default()
    };

    let add_subtask = {
        let id = task_id.clone();
        Callback::new(move |()| {
            let title = new_subtask.get_untracked();
            if title.trim().is_empty() {
                return;
            }
            if store.add_subtask(&id, &title).is_ok() {
                set_new_subtask.set(String::new());
            }
        })
    };

    view! {
        <div class="subtasks">
            <For
                each=subtasks
                key=|s| (s.id.clone(), s.done)
                children={
                    let task_id = task_id.clone();
                    move |subtask: Subtask| {
                        let task_id = task_id.clone();
                        let subtask_id = subtask.id.clone();
                        view! {
                            <label class="subtask">
                                <input
                                    type="checkbox"
                                    prop:checked=subtask.done
                                    on:change=move |_| {
                                        if let Ok(done) = store.toggle_subtask(&task_id, &subtask_id) {
                                            log::debug!("subtask {} done={}", subtask_id, done);
                                        }
                                    }
                                />
                                <span class:done=subtask.done>{subtask.title}</span>
                            </label>
                        }
                    }
                }
            />
            <div class="subtask-add">
                <input
                    type="text"
                    placeholder="Add subtask..."
                    prop:value=move || new_subtask.get()
                    on:input=move |ev| set_new_subtask.set(event_target_value(&ev))
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" {
                            add_subtask.run(());
                        }
                    }
                />
                <button on:click=move |_| add_subtask.run(())>"+"</button>
            </div>
        </div>
    }
}
