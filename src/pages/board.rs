use leptos::prelude::*;
use crate::features::kanban::{use_board, KanbanBoard};
use crate::models::ColumnId;

#[component]
pub fn BoardPage() -> impl IntoView {
    let store = use_board();
    let summary = move || {
        store.with(|b| {
            let done = b.column(ColumnId::Done).map(|c| c.len()).unwrap_or(0);
            format!("{} of {} tasks done", done, b.task_count())
        })
    };

    view! {
        <header class="board-header">
            <h1>"🧠 NeuroZen Task Board"</h1>
            <span class="board-summary">{summary}</span>
        </header>
        <KanbanBoard />
    }
}
