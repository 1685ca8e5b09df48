use leptos::prelude::*;
use crate::features::kanban::components::KanbanColumn;
use crate::features::kanban::hooks::use_board;
use crate::models::ColumnId;

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let store = use_board();
    let column_order = move || store.with(|b| b.column_order().to_vec());

    view! {
        <div class="kanban-board">
            <div class="status-boxes">
                <For
                    each=column_order
                    key=|id| *id
                    children=move |id: ColumnId| {
                        view! {
                            <div class=format!("status-box status-{}", id.as_str())>{id.title()}</div>
                        }
                    }
                />
            </div>
            <div class="kanban-columns">
                <For
                    each=column_order
                    key=|id| *id
                    children=move |id: ColumnId| view! { <KanbanColumn column_id=id /> }
                />
            </div>
        </div>
    }
}
