use leptos::prelude::*;
use crate::core::config::BoardConfig;
use crate::core::seed::seeded_board;
use crate::core::store::Board;
use crate::features::kanban::provide_board;
use crate::pages::BoardPage;

#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::default();

    let board = match seeded_board(&config) {
        Ok(board) => board,
        Err(e) => {
            log::error!("failed to seed board, starting empty: {}", e);
            Board::default().with_default_title(&config.default_task_title)
        }
    };
    provide_context(config);
    provide_board(board);

    view! {
        <main class="app">
            <BoardPage />
        </main>
    }
}
