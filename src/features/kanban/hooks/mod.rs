pub mod use_board;

pub use use_board::{provide_board, use_board, BoardStore};
