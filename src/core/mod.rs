pub mod config;
pub mod errors;
pub mod ids;
pub mod logging;
pub mod seed;
pub mod store;
pub mod subtasks;

pub use config::BoardConfig;
pub use errors::{StoreError, StoreResult};
pub use store::Board;
