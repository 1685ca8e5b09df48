pub mod drag;
pub mod formatting;

pub use drag::{DragPayload, DropLocation, DropReport, MoveRequest};
pub use formatting::{deadline_label, format_time, parse_labels};
