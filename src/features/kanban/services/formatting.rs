use crate::models::Task;

// "coding, ui,,backend " -> ["coding", "ui", "backend"]
pub fn parse_labels(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

// Countdown display, minutes are not capped at 59
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

pub fn deadline_label(task: &Task) -> Option<String> {
    match task.deadline_date() {
        Some(date) => Some(format!("Due: {}", date.format("%b %-d, %Y"))),
        None => task
            .deadline
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(|d| format!("Due: {d}")),
    }
}
