use log::LevelFilter;

pub const DEFAULT_TASK_TITLE: &str = "New Task";
pub const DEFAULT_FOCUS_MINUTES: u32 = 25;

/// App-wide settings. There is no config file; the app root provides
/// `BoardConfig::default()` through context.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub default_task_title: String,
    pub focus_minutes: u32,
    pub log_level: LevelFilter,
}

impl BoardConfig {
    pub fn focus_seconds(&self) -> u32 {
        self.focus_minutes * 60
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_task_title: DEFAULT_TASK_TITLE.to_string(),
            focus_minutes: DEFAULT_FOCUS_MINUTES,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
