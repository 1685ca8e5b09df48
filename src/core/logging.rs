//! Console logging backend for the `log` facade.
//!
//! On wasm32 records go to the matching `console.*` method so they show up
//! with the right severity in browser devtools. Native builds (tests, tooling)
//! write to stderr instead, since `web_sys` console bindings cannot run there.

use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{line}");
}

/// Installs the console logger at `level`.
///
/// Safe to call more than once: later calls only adjust the max level.
pub fn init_logging(level: LevelFilter) -> Result<(), String> {
    if let Err(err) = log::set_logger(&LOGGER) {
        // Someone already installed a logger; keep theirs unless it is ours
        if !std::ptr::addr_eq(log::logger() as *const dyn Log, &LOGGER as *const ConsoleLogger) {
            return Err(format!("a different logger is already installed: {err}"));
        }
    }
    log::set_max_level(level);
    log::info!("event=logging_init level={}", level);
    Ok(())
}
