use leptos::prelude::*;
use neurozen_board::app::App;
use neurozen_board::core::config::BoardConfig;
use neurozen_board::core::logging::init_logging;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = init_logging(BoardConfig::default().log_level) {
        web_sys::console::error_1(&e.into());
    }

    mount_to_body(App);
}
