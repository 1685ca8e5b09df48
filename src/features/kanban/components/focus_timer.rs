use gloo_timers::callback::Interval;
use leptos::prelude::*;
use crate::features::kanban::services::format_time;

const TICK_MS: u32 = 1_000;

// Per-card countdown. Lives entirely in the view and never touches the board.
#[component]
pub fn FocusTimer(seconds: u32) -> impl IntoView {
    let (time_left, set_time_left) = signal(seconds);
    let (running, set_running) = signal(false);
    let ticker: StoredValue<Option<Interval>, LocalStorage> = StoredValue::new_local(None);

    // Dropping the Interval cancels it
    Effect::new(move |_| {
        if running.get() {
            let interval = Interval::new(TICK_MS, move || {
                set_time_left.update(|t| *t = t.saturating_sub(1));
            });
            ticker.set_value(Some(interval));
        } else {
            ticker.set_value(None);
        }
    });

    Effect::new(move |_| {
        if time_left.get() == 0 && running.get_untracked() {
            set_running.set(false);
        }
    });

    on_cleanup(move || ticker.set_value(None));

    let toggle = move |_| {
        if time_left.get_untracked() > 0 {
            set_running.update(|r| *r = !*r);
        }
    };

    view! {
        <button class="focus-timer" class:running=move || running.get() on:click=toggle>
            {move || if running.get() { "⏸️" } else { "⏱️" }}
            " "
            {move || format_time(time_left.get())}
        </button>
    }
}
