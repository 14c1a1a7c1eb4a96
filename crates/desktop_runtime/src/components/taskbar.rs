use std::time::Duration;

use leptos::*;
use platform_host::local_clock_time_now;
use system_ui::{Taskbar, TaskbarSection};

use super::{START_BUTTON_ID, START_MENU_ID};
use crate::{clock::format_clock_time, reducer::ShellAction, runtime_context::use_desktop_runtime};

#[component]
pub(super) fn ShellTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_format = runtime.clock_format;
    let clock_now = create_rw_signal(local_clock_time_now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(local_clock_time_now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let current_label = move || {
        state.with(|state| state.current.clone()).and_then(|view| {
            runtime.navigator.with_value(|navigator| {
                navigator
                    .registry()
                    .entry(&view)
                    .map(|entry| entry.label.clone())
            })
        })
    };
    let clock_text = move || format_clock_time(clock_now.get(), clock_format.get());

    view! {
        <Taskbar layout_class="shell-taskbar" aria_label="Taskbar">
            <TaskbarSection ui_slot="start">
                <button
                    type="button"
                    id=START_BUTTON_ID
                    class="start-button"
                    aria-label="Open application launcher"
                    aria-haspopup="menu"
                    aria-controls=START_MENU_ID
                    aria-expanded=move || state.with(|state| state.overlay.is_open()).to_string()
                    on:click=move |_| runtime.dispatch_action(ShellAction::ToggleStartMenu)
                >
                    <span>"Start"</span>
                </button>
            </TaskbarSection>

            <TaskbarSection ui_slot="current-view">
                <span class="taskbar-current-view" aria-live="polite">
                    {current_label}
                </span>
            </TaskbarSection>

            <TaskbarSection ui_slot="clock">
                <time id="taskbar-clock" class="taskbar-clock" aria-label=clock_text>
                    {clock_text}
                </time>
            </TaskbarSection>
        </Taskbar>
    }
}
