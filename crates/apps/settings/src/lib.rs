//! Settings panel: taskbar clock format and a summary of host capabilities.
//!
//! Changes go through [`desktop_app_contract::SettingsService`], so the runtime owns the stored
//! preferences and the taskbar re-renders from the same signal this panel reads.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{AppMountContext, AppServices, ClockFormat};
use leptos::*;
use platform_host::HostCapabilities;
use system_ui::prelude::*;

/// One-line summary such as `3 of 5 host capabilities available`.
pub fn capability_summary(capabilities: &HostCapabilities) -> String {
    let rows = capabilities.rows();
    let available = rows.iter().filter(|(_, status)| status.is_available()).count();
    format!("{available} of {} host capabilities available", rows.len())
}

/// Example rendering of the clock for a format, shown beside the toggles.
pub fn clock_example(format: ClockFormat) -> &'static str {
    match (format.use_24_hour, format.show_seconds) {
        (true, true) => "13:45:30",
        (true, false) => "13:45",
        (false, true) => "01:45:30 PM",
        (false, false) => "01:45 PM",
    }
}

#[component]
/// Settings panel component.
pub fn SettingsApp(
    /// Injected runtime services.
    services: AppServices,
) -> impl IntoView {
    let settings = services.settings;
    let shell = services.shell;
    let clock = settings.clock_format();
    let capabilities = services.capabilities;

    let set_seconds = move |show_seconds: bool| {
        settings.set_clock_format(ClockFormat {
            show_seconds,
            ..clock.get_untracked()
        });
    };

    view! {
        <AppShell layout_class="app-settings-shell" aria_label="Settings">
            <ToolBar aria_label="Settings actions">
                <Button on_click=Callback::new(move |_| shell.go_home())>"Back"</Button>
                <Button
                    variant=ButtonVariant::Danger
                    on_click=Callback::new(move |_| settings.reset())
                >
                    "Reset Preferences"
                </Button>
            </ToolBar>

            <Stack padding=LayoutPadding::Md layout_class="settings-body">
                <h2 class="settings-title">"Settings"</h2>

                <section class="settings-section" aria-label="Taskbar clock">
                    <h3>"Taskbar clock"</h3>
                    <Cluster>
                        <label for="settings-clock-24h">"24-hour clock"</label>
                        <Switch
                            id="settings-clock-24h"
                            checked=Signal::derive(move || clock.get().use_24_hour)
                            on_toggle=Callback::new(move |_| settings.toggle_24_hour())
                        />
                    </Cluster>
                    <Cluster>
                        <label for="settings-clock-seconds">"Show seconds"</label>
                        <Switch
                            id="settings-clock-seconds"
                            checked=Signal::derive(move || clock.get().show_seconds)
                            on_toggle=Callback::new(set_seconds)
                        />
                    </Cluster>
                    <p class="settings-note">{move || format!("Example: {}", clock_example(clock.get()))}</p>
                </section>

                <section class="settings-section" aria-label="Host capabilities">
                    <h3>"Host capabilities"</h3>
                    <p class="settings-note">{capability_summary(&capabilities)}</p>
                    <Grid columns=2 role="table" aria_label="Capability status">
                        {capabilities
                            .rows()
                            .into_iter()
                            .map(|(label, status)| {
                                view! {
                                    <span role="cell">{label}</span>
                                    <span role="cell" data-status=status.label()>{status.label()}</span>
                                }
                            })
                            .collect_view()}
                    </Grid>
                </section>
            </Stack>
        </AppShell>
    }
}

/// Mounts the settings panel for the runtime app catalog.
pub fn mount(context: AppMountContext) -> View {
    view! { <SettingsApp services=context.services /> }.into_view()
}

#[cfg(test)]
mod tests {
    use platform_host::CapabilityStatus;

    use super::*;

    #[test]
    fn summary_counts_available_capabilities() {
        assert_eq!(
            capability_summary(&HostCapabilities::headless()),
            "2 of 5 host capabilities available"
        );
        assert_eq!(
            capability_summary(&HostCapabilities::browser(CapabilityStatus::Available)),
            "5 of 5 host capabilities available"
        );
    }

    #[test]
    fn clock_example_reflects_every_format() {
        let format = ClockFormat {
            use_24_hour: false,
            show_seconds: false,
        };
        assert_eq!(clock_example(format), "01:45 PM");
        assert_eq!(clock_example(ClockFormat::default()), "13:45:30");
    }
}
