//! Desktop panel: launcher icons for the built-in panels.

use desktop_app_contract::{AppMountContext, ViewName};
use leptos::*;
use system_ui::{DesktopIconButton, DesktopIconGrid};

use crate::{apps, model::NavigationCommand, runtime_context::use_desktop_runtime};

#[derive(Debug, Clone)]
struct DesktopLauncher {
    label: &'static str,
    glyph: &'static str,
    command: NavigationCommand,
}

fn registered_launchers() -> Vec<DesktopLauncher> {
    let runtime = use_desktop_runtime();
    runtime.navigator.with_value(|navigator| {
        apps::desktop_launchers()
            .filter_map(|app| {
                let entry = navigator.registry().entry(&ViewName::trusted(app.view))?;
                Some(DesktopLauncher {
                    label: app.label,
                    glyph: app.glyph,
                    command: entry.command.clone(),
                })
            })
            .collect()
    })
}

#[component]
fn DesktopPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <DesktopIconGrid layout_class="desktop-launchers">
            {registered_launchers()
                .into_iter()
                .map(|launcher| {
                    let command = launcher.command;
                    let icon_id = format!("desktop-icon-{}", command.target());
                    view! {
                        <DesktopIconButton
                            id=icon_id
                            aria_label=format!("Open {}", launcher.label)
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(command.navigate_action());
                            })
                        >
                            <span class="desktop-icon-glyph" aria-hidden="true">{launcher.glyph}</span>
                            <span class="desktop-icon-label">{launcher.label}</span>
                        </DesktopIconButton>
                    }
                })
                .collect_view()}
        </DesktopIconGrid>
    }
}

/// Mounts the desktop panel.
pub fn mount_desktop(_context: AppMountContext) -> View {
    view! { <DesktopPanel /> }.into_view()
}
