//! Desktop shell UI composition: the panel surface, the start menu, and the taskbar.

pub(crate) mod a11y;
pub(crate) mod desktop;
mod menus;
mod taskbar;

use desktop_app_contract::{AppMountContext, ViewName};
use leptos::*;

use self::{menus::StartMenu, taskbar::ShellTaskbar};
use crate::runtime_context::{use_desktop_runtime, PanelSlot};

/// DOM id of the start-menu surface.
pub const START_MENU_ID: &str = "desktop-launcher-menu";

/// DOM id of the taskbar start button.
pub const START_BUTTON_ID: &str = "taskbar-start-button";

/// DOM id of the section hosting `view`.
pub fn panel_dom_id(view: &ViewName) -> String {
    format!("panel-{view}")
}

#[component]
fn PanelSurface(panel: PanelSlot) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let visible = panel.visible;
    let content = panel.module.mount(AppMountContext {
        view: panel.view.clone(),
        visible: visible.read_only(),
        services: runtime.app_services.get_value(),
    });

    view! {
        <section
            id=panel_dom_id(&panel.view)
            class="shell-panel"
            tabindex="-1"
            aria-label=panel.view.to_string()
            data-ui-kind="shell-panel"
            data-view=panel.view.to_string()
            data-placeholder=panel.placeholder.then_some("true")
            hidden=move || !visible.get()
            aria-hidden=move || (!visible.get()).to_string()
        >
            {content}
        </section>
    }
}

#[component]
/// Renders the full desktop shell UI.
///
/// Every registered panel is rendered once; the navigator decides which one is visible, so hidden
/// panels keep their in-memory state.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let panels = runtime.panels.get_value();

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            data-current-view=move || state.with(|state| state.current.as_ref().map(ViewName::to_string))
            data-overlay=move || if state.with(|state| state.overlay.is_open()) { "open" } else { "closed" }
        >
            <main class="shell-content" data-ui-slot="panels">
                {panels
                    .into_iter()
                    .map(|panel| view! { <PanelSurface panel=panel /> })
                    .collect_view()}
            </main>
            <StartMenu />
            <ShellTaskbar />
        </div>
    }
}
