//! Host-side runtime helpers for executing reducer effects.
//!
//! Reducer effects arrive here after the effect executor drains its queue. Storage and notices go
//! through the injected [`HostServices`]; focus requests touch the DOM directly.

use std::rc::Rc;

use leptos::{logging, spawn_local, SignalGetUntracked};
use platform_host::{HostServices, NoticeLevel, PrefsStore};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    components::{a11y, panel_dom_id, START_MENU_ID},
    persistence,
    reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl DesktopHostContext {
    /// Wraps the bundle assembled by the entry layer.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured preference store.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.services.prefs.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Shows an error notice without blocking the caller.
    pub fn notify_error(&self, title: &str, body: &str) {
        let notices = self.services.notices.clone();
        let (title, body) = (title.to_string(), body.to_string());
        spawn_local(async move {
            if let Err(err) = notices.show_notice(NoticeLevel::Error, &title, &body).await {
                logging::warn!("notice dispatch failed: {err}");
            }
        });
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusPanel(view) => focus_after_render(panel_dom_id(&view)),
            RuntimeEffect::FocusStartMenu => focus_start_menu(),
            RuntimeEffect::PersistPreferences => self.persist_preferences(runtime),
            RuntimeEffect::ClearPreferences => self.clear_preferences(),
        }
    }

    fn persist_preferences(&self, runtime: DesktopRuntimeContext) {
        let preferences = runtime.preferences.get_untracked();
        let store = self.prefs_store();
        spawn_local(async move {
            if let Err(err) =
                persistence::persist_shell_preferences(store.as_ref(), &preferences).await
            {
                logging::warn!("persist shell preferences failed: {err}");
            }
        });
    }

    fn clear_preferences(&self) {
        let store = self.prefs_store();
        spawn_local(async move {
            if let Err(err) = persistence::clear_shell_preferences(store.as_ref()).await {
                logging::warn!("clear shell preferences failed: {err}");
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn defer(task: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(task);
    let _ =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
}

#[cfg(not(target_arch = "wasm32"))]
fn defer(task: impl FnOnce() + 'static) {
    drop(task);
}

fn focus_after_render(element_id: String) {
    defer(move || {
        if !a11y::focus_element_by_id(&element_id) {
            logging::warn!("focus target `{element_id}` not found");
        }
    });
}

fn focus_start_menu() {
    defer(|| {
        a11y::focus_first_menu_item(START_MENU_ID);
    });
}
