//! Single-window desktop shell runtime.
//!
//! A [`Navigator`] owns the [`ViewRegistry`] and guarantees that exactly one panel is mounted at a
//! time. Every user intent becomes a [`ShellAction`] handled by [`reduce_shell`]; side effects come
//! back as [`RuntimeEffect`] values executed by the host layer.

pub mod apps;
pub mod boot;
pub mod clock;
pub mod components;
pub mod effect_executor;
pub mod host;
pub mod model;
pub mod navigator;
pub mod persistence;
pub mod reducer;
pub mod registry;
pub mod runtime_context;

pub use boot::{deep_link_view, resolve_initial_view, BootView};
pub use clock::format_clock_time;
pub use components::DesktopShell;
pub use model::*;
pub use navigator::{Navigator, NavigatorError};
pub use persistence::{
    clear_shell_preferences, load_shell_preferences, persist_shell_preferences, SHELL_PREFS_KEY,
};
pub use reducer::{reduce_shell, RuntimeEffect, ShellAction};
pub use registry::{ViewEntry, ViewRegistry};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
