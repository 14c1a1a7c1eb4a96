//! Shell preference persistence through the host prefs store.

use platform_host::{load_pref_with, save_pref_with, PrefsStore};

use crate::model::ShellPreferences;

/// Prefs-store key holding [`ShellPreferences`] as JSON.
pub const SHELL_PREFS_KEY: &str = "deskshell.shell.prefs.v1";

/// Loads stored shell preferences, if any.
///
/// # Errors
///
/// Returns an error when the store fails or the stored JSON is malformed.
pub async fn load_shell_preferences(
    store: &dyn PrefsStore,
) -> Result<Option<ShellPreferences>, String> {
    load_pref_with(store, SHELL_PREFS_KEY).await
}

/// Writes shell preferences.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub async fn persist_shell_preferences(
    store: &dyn PrefsStore,
    preferences: &ShellPreferences,
) -> Result<(), String> {
    save_pref_with(store, SHELL_PREFS_KEY, preferences).await
}

/// Removes stored shell preferences.
///
/// # Errors
///
/// Returns an error when the store delete fails.
pub async fn clear_shell_preferences(store: &dyn PrefsStore) -> Result<(), String> {
    store.delete_pref(SHELL_PREFS_KEY).await
}
