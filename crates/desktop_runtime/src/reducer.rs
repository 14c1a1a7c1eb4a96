//! Shell actions, side-effect intents, and the transition function that applies them.

use desktop_app_contract::{ClockFormat, Panel, ViewName};

use crate::{
    model::ShellPreferences,
    navigator::{Navigator, NavigatorError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_shell`].
pub enum ShellAction {
    /// Show a view from a desktop icon, a back button, or boot.
    Navigate {
        /// Destination view.
        view: ViewName,
    },
    /// Open or close the start menu.
    ToggleStartMenu,
    /// Pick an entry from the open start menu.
    SelectStartMenuEntry {
        /// Destination view.
        view: ViewName,
    },
    /// Change the taskbar clock format.
    SetClockFormat {
        /// New format.
        format: ClockFormat,
    },
    /// Replace preferences with values loaded at boot.
    HydratePreferences {
        /// Loaded preferences.
        preferences: ShellPreferences,
    },
    /// Restore default preferences and drop the persisted copy.
    ResetPreferences,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side effects emitted by [`reduce_shell`] and run by the effect executor.
pub enum RuntimeEffect {
    /// Move keyboard focus into the panel that was just shown.
    FocusPanel(ViewName),
    /// Move keyboard focus to the first start-menu item.
    FocusStartMenu,
    /// Write current preferences to the prefs store.
    PersistPreferences,
    /// Remove stored preferences.
    ClearPreferences,
}

/// Applies `action`, returning the effects the host layer must run.
///
/// # Errors
///
/// Returns [`NavigatorError::UnknownView`] for navigation to an unregistered view and
/// [`NavigatorError::StaleMenuSelection`] for a menu pick while the menu is closed. State is left
/// untouched on error.
pub fn reduce_shell<P: Panel>(
    navigator: &mut Navigator<P>,
    preferences: &mut ShellPreferences,
    action: ShellAction,
) -> Result<Vec<RuntimeEffect>, NavigatorError> {
    let mut effects = Vec::new();
    match action {
        ShellAction::Navigate { view } => {
            navigate(navigator, view, &mut effects)?;
        }
        ShellAction::SelectStartMenuEntry { view } => {
            if !navigator.overlay().is_open() {
                return Err(NavigatorError::StaleMenuSelection(view));
            }
            navigate(navigator, view, &mut effects)?;
        }
        ShellAction::ToggleStartMenu => {
            if navigator.toggle_overlay().is_open() {
                effects.push(RuntimeEffect::FocusStartMenu);
            }
        }
        ShellAction::SetClockFormat { format } => {
            if preferences.clock != format {
                preferences.clock = format;
                effects.push(RuntimeEffect::PersistPreferences);
            }
        }
        ShellAction::HydratePreferences {
            preferences: loaded,
        } => {
            *preferences = loaded;
        }
        ShellAction::ResetPreferences => {
            *preferences = ShellPreferences::default();
            effects.push(RuntimeEffect::ClearPreferences);
        }
    }
    Ok(effects)
}

fn navigate<P: Panel>(
    navigator: &mut Navigator<P>,
    view: ViewName,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), NavigatorError> {
    navigator.show(&view)?;
    effects.push(RuntimeEffect::FocusPanel(view));
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::OverlayMenuState, registry::ViewRegistry};

    #[derive(Debug, Default)]
    struct FlagPanel(Cell<bool>);

    impl Panel for FlagPanel {
        fn mount(&self) {
            self.0.set(true);
        }

        fn unmount(&self) {
            self.0.set(false);
        }

        fn is_mounted(&self) -> bool {
            self.0.get()
        }
    }

    fn view(name: &str) -> ViewName {
        ViewName::new(name).expect("valid view name")
    }

    fn shell() -> (Navigator<FlagPanel>, ShellPreferences) {
        let mut registry = ViewRegistry::new();
        for name in ["calculator", "editor", "desktop"] {
            registry
                .register(view(name), FlagPanel::default())
                .expect("register");
        }
        (Navigator::new(registry), ShellPreferences::default())
    }

    #[test]
    fn navigate_focuses_panel_without_touching_preferences() {
        let (mut nav, mut prefs) = shell();

        let first = reduce_shell(
            &mut nav,
            &mut prefs,
            ShellAction::Navigate {
                view: view("editor"),
            },
        )
        .expect("navigate");
        let again = reduce_shell(
            &mut nav,
            &mut prefs,
            ShellAction::Navigate {
                view: view("editor"),
            },
        )
        .expect("navigate");

        assert_eq!(first, vec![RuntimeEffect::FocusPanel(view("editor"))]);
        assert_eq!(again, first);
        assert_eq!(prefs, ShellPreferences::default());
    }

    #[test]
    fn toggle_requests_menu_focus_only_when_opening() {
        let (mut nav, mut prefs) = shell();

        let opened = reduce_shell(&mut nav, &mut prefs, ShellAction::ToggleStartMenu).expect("open");
        let closed =
            reduce_shell(&mut nav, &mut prefs, ShellAction::ToggleStartMenu).expect("close");

        assert_eq!(opened, vec![RuntimeEffect::FocusStartMenu]);
        assert!(closed.is_empty());
        assert_eq!(nav.overlay(), &OverlayMenuState::Closed);
    }

    #[test]
    fn menu_selection_navigates_and_closes_menu() {
        let (mut nav, mut prefs) = shell();
        reduce_shell(&mut nav, &mut prefs, ShellAction::ToggleStartMenu).expect("open");

        reduce_shell(
            &mut nav,
            &mut prefs,
            ShellAction::SelectStartMenuEntry {
                view: view("calculator"),
            },
        )
        .expect("select");

        assert_eq!(nav.current(), Some(&view("calculator")));
        assert!(!nav.overlay().is_open());
    }

    #[test]
    fn stale_menu_selection_is_rejected() {
        let (mut nav, mut prefs) = shell();

        let err = reduce_shell(
            &mut nav,
            &mut prefs,
            ShellAction::SelectStartMenuEntry {
                view: view("calculator"),
            },
        )
        .expect_err("menu closed");

        assert_eq!(err, NavigatorError::StaleMenuSelection(view("calculator")));
        assert_eq!(nav.current(), None);
    }

    #[test]
    fn unknown_view_leaves_preferences_untouched() {
        let (mut nav, mut prefs) = shell();
        let before = prefs.clone();

        let err = reduce_shell(
            &mut nav,
            &mut prefs,
            ShellAction::Navigate {
                view: view("terminal"),
            },
        )
        .expect_err("unknown");

        assert_eq!(err, NavigatorError::UnknownView(view("terminal")));
        assert_eq!(prefs, before);
    }

    #[test]
    fn hydration_keeps_current_view_and_overlay() {
        let (mut nav, mut prefs) = shell();
        nav.show(&view("editor")).expect("show");
        nav.toggle_overlay();
        let before = nav.state().clone();
        let loaded = ShellPreferences {
            clock: ClockFormat {
                use_24_hour: false,
                show_seconds: false,
            },
        };

        let effects = reduce_shell(
            &mut nav,
            &mut prefs,
            ShellAction::HydratePreferences {
                preferences: loaded.clone(),
            },
        )
        .expect("hydrate");

        assert!(effects.is_empty());
        assert_eq!(prefs, loaded);
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn clock_changes_persist_and_reset_clears() {
        let (mut nav, mut prefs) = shell();
        let format = ClockFormat {
            use_24_hour: false,
            show_seconds: true,
        };

        let changed = reduce_shell(&mut nav, &mut prefs, ShellAction::SetClockFormat { format })
            .expect("set");
        let unchanged = reduce_shell(&mut nav, &mut prefs, ShellAction::SetClockFormat { format })
            .expect("set");
        let reset = reduce_shell(&mut nav, &mut prefs, ShellAction::ResetPreferences).expect("reset");

        assert_eq!(changed, vec![RuntimeEffect::PersistPreferences]);
        assert!(unchanged.is_empty());
        assert_eq!(reset, vec![RuntimeEffect::ClearPreferences]);
        assert_eq!(prefs, ShellPreferences::default());
    }
}
