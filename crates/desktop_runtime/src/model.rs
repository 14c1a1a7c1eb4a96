use desktop_app_contract::{ClockFormat, ViewName};
use serde::{Deserialize, Serialize};

use crate::reducer::ShellAction;

/// Navigation request bound to one view when the registry is built.
///
/// Menu entries and desktop icons hold one of these instead of capturing a loop variable, so every
/// launcher always targets the view it was created for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationCommand {
    target: ViewName,
}

impl NavigationCommand {
    pub fn new(target: ViewName) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &ViewName {
        &self.target
    }

    /// Action dispatched when the command fires from the start menu.
    pub fn menu_action(&self) -> ShellAction {
        ShellAction::SelectStartMenuEntry {
            view: self.target.clone(),
        }
    }

    /// Action dispatched when the command fires anywhere else.
    pub fn navigate_action(&self) -> ShellAction {
        ShellAction::Navigate {
            view: self.target.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub view: ViewName,
    pub label: String,
    pub glyph: &'static str,
    pub command: NavigationCommand,
}

/// One open start-menu instance. Entries are captured when the menu opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayMenu {
    pub instance_id: u64,
    pub entries: Vec<MenuEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OverlayMenuState {
    #[default]
    Closed,
    Open(OverlayMenu),
}

impl OverlayMenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn instance_id(&self) -> Option<u64> {
        match self {
            Self::Open(menu) => Some(menu.instance_id),
            Self::Closed => None,
        }
    }

    pub fn menu(&self) -> Option<&OverlayMenu> {
        match self {
            Self::Open(menu) => Some(menu),
            Self::Closed => None,
        }
    }
}

/// Navigation state owned by the navigator and mirrored into the UI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigatorState {
    pub current: Option<ViewName>,
    pub overlay: OverlayMenuState,
}

/// Shell preferences persisted through the host prefs store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellPreferences {
    pub clock: ClockFormat,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_preference_documents_use_defaults() {
        let prefs: ShellPreferences = serde_json::from_str("{}").expect("parse prefs");
        assert_eq!(prefs, ShellPreferences::default());
    }

    #[test]
    fn retired_view_field_is_ignored() {
        let prefs: ShellPreferences = serde_json::from_str(
            r#"{"clock":{"use_24_hour":false,"show_seconds":false},"initial_view":"paint"}"#,
        )
        .expect("parse prefs");
        assert_eq!(
            prefs.clock,
            ClockFormat {
                use_24_hour: false,
                show_seconds: false,
            }
        );
    }

    #[test]
    fn navigation_commands_keep_their_target() {
        let command = NavigationCommand::new(ViewName::trusted("paint"));
        assert_eq!(
            command.menu_action(),
            ShellAction::SelectStartMenuEntry {
                view: ViewName::trusted("paint")
            }
        );
        assert_eq!(
            command.navigate_action(),
            ShellAction::Navigate {
                view: ViewName::trusted("paint")
            }
        );
    }
}
