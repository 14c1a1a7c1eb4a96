//! Ordered registry mapping view names to panels.

use desktop_app_contract::{Panel, ViewName};

use crate::{
    model::{MenuEntry, NavigationCommand},
    navigator::NavigatorError,
};

const DEFAULT_GLYPH: &str = "▪";

/// One registered view.
#[derive(Debug)]
pub struct ViewEntry<P> {
    pub name: ViewName,
    pub label: String,
    pub glyph: &'static str,
    pub panel: P,
    pub command: NavigationCommand,
}

/// Registry populated once at startup.
///
/// Registration order is kept and becomes the start-menu order.
#[derive(Debug)]
pub struct ViewRegistry<P> {
    entries: Vec<ViewEntry<P>>,
}

impl<P> Default for ViewRegistry<P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<P: Panel> ViewRegistry<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `panel` under `name`, labelled with the name itself.
    ///
    /// # Errors
    ///
    /// Returns [`NavigatorError::DuplicateView`] when `name` is already registered.
    pub fn register(&mut self, name: ViewName, panel: P) -> Result<(), NavigatorError> {
        let label = name.to_string();
        self.register_labeled(name, label, DEFAULT_GLYPH, panel)
    }

    /// Registers `panel` with a display label and glyph.
    ///
    /// # Errors
    ///
    /// Returns [`NavigatorError::DuplicateView`] when `name` is already registered. The existing
    /// entry is kept.
    pub fn register_labeled(
        &mut self,
        name: ViewName,
        label: impl Into<String>,
        glyph: &'static str,
        panel: P,
    ) -> Result<(), NavigatorError> {
        if self.contains(&name) {
            return Err(NavigatorError::DuplicateView(name));
        }
        self.entries.push(ViewEntry {
            command: NavigationCommand::new(name.clone()),
            name,
            label: label.into(),
            glyph,
            panel,
        });
        Ok(())
    }

    pub fn get(&self, name: &ViewName) -> Option<&P> {
        self.entry(name).map(|entry| &entry.panel)
    }

    pub fn entry(&self, name: &ViewName) -> Option<&ViewEntry<P>> {
        self.entries.iter().find(|entry| &entry.name == name)
    }

    pub fn contains(&self, name: &ViewName) -> bool {
        self.entry(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewEntry<P>> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<ViewName> {
        self.entries.iter().map(|entry| entry.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds start-menu entries for every registered view, the current one included.
    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        self.entries
            .iter()
            .map(|entry| MenuEntry {
                view: entry.name.clone(),
                label: entry.label.clone(),
                glyph: entry.glyph,
                command: entry.command.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Default)]
    struct StubPanel(Cell<bool>);

    impl Panel for StubPanel {
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

    #[test]
    fn duplicate_registration_fails_and_keeps_first_panel() {
        let mut registry = ViewRegistry::new();
        registry
            .register_labeled(view("paint"), "Paint", "P", StubPanel::default())
            .expect("first registration");

        let err = registry
            .register(view("paint"), StubPanel::default())
            .expect_err("duplicate");

        assert_eq!(err, NavigatorError::DuplicateView(view("paint")));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.entry(&view("paint")).expect("entry").label, "Paint");
    }

    #[test]
    fn menu_entries_follow_registration_order_with_bound_commands() {
        let mut registry = ViewRegistry::new();
        for name in ["calculator", "editor", "desktop"] {
            registry
                .register(view(name), StubPanel::default())
                .expect("register");
        }

        let entries = registry.menu_entries();
        let targets: Vec<_> = entries
            .iter()
            .map(|entry| entry.command.target().as_str())
            .collect();
        assert_eq!(targets, vec!["calculator", "editor", "desktop"]);
        assert_eq!(entries[1].label, "editor");
        assert_eq!(
            entries[1].command.navigate_action(),
            crate::reducer::ShellAction::Navigate {
                view: view("editor")
            }
        );
    }
}
