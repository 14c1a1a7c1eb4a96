//! The navigator: owns the view registry and performs every view transition.
//!
//! At most one panel is mounted after any transition, and every successful navigation closes the
//! start menu. Both hold regardless of what the navigator believes is current, because `show`
//! unmounts every registered panel rather than only the previous one.

use desktop_app_contract::{Panel, ViewName};
use thiserror::Error;

use crate::{
    model::{NavigatorState, OverlayMenu, OverlayMenuState},
    registry::ViewRegistry,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Recoverable navigation failures.
pub enum NavigatorError {
    /// Navigation targeted a name with no registered panel.
    #[error("unknown view `{0}`")]
    UnknownView(ViewName),
    /// Startup registered two panels under one name.
    #[error("view `{0}` is already registered")]
    DuplicateView(ViewName),
    /// A start-menu pick arrived after the menu had closed.
    #[error("start menu entry `{0}` selected while the menu is closed")]
    StaleMenuSelection(ViewName),
    /// Input text is not a valid view name.
    #[error("{0}")]
    InvalidViewName(String),
}

/// Coordinator for the visible panel and the start-menu overlay.
#[derive(Debug)]
pub struct Navigator<P> {
    registry: ViewRegistry<P>,
    state: NavigatorState,
    next_overlay_id: u64,
}

impl<P: Panel> Navigator<P> {
    /// Takes ownership of a fully built registry and hides every panel.
    pub fn new(registry: ViewRegistry<P>) -> Self {
        for entry in registry.iter() {
            entry.panel.unmount();
        }
        Self {
            registry,
            state: NavigatorState::default(),
            next_overlay_id: 1,
        }
    }

    /// Shows `name` as the only visible panel and closes the start menu.
    ///
    /// # Errors
    ///
    /// Returns [`NavigatorError::UnknownView`] when `name` is not registered. Nothing is mounted,
    /// unmounted, or closed in that case.
    pub fn show(&mut self, name: &ViewName) -> Result<(), NavigatorError> {
        let Some(target) = self.registry.get(name) else {
            return Err(NavigatorError::UnknownView(name.clone()));
        };

        for entry in self.registry.iter() {
            entry.panel.unmount();
        }
        target.mount();

        self.state.current = Some(name.clone());
        self.state.overlay = OverlayMenuState::Closed;
        Ok(())
    }

    /// View shown by the last successful [`Navigator::show`].
    pub fn current(&self) -> Option<&ViewName> {
        self.state.current.as_ref()
    }

    /// Opens a fresh start menu when closed, destroys it when open.
    pub fn toggle_overlay(&mut self) -> &OverlayMenuState {
        self.state.overlay = match self.state.overlay {
            OverlayMenuState::Open(_) => OverlayMenuState::Closed,
            OverlayMenuState::Closed => {
                let instance_id = self.next_overlay_id;
                self.next_overlay_id += 1;
                OverlayMenuState::Open(OverlayMenu {
                    instance_id,
                    entries: self.registry.menu_entries(),
                })
            }
        };
        &self.state.overlay
    }

    /// Current start-menu state.
    pub fn overlay(&self) -> &OverlayMenuState {
        &self.state.overlay
    }

    /// Snapshot mirrored into the UI after each dispatch.
    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    /// Registry fixed at construction.
    pub fn registry(&self) -> &ViewRegistry<P> {
        &self.registry
    }

    /// Names of every panel that currently reports itself mounted.
    pub fn mounted_views(&self) -> Vec<ViewName> {
        self.registry
            .iter()
            .filter(|entry| entry.panel.is_mounted())
            .map(|entry| entry.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Default)]
    struct TestPanel {
        mounted: Cell<bool>,
        mounts: Cell<u32>,
    }

    impl Panel for TestPanel {
        fn mount(&self) {
            self.mounted.set(true);
            self.mounts.set(self.mounts.get() + 1);
        }

        fn unmount(&self) {
            self.mounted.set(false);
        }

        fn is_mounted(&self) -> bool {
            self.mounted.get()
        }
    }

    const VIEWS: [&str; 6] = ["desktop", "calculator", "editor", "paint", "settings", "browser"];

    fn view(name: &str) -> ViewName {
        ViewName::new(name).expect("valid view name")
    }

    fn navigator() -> Navigator<Rc<TestPanel>> {
        let mut registry = ViewRegistry::new();
        for name in VIEWS {
            registry
                .register(view(name), Rc::new(TestPanel::default()))
                .expect("register");
        }
        Navigator::new(registry)
    }

    #[test]
    fn new_navigator_hides_every_panel() {
        let mut registry = ViewRegistry::new();
        let panel = Rc::new(TestPanel::default());
        panel.mount();
        registry.register(view("desktop"), panel.clone()).expect("register");

        let nav = Navigator::new(registry);

        assert!(!panel.is_mounted());
        assert_eq!(nav.current(), None);
        assert!(nav.mounted_views().is_empty());
    }

    #[test]
    fn exactly_one_panel_is_mounted_after_each_show() {
        let mut nav = navigator();
        let sequence = ["paint", "paint", "editor", "desktop", "browser", "calculator", "settings"];

        for name in sequence {
            nav.show(&view(name)).expect("show");
            assert_eq!(nav.mounted_views(), vec![view(name)], "after show({name})");
            assert_eq!(nav.current(), Some(&view(name)));
        }
    }

    #[test]
    fn show_hides_panels_mounted_behind_the_navigators_back() {
        let mut nav = navigator();
        nav.show(&view("editor")).expect("show");
        for entry in nav.registry().iter() {
            entry.panel.mount();
        }

        nav.show(&view("paint")).expect("show");

        assert_eq!(nav.mounted_views(), vec![view("paint")]);
    }

    #[test]
    fn unknown_view_is_reported_and_changes_nothing() {
        let mut nav = navigator();
        nav.show(&view("editor")).expect("show");
        nav.toggle_overlay();
        let before = nav.state().clone();

        let err = nav.show(&view("terminal")).expect_err("unknown view");

        assert_eq!(err, NavigatorError::UnknownView(view("terminal")));
        assert_eq!(err.to_string(), "unknown view `terminal`");
        assert_eq!(nav.state(), &before);
        assert_eq!(nav.mounted_views(), vec![view("editor")]);
        let editor = nav.registry().get(&view("editor")).expect("editor");
        assert_eq!(editor.mounts.get(), 1);
    }

    #[test]
    fn double_toggle_returns_to_closed() {
        let mut nav = navigator();

        assert!(nav.toggle_overlay().is_open());
        assert_eq!(nav.toggle_overlay(), &OverlayMenuState::Closed);
        assert_eq!(nav.overlay().instance_id(), None);
    }

    #[test]
    fn reopening_creates_a_new_instance() {
        let mut nav = navigator();

        let first = nav.toggle_overlay().instance_id().expect("open");
        nav.toggle_overlay();
        let second = nav.toggle_overlay().instance_id().expect("open");

        assert_ne!(first, second);
    }

    #[test]
    fn open_menu_lists_every_view_including_current() {
        let mut nav = navigator();
        nav.show(&view("paint")).expect("show");

        let menu = nav.toggle_overlay().menu().expect("open").clone();

        let listed: Vec<_> = menu.entries.iter().map(|e| e.view.as_str()).collect();
        assert_eq!(listed, VIEWS.to_vec());
    }

    #[test]
    fn every_successful_show_closes_an_open_overlay() {
        for name in VIEWS {
            let mut nav = navigator();
            nav.toggle_overlay();

            nav.show(&view(name)).expect("show");

            assert_eq!(nav.overlay(), &OverlayMenuState::Closed, "after show({name})");
        }
    }
}
