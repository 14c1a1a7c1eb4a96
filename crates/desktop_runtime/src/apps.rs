//! Built-in panel catalog and view-registry construction.

use desktop_app_contract::{AppModule, Panel, ViewName, DESKTOP_VIEW};

use crate::{navigator::NavigatorError, registry::ViewRegistry};

/// How a catalog entry picks its panel module.
#[derive(Debug, Clone, Copy)]
pub enum PanelSource {
    /// Always the same module.
    Fixed(AppModule),
    /// Real module when the host has a page renderer, placeholder otherwise.
    PageRenderer {
        renderer: AppModule,
        placeholder: AppModule,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct AppDescriptor {
    pub view: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
    pub show_on_desktop: bool,
    pub source: PanelSource,
}

/// Module chosen for one view at startup.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedPanel {
    pub module: AppModule,
    pub placeholder: bool,
}

impl AppDescriptor {
    pub fn resolve(&self, has_page_renderer: bool) -> ResolvedPanel {
        match self.source {
            PanelSource::Fixed(module) => ResolvedPanel {
                module,
                placeholder: false,
            },
            PanelSource::PageRenderer {
                renderer,
                placeholder,
            } => {
                if has_page_renderer {
                    ResolvedPanel {
                        module: renderer,
                        placeholder: false,
                    }
                } else {
                    ResolvedPanel {
                        module: placeholder,
                        placeholder: true,
                    }
                }
            }
        }
    }
}

const APP_CATALOG: [AppDescriptor; 6] = [
    AppDescriptor {
        view: "calculator",
        label: "Calculator",
        glyph: "🧮",
        show_on_desktop: true,
        source: PanelSource::Fixed(AppModule::new(desktop_app_calculator::mount)),
    },
    AppDescriptor {
        view: "editor",
        label: "Editor",
        glyph: "📝",
        show_on_desktop: true,
        source: PanelSource::Fixed(AppModule::new(desktop_app_notepad::mount)),
    },
    AppDescriptor {
        view: "paint",
        label: "Paint",
        glyph: "🎨",
        show_on_desktop: true,
        source: PanelSource::Fixed(AppModule::new(desktop_app_paint::mount)),
    },
    AppDescriptor {
        view: "browser",
        label: "Browser",
        glyph: "🌐",
        show_on_desktop: true,
        source: PanelSource::PageRenderer {
            renderer: AppModule::new(desktop_app_browser::mount),
            placeholder: AppModule::new(desktop_app_browser::mount_placeholder),
        },
    },
    AppDescriptor {
        view: "settings",
        label: "Settings",
        glyph: "⚙",
        show_on_desktop: true,
        source: PanelSource::Fixed(AppModule::new(desktop_app_settings::mount)),
    },
    AppDescriptor {
        view: DESKTOP_VIEW,
        label: "Desktop",
        glyph: "🖥",
        show_on_desktop: false,
        source: PanelSource::Fixed(AppModule::new(crate::components::desktop::mount_desktop)),
    },
];

/// Catalog in start-menu order.
pub fn app_catalog() -> &'static [AppDescriptor] {
    &APP_CATALOG
}

/// Entries shown as desktop icons.
pub fn desktop_launchers() -> impl Iterator<Item = &'static AppDescriptor> {
    app_catalog().iter().filter(|app| app.show_on_desktop)
}

/// Builds the view registry, creating one panel per catalog entry with `make_panel`.
///
/// # Errors
///
/// Returns [`NavigatorError::InvalidViewName`] or [`NavigatorError::DuplicateView`] when the
/// catalog is malformed.
pub fn build_view_registry<P: Panel>(
    has_page_renderer: bool,
    mut make_panel: impl FnMut(ViewName, &AppDescriptor, ResolvedPanel) -> P,
) -> Result<ViewRegistry<P>, NavigatorError> {
    build_registry_from(app_catalog(), has_page_renderer, &mut make_panel)
}

fn build_registry_from<P: Panel>(
    catalog: &[AppDescriptor],
    has_page_renderer: bool,
    make_panel: &mut impl FnMut(ViewName, &AppDescriptor, ResolvedPanel) -> P,
) -> Result<ViewRegistry<P>, NavigatorError> {
    let mut registry = ViewRegistry::new();
    for app in catalog {
        let name = ViewName::new(app.view).map_err(NavigatorError::InvalidViewName)?;
        let panel = make_panel(name.clone(), app, app.resolve(has_page_renderer));
        registry.register_labeled(name, app.label, app.glyph, panel)?;
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug)]
    struct CatalogPanel {
        placeholder: bool,
    }

    impl Panel for CatalogPanel {
        fn mount(&self) {}

        fn unmount(&self) {}

        fn is_mounted(&self) -> bool {
            false
        }
    }

    fn registry(has_page_renderer: bool) -> ViewRegistry<CatalogPanel> {
        build_view_registry(has_page_renderer, |_, _, resolved| CatalogPanel {
            placeholder: resolved.placeholder,
        })
        .expect("catalog is valid")
    }

    #[test]
    fn catalog_registers_every_view_in_menu_order() {
        let names: Vec<_> = registry(true)
            .names()
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(
            names,
            vec!["calculator", "editor", "paint", "browser", "settings", "desktop"]
        );
    }

    #[test]
    fn browser_view_exists_with_or_without_renderer() {
        let browser = ViewName::trusted("browser");

        let with = registry(true);
        let without = registry(false);

        assert!(!with.get(&browser).expect("registered").placeholder);
        assert!(without.get(&browser).expect("registered").placeholder);
        assert_eq!(with.names(), without.names());
    }

    #[test]
    fn desktop_icons_cover_every_app_but_the_desktop() {
        let labels: Vec<_> = desktop_launchers().map(|app| app.label).collect();
        assert_eq!(labels, vec!["Calculator", "Editor", "Paint", "Browser", "Settings"]);
    }

    #[test]
    fn duplicate_catalog_entries_fail_fast() {
        let doubled = [APP_CATALOG[0], APP_CATALOG[0]];
        let err = build_registry_from(&doubled, false, &mut |_, _, _| CatalogPanel {
            placeholder: false,
        })
        .expect_err("duplicate");
        assert_eq!(err, NavigatorError::DuplicateView(ViewName::trusted("calculator")));
    }
}
