//! Initial-view resolution at startup.

use desktop_app_contract::{Panel, ViewName, DESKTOP_VIEW};

use crate::{navigator::NavigatorError, registry::ViewRegistry};

/// Outcome of initial-view resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootView {
    /// View to show first.
    pub view: ViewName,
    /// Deep-link problem to report, if the requested view was rejected.
    pub rejected: Option<NavigatorError>,
}

/// Reads the `view` parameter from a location query string such as `?view=paint`.
pub fn deep_link_view(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "view")
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Picks the first view: a valid deep link, otherwise the desktop. A rejected deep link is
/// reported alongside the desktop fallback.
pub fn resolve_initial_view<P: Panel>(
    deep_link: Option<&str>,
    registry: &ViewRegistry<P>,
) -> BootView {
    let desktop = ViewName::trusted(DESKTOP_VIEW);

    if let Some(raw) = deep_link {
        let requested = ViewName::new(raw).map_err(NavigatorError::InvalidViewName);
        return match requested {
            Ok(view) if registry.contains(&view) => BootView {
                view,
                rejected: None,
            },
            Ok(view) => BootView {
                view: desktop,
                rejected: Some(NavigatorError::UnknownView(view)),
            },
            Err(err) => BootView {
                view: desktop,
                rejected: Some(err),
            },
        };
    }

    BootView {
        view: desktop,
        rejected: None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct InertPanel;

    impl Panel for InertPanel {
        fn mount(&self) {}

        fn unmount(&self) {}

        fn is_mounted(&self) -> bool {
            false
        }
    }

    fn registry() -> ViewRegistry<InertPanel> {
        let mut registry = ViewRegistry::new();
        for name in ["desktop", "paint", "editor"] {
            registry
                .register(ViewName::trusted(name), InertPanel)
                .expect("register");
        }
        registry
    }

    #[test]
    fn query_parameter_is_extracted_and_decoded() {
        assert_eq!(deep_link_view("?view=paint"), Some("paint".into()));
        assert_eq!(deep_link_view("theme=x&view=%20editor"), Some("editor".into()));
        assert_eq!(deep_link_view("?view="), None);
        assert_eq!(deep_link_view(""), None);
    }

    #[test]
    fn registered_deep_link_is_shown_first() {
        let boot = resolve_initial_view(Some("paint"), &registry());
        assert_eq!(boot.view, ViewName::trusted("paint"));
        assert_eq!(boot.rejected, None);
    }

    #[test]
    fn unknown_deep_link_is_reported_and_falls_back_to_desktop() {
        let boot = resolve_initial_view(Some("terminal"), &registry());
        assert_eq!(
            boot,
            BootView {
                view: ViewName::trusted("desktop"),
                rejected: Some(NavigatorError::UnknownView(ViewName::trusted("terminal"))),
            }
        );
    }

    #[test]
    fn malformed_deep_link_is_reported() {
        let boot = resolve_initial_view(Some("Bad View"), &registry());
        assert_eq!(boot.view, ViewName::trusted("desktop"));
        assert!(matches!(
            boot.rejected,
            Some(NavigatorError::InvalidViewName(_))
        ));
    }

    #[test]
    fn boot_without_deep_link_always_lands_on_desktop() {
        let boot = resolve_initial_view(None, &registry());
        assert_eq!(
            boot,
            BootView {
                view: ViewName::trusted("desktop"),
                rejected: None,
            }
        );
    }
}
