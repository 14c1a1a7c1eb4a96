use std::rc::Rc;

use platform_host::{CapabilityStatus, HostCapabilities, HostServices, HostStrategy, PageRenderer};

use crate::{
    FramePageRenderer, WebColorPickerService, WebFileDialogService, WebNoticeService,
    WebPrefsStore, WebTextFileService,
};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "headless-host")]
    {
        HostStrategy::Headless
    }

    #[cfg(not(feature = "headless-host"))]
    {
        HostStrategy::Browser
    }
}

const fn page_renderer_status() -> CapabilityStatus {
    #[cfg(feature = "embedded-browser")]
    {
        CapabilityStatus::Available
    }

    #[cfg(not(feature = "embedded-browser"))]
    {
        CapabilityStatus::Unavailable
    }
}

/// Returns the capability snapshot for the selected strategy and enabled features.
pub const fn host_capabilities() -> HostCapabilities {
    match selected_host_strategy() {
        HostStrategy::Browser => HostCapabilities::browser(page_renderer_status()),
        HostStrategy::Headless => HostCapabilities::headless(),
    }
}

fn page_renderer() -> Option<Rc<dyn PageRenderer>> {
    if page_renderer_status().is_available() {
        Some(Rc::new(FramePageRenderer))
    } else {
        None
    }
}

/// Builds the host bundle the desktop runtime is composed with.
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Headless => HostServices::headless(),
        HostStrategy::Browser => HostServices {
            prefs: Rc::new(WebPrefsStore),
            files: Rc::new(WebTextFileService),
            file_dialogs: Rc::new(WebFileDialogService),
            color_picker: Rc::new(WebColorPickerService),
            notices: Rc::new(WebNoticeService),
            page_renderer: page_renderer(),
            capabilities: host_capabilities(),
            host_strategy: HostStrategy::Browser,
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundle_matches_selected_strategy() {
        let host = build_host_services();
        assert_eq!(host.host_strategy, selected_host_strategy());
        assert_eq!(host.capabilities, host_capabilities());
    }

    #[cfg(all(feature = "embedded-browser", not(feature = "headless-host")))]
    #[test]
    fn embedded_browser_feature_binds_page_renderer() {
        assert!(build_host_services().has_page_renderer());
    }

    #[cfg(not(feature = "embedded-browser"))]
    #[test]
    fn page_renderer_is_absent_without_feature() {
        let host = build_host_services();
        assert!(!host.has_page_renderer());
        assert_eq!(
            host.capabilities.page_renderer,
            CapabilityStatus::Unavailable
        );
    }
}
