//! Host-bundle and capability models for runtime composition.

use std::rc::Rc;

use crate::{
    ColorPickerService, FileDialogService, MemoryNoticeService, MemoryPrefsStore,
    MemoryTextFileService, NoopColorPickerService, NoopFileDialogService, NoticeService,
    PageRenderer, PrefsStore, TextFileService,
};

/// Host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition (`localStorage`, `prompt`/`alert`, iframes).
    Browser,
    /// In-memory composition used by tests and non-browser builds.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Availability of one optional capability domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability is usable now.
    Available,
    /// Capability is not supported by the active host or build.
    Unavailable,
    /// Capability exists but waits on a user gesture or permission.
    RequiresUserActivation,
}

impl CapabilityStatus {
    /// Returns whether the capability can be used immediately.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }

    /// Returns a short label for settings and diagnostics.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
            Self::RequiresUserActivation => "needs activation",
        }
    }
}

/// Capability snapshot that decides which panels the shell binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Document read/write support for the editor.
    pub text_files: CapabilityStatus,
    /// Modal open/save path dialogs.
    pub file_dialogs: CapabilityStatus,
    /// Modal color chooser for paint.
    pub color_picker: CapabilityStatus,
    /// Embeddable page renderer for the browser panel.
    pub page_renderer: CapabilityStatus,
    /// Blocking notices.
    pub notices: CapabilityStatus,
}

impl HostCapabilities {
    /// Browser capability posture; the page renderer depends on the build.
    pub const fn browser(page_renderer: CapabilityStatus) -> Self {
        Self {
            text_files: CapabilityStatus::Available,
            file_dialogs: CapabilityStatus::Available,
            color_picker: CapabilityStatus::Available,
            page_renderer,
            notices: CapabilityStatus::Available,
        }
    }

    /// Headless posture: storage works, interactive pickers do not.
    pub const fn headless() -> Self {
        Self {
            text_files: CapabilityStatus::Available,
            file_dialogs: CapabilityStatus::Unavailable,
            color_picker: CapabilityStatus::Unavailable,
            page_renderer: CapabilityStatus::Unavailable,
            notices: CapabilityStatus::Available,
        }
    }

    /// Returns `(label, status)` rows in display order.
    pub fn rows(&self) -> [(&'static str, CapabilityStatus); 5] {
        [
            ("Text files", self.text_files),
            ("File dialogs", self.file_dialogs),
            ("Color picker", self.color_picker),
            ("Page renderer", self.page_renderer),
            ("Notices", self.notices),
        ]
    }
}

/// Host service bundle injected into the desktop runtime.
///
/// Environment-specific adapter selection happens before this bundle reaches the runtime, so
/// panels only ever see trait objects.
#[derive(Clone)]
pub struct HostServices {
    /// Preference store.
    pub prefs: Rc<dyn PrefsStore>,
    /// Document storage for the editor.
    pub files: Rc<dyn TextFileService>,
    /// Open/save path dialogs.
    pub file_dialogs: Rc<dyn FileDialogService>,
    /// Color chooser.
    pub color_picker: Rc<dyn ColorPickerService>,
    /// Blocking notices.
    pub notices: Rc<dyn NoticeService>,
    /// Page renderer, present only when `capabilities.page_renderer` is available.
    pub page_renderer: Option<Rc<dyn PageRenderer>>,
    /// Capability snapshot.
    pub capabilities: HostCapabilities,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds an in-memory bundle with cancelling pickers and no page renderer.
    pub fn headless() -> Self {
        Self {
            prefs: Rc::new(MemoryPrefsStore::default()),
            files: Rc::new(MemoryTextFileService::default()),
            file_dialogs: Rc::new(NoopFileDialogService),
            color_picker: Rc::new(NoopColorPickerService),
            notices: Rc::new(MemoryNoticeService::default()),
            page_renderer: None,
            capabilities: HostCapabilities::headless(),
            host_strategy: HostStrategy::Headless,
        }
    }

    /// Returns whether the browser panel should bind the real page renderer.
    pub fn has_page_renderer(&self) -> bool {
        self.capabilities.page_renderer.is_available() && self.page_renderer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoopPageRenderer;

    #[test]
    fn headless_bundle_has_no_page_renderer() {
        let host = HostServices::headless();
        assert!(!host.has_page_renderer());
        assert_eq!(host.host_strategy.as_str(), "headless");
    }

    #[test]
    fn page_renderer_requires_both_capability_and_adapter() {
        let mut host = HostServices::headless();
        host.page_renderer = Some(Rc::new(NoopPageRenderer));
        assert!(!host.has_page_renderer());

        host.capabilities = HostCapabilities::browser(CapabilityStatus::Available);
        assert!(host.has_page_renderer());
    }

    #[test]
    fn capability_rows_follow_display_order() {
        let labels: Vec<_> = HostCapabilities::headless()
            .rows()
            .iter()
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(
            labels,
            vec!["Text files", "File dialogs", "Color picker", "Page renderer", "Notices"]
        );
    }
}
