//! Shared contract types between the desktop shell runtime and its panels.
//!
//! Panels never touch shell state directly. They receive an [`AppMountContext`] carrying
//! host-service handles plus command services that route [`AppCommand`] values back to the
//! runtime's single dispatch path.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use leptos::{Callable, Callback, ReadSignal, SignalGetUntracked, View};
use platform_host::{
    ColorPickerService, FileDialogService, HostCapabilities, HostServices, NoticeLevel,
    NoticeService, PageRenderer, TextFileService,
};
use serde::{Deserialize, Serialize};

/// Longest accepted view name.
pub const MAX_VIEW_NAME_LEN: usize = 32;

/// Stable identifier naming one registered panel.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ViewName(String);

impl ViewName {
    /// Returns a view name when `raw` is a lowercase `kebab-case` token.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_view_name(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid view name `{raw}`; expected lowercase letters, digits, and `-`"
            ))
        }
    }

    /// Creates a name without validation for trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ViewName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ViewName {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<ViewName> for String {
    fn from(name: ViewName) -> Self {
        name.0
    }
}

fn is_valid_view_name(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_VIEW_NAME_LEN {
        return false;
    }
    if !bytes[0].is_ascii_lowercase() || raw.ends_with('-') {
        return false;
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}

/// Visibility contract every shell panel implements.
///
/// Both operations are idempotent. Unmounting hides a panel without discarding its internal
/// state, so a later mount shows it exactly as it was left.
pub trait Panel {
    /// Makes the panel the full-area visible surface.
    fn mount(&self);

    /// Hides the panel.
    fn unmount(&self);

    /// Reports whether the panel is currently mounted.
    fn is_mounted(&self) -> bool;
}

impl<P: Panel + ?Sized> Panel for Rc<P> {
    fn mount(&self) {
        (**self).mount();
    }

    fn unmount(&self) {
        (**self).unmount();
    }

    fn is_mounted(&self) -> bool {
        (**self).is_mounted()
    }
}

/// Taskbar clock display format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockFormat {
    /// Render hours on a 24-hour dial.
    pub use_24_hour: bool,
    /// Include seconds in the rendered time.
    pub show_seconds: bool,
}

impl Default for ClockFormat {
    fn default() -> Self {
        Self {
            use_24_hour: true,
            show_seconds: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Commands panels send to the desktop runtime.
pub enum AppCommand {
    /// Show the named view.
    Navigate {
        /// Destination view.
        view: ViewName,
    },
    /// Change the taskbar clock format.
    SetClockFormat {
        /// New format.
        format: ClockFormat,
    },
    /// Drop persisted shell preferences and restore defaults.
    ResetPreferences,
}

#[derive(Clone, Copy)]
/// Navigation service for panels.
pub struct ShellService {
    sender: Callback<AppCommand>,
}

impl ShellService {
    /// Requests that the shell show `view`.
    pub fn navigate(&self, view: ViewName) {
        self.sender.call(AppCommand::Navigate { view });
    }

    /// Requests the desktop view.
    pub fn go_home(&self) {
        self.navigate(ViewName::trusted(DESKTOP_VIEW));
    }
}

/// Name of the desktop view every shell registers.
pub const DESKTOP_VIEW: &str = "desktop";

#[derive(Clone, Copy)]
/// Shell preference service used by the settings panel.
pub struct SettingsService {
    sender: Callback<AppCommand>,
    clock: ReadSignal<ClockFormat>,
}

impl SettingsService {
    /// Returns the reactive clock format.
    pub fn clock_format(&self) -> ReadSignal<ClockFormat> {
        self.clock
    }

    /// Requests a clock format change.
    pub fn set_clock_format(&self, format: ClockFormat) {
        self.sender.call(AppCommand::SetClockFormat { format });
    }

    /// Flips the 24-hour setting, keeping the seconds setting.
    pub fn toggle_24_hour(&self) {
        let current = self.clock.get_untracked();
        self.set_clock_format(ClockFormat {
            use_24_hour: !current.use_24_hour,
            ..current
        });
    }

    /// Requests a preference reset.
    pub fn reset(&self) {
        self.sender.call(AppCommand::ResetPreferences);
    }
}

#[derive(Clone)]
/// Blocking notice service handle.
pub struct NoticeHandle {
    inner: Rc<dyn NoticeService>,
}

impl NoticeHandle {
    /// Wraps a host notice service.
    pub fn new(inner: Rc<dyn NoticeService>) -> Self {
        Self { inner }
    }

    /// Returns the underlying host service for async app logic.
    pub fn service(&self) -> &dyn NoticeService {
        self.inner.as_ref()
    }

    /// Shows an error notice from a reactive event handler.
    pub fn error(&self, title: impl Into<String>, body: impl Into<String>) {
        let inner = self.inner.clone();
        let (title, body) = (title.into(), body.into());
        leptos::spawn_local(async move {
            if let Err(err) = inner.show_notice(NoticeLevel::Error, &title, &body).await {
                leptos::logging::warn!("notice `{title}` was not shown: {err}");
            }
        });
    }
}

#[derive(Clone)]
/// Injected app services bundle.
pub struct AppServices {
    /// Navigation service.
    pub shell: ShellService,
    /// Shell preference service.
    pub settings: SettingsService,
    /// Blocking notices.
    pub notices: NoticeHandle,
    /// Document storage.
    pub files: Rc<dyn TextFileService>,
    /// Open/save path dialogs.
    pub file_dialogs: Rc<dyn FileDialogService>,
    /// Color chooser.
    pub color_picker: Rc<dyn ColorPickerService>,
    /// Page renderer when the host provides one.
    pub page_renderer: Option<Rc<dyn PageRenderer>>,
    /// Host capability snapshot.
    pub capabilities: HostCapabilities,
    sender: Callback<AppCommand>,
}

impl AppServices {
    /// Creates service handles from the runtime command callback and host bundle.
    pub fn new(
        sender: Callback<AppCommand>,
        clock: ReadSignal<ClockFormat>,
        host: &HostServices,
    ) -> Self {
        Self {
            shell: ShellService { sender },
            settings: SettingsService { sender, clock },
            notices: NoticeHandle::new(host.notices.clone()),
            files: host.files.clone(),
            file_dialogs: host.file_dialogs.clone(),
            color_picker: host.color_picker.clone(),
            page_renderer: host.page_renderer.clone(),
            capabilities: host.capabilities,
            sender,
        }
    }

    /// Low-level transport send.
    pub fn send(&self, command: AppCommand) {
        self.sender.call(command);
    }
}

#[derive(Clone)]
/// Mount context injected by the runtime into each panel.
pub struct AppMountContext {
    /// View this panel is registered under.
    pub view: ViewName,
    /// Whether the panel is currently mounted.
    pub visible: ReadSignal<bool>,
    /// Runtime service bundle.
    pub services: AppServices,
}

/// Static mount function used by the runtime app catalog.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Panel module descriptor used by the runtime app catalog.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Renders the panel with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use leptos::create_signal;

    use super::*;

    #[test]
    fn view_names_are_lowercase_kebab_tokens() {
        assert!(ViewName::new("calculator").is_ok());
        assert!(ViewName::new("no-browser").is_ok());
        assert!(ViewName::new("paint2").is_ok());
        assert!(ViewName::new("").is_err());
        assert!(ViewName::new("Paint").is_err());
        assert!(ViewName::new("2paint").is_err());
        assert!(ViewName::new("paint-").is_err());
        assert!(ViewName::new("my view").is_err());
        assert!(ViewName::new("a".repeat(MAX_VIEW_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn view_name_deserialization_validates() {
        let name: ViewName = serde_json::from_str("\"editor\"").expect("valid");
        assert_eq!(name.as_str(), "editor");
        assert!(serde_json::from_str::<ViewName>("\"Editor!\"").is_err());
    }

    #[derive(Default)]
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

    #[test]
    fn shared_panels_forward_through_rc() {
        let panel: Rc<FlagPanel> = Rc::default();
        let shared: Rc<dyn Panel> = panel.clone();
        shared.mount();
        shared.mount();
        assert!(panel.is_mounted());
        shared.unmount();
        assert!(!panel.is_mounted());
    }

    #[test]
    fn services_route_commands_through_sender() {
        let _ = leptos::create_runtime();
        let sent = Rc::new(RefCell::new(Vec::new()));
        let sink = sent.clone();
        let sender = Callback::new(move |command: AppCommand| sink.borrow_mut().push(command));
        let (clock, _) = create_signal(ClockFormat::default());
        let services = AppServices::new(sender, clock, &HostServices::headless());

        services.shell.go_home();
        services.settings.toggle_24_hour();
        services.send(AppCommand::ResetPreferences);

        assert_eq!(
            *sent.borrow(),
            vec![
                AppCommand::Navigate {
                    view: ViewName::trusted(DESKTOP_VIEW)
                },
                AppCommand::SetClockFormat {
                    format: ClockFormat {
                        use_24_hour: false,
                        show_seconds: true
                    }
                },
                AppCommand::ResetPreferences,
            ]
        );
    }
}
