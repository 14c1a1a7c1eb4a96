//! Typed host-service contracts shared by the desktop runtime, panels, and browser adapters.
//!
//! Concrete browser adapters live in `platform_host_web`. This crate only defines the service
//! traits plus in-memory and no-op implementations used for tests and fallbacks.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dialogs;
pub mod fs;
pub mod host;
pub mod notifications;
pub mod page;
pub mod prefs;
pub mod time;

pub use dialogs::{
    ColorPickerService, DialogFuture, DialogResponse, FileDialogService, NoopColorPickerService,
    NoopFileDialogService, QueuedColorPickerService, QueuedFileDialogService,
};
pub use fs::path::normalize_document_path;
pub use fs::service::{
    MemoryTextFileService, NoopTextFileService, TextFileFuture, TextFileService,
};
pub use host::{CapabilityStatus, HostCapabilities, HostServices, HostStrategy};
pub use notifications::{
    MemoryNoticeService, NoopNoticeService, Notice, NoticeFuture, NoticeLevel, NoticeService,
};
pub use page::{
    normalize_page_url, page_host, MemoryPageRenderer, NoopPageRenderer, PageRenderer,
    PageRendererFuture, RenderedPage,
};
pub use prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use time::{local_clock_time_now, unix_time_ms_now, ClockTime};
