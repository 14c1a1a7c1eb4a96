//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Preferences and documents live in `window.localStorage`, pickers use `window.prompt`, notices
//! use `window.alert`, and the browser panel embeds pages in an iframe. Every adapter compiles on
//! native targets with a fallback so the workspace tests run without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the host bundle factory.
pub mod adapters;
pub mod dialogs;
pub mod notifications;
pub mod page;
pub mod storage;

pub use adapters::{build_host_services, host_capabilities, selected_host_strategy};
pub use dialogs::{WebColorPickerService, WebFileDialogService};
pub use notifications::WebNoticeService;
pub use page::FramePageRenderer;
pub use storage::files::WebTextFileService;
pub use storage::local_prefs::WebPrefsStore;
