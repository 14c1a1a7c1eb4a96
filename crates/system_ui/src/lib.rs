//! Shared UI primitive library for the desktop shell and its panels.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed by
//! the shell stylesheet. Panels compose these primitives instead of emitting ad hoc control
//! markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    AppShell, Button, ButtonVariant, Cluster, DesktopIconButton, DesktopIconGrid, FieldVariant,
    Grid, LayoutAlign, LayoutGap, LayoutPadding, MenuItem, MenuSurface, Stack, StatusBar, Switch,
    Taskbar, TaskbarSection, TextArea, TextField, ToolBar,
};

/// Convenience imports for panel crates.
pub mod prelude {
    pub use crate::{
        AppShell, Button, ButtonVariant, Cluster, DesktopIconButton, DesktopIconGrid,
        FieldVariant, Grid, LayoutAlign, LayoutGap, LayoutPadding, MenuItem, MenuSurface, Stack,
        StatusBar, Switch, Taskbar, TaskbarSection, TextArea, TextField, ToolBar,
    };
}
