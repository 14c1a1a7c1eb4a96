//! Shared structural, shell, overlay, control, and layout primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

mod controls;
mod layout;
mod navigation;
mod overlays;
mod shell;

pub use controls::{Button, Switch, TextArea, TextField};
pub use layout::{Cluster, Grid, Stack};
pub use navigation::{StatusBar, ToolBar};
pub use overlays::{MenuItem, MenuSurface};
pub use shell::{AppShell, DesktopIconButton, DesktopIconGrid, Taskbar, TaskbarSection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet/toggle style button.
    Quiet,
    /// Danger/destructive button.
    Danger,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared text-field variants.
pub enum FieldVariant {
    /// Standard field.
    #[default]
    Standard,
    /// Inset field used for document bodies and readouts.
    Inset,
}

impl FieldVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Inset => "inset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Gap tokens for layout primitives.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Medium gap.
    #[default]
    Md,
    /// Large gap.
    Lg,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Padding tokens for layout primitives.
pub enum LayoutPadding {
    /// No padding.
    #[default]
    None,
    /// Small padding.
    Sm,
    /// Medium padding.
    Md,
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Cross-axis alignment tokens for layout primitives.
pub enum LayoutAlign {
    /// Align to the start edge.
    Start,
    /// Center items.
    Center,
    /// Stretch items.
    #[default]
    Stretch,
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Stretch => "stretch",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("calc-key")),
            "ui-button calc-key"
        );
    }

    #[test]
    fn tokens_match_stylesheet_contract() {
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(ButtonVariant::Danger.token(), "danger");
        assert_eq!(FieldVariant::Inset.token(), "inset");
        assert_eq!(LayoutGap::default().token(), "md");
        assert_eq!(LayoutAlign::default().token(), "stretch");
        assert_eq!(LayoutPadding::Sm.token(), "sm");
        assert_eq!(bool_token(true), "true");
    }
}
