//! DOM focus and menu-keyboard helpers for shell widgets.

use wasm_bindgen::JsCast;

const MENU_ITEM_SELECTOR: &str = r#"[role="menuitem"]:not([disabled]):not([aria-disabled="true"])"#;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

fn html_element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Focuses an element by ID and reports whether a focusable HTML element was found.
pub(crate) fn focus_element_by_id(id: &str) -> bool {
    match html_element_by_id(id) {
        Some(element) => element.focus().is_ok(),
        None => false,
    }
}

fn menu_items(menu_id: &str) -> Vec<web_sys::HtmlElement> {
    let Some(nodes) = html_element_by_id(menu_id)
        .and_then(|menu| menu.query_selector_all(MENU_ITEM_SELECTOR).ok())
    else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuFocusMove {
    Next,
    Previous,
    First,
    Last,
}

impl MenuFocusMove {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Next),
            "ArrowUp" => Some(Self::Previous),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }

    /// Index to focus among `len` items, wrapping at both ends.
    fn target_index(self, current: Option<usize>, len: usize) -> usize {
        let last = len.saturating_sub(1);
        match (self, current) {
            (Self::First, _) | (Self::Next, None) => 0,
            (Self::Last, _) | (Self::Previous, None) => last,
            (Self::Next, Some(index)) => (index + 1) % len.max(1),
            (Self::Previous, Some(0)) => last,
            (Self::Previous, Some(index)) => index - 1,
        }
    }
}

/// Focuses the first enabled menu item inside a menu container.
pub(crate) fn focus_first_menu_item(menu_id: &str) -> bool {
    menu_items(menu_id)
        .first()
        .is_some_and(|item| item.focus().is_ok())
}

/// Handles arrow/home/end menu navigation and prevents default when handled.
pub(crate) fn handle_menu_roving_keydown(ev: &web_sys::KeyboardEvent, menu_id: &str) -> bool {
    let Some(step) = MenuFocusMove::from_key(&ev.key()) else {
        return false;
    };
    let items = menu_items(menu_id);
    if items.is_empty() {
        return false;
    }

    let active_id = document()
        .and_then(|document| document.active_element())
        .map(|element| element.id())
        .unwrap_or_default();
    let current = items
        .iter()
        .position(|item| !active_id.is_empty() && item.id() == active_id);
    let _ = items[step.target_index(current, items.len())].focus();

    ev.prevent_default();
    ev.stop_propagation();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roving_focus_wraps_at_both_ends() {
        assert_eq!(MenuFocusMove::Next.target_index(Some(2), 3), 0);
        assert_eq!(MenuFocusMove::Previous.target_index(Some(0), 3), 2);
        assert_eq!(MenuFocusMove::Next.target_index(None, 3), 0);
        assert_eq!(MenuFocusMove::Previous.target_index(None, 3), 2);
        assert_eq!(MenuFocusMove::Last.target_index(Some(0), 4), 3);
        assert_eq!(MenuFocusMove::from_key("Escape"), None);
    }
}
