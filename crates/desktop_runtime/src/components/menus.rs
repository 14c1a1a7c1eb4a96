use leptos::*;
use system_ui::{MenuItem, MenuSurface};

use super::{a11y, START_BUTTON_ID, START_MENU_ID};
use crate::{reducer::ShellAction, runtime_context::use_desktop_runtime};

fn start_menu_item_id(view: &str) -> String {
    format!("desktop-launcher-item-{view}")
}

#[component]
/// Start menu overlay, rendered only while open.
///
/// Entries come from the open menu instance, so a re-opened menu is a fresh instance.
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let open_menu = create_memo(move |_| state.with(|state| state.overlay.menu().cloned()));

    let on_keydown = Callback::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            ev.stop_propagation();
            runtime.dispatch_action(ShellAction::ToggleStartMenu);
            a11y::focus_element_by_id(START_BUTTON_ID);
            return;
        }
        a11y::handle_menu_roving_keydown(&ev, START_MENU_ID);
    });

    move || {
        open_menu.get().map(|menu| {
            view! {
                <MenuSurface
                    layout_class="start-menu"
                    id=START_MENU_ID
                    aria_label="Applications"
                    on_keydown=on_keydown
                >
                    {menu
                        .entries
                        .into_iter()
                        .map(|entry| {
                            let command = entry.command;
                            view! {
                                <MenuItem
                                    id=start_menu_item_id(entry.view.as_str())
                                    on_click=Callback::new(move |_| {
                                        runtime.dispatch_action(command.menu_action());
                                    })
                                >
                                    <span class="start-menu-glyph" aria-hidden="true">{entry.glyph}</span>
                                    <span class="start-menu-label">{entry.label}</span>
                                </MenuItem>
                            }
                        })
                        .collect_view()}
                </MenuSurface>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_item_ids_are_scoped_to_the_launcher() {
        assert_eq!(start_menu_item_id("editor"), "desktop-launcher-item-editor");
    }
}
