//! Text editor panel with open/save through host file dialogs.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod document;

use desktop_app_contract::{AppMountContext, AppServices};
use leptos::*;
use system_ui::prelude::*;

pub use document::{
    open_document, save_document, with_default_extension, EditorDocument, EditorError,
    DEFAULT_EXTENSION,
};

#[component]
/// Editor panel component.
pub fn NotepadApp(
    /// Injected runtime services.
    services: AppServices,
) -> impl IntoView {
    let document = create_rw_signal(EditorDocument::default());
    let busy = create_rw_signal(false);
    let services = store_value(services);
    let shell = services.with_value(|services| services.shell);

    let open = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let services = services.get_value();
        spawn_local(async move {
            match open_document(services.file_dialogs.as_ref(), services.files.as_ref()).await {
                Ok(Some(opened)) => document.set(opened),
                Ok(None) => {}
                Err(err) => services.notices.error("Open failed", err.to_string()),
            }
            busy.set(false);
        });
    };

    let save = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let services = services.get_value();
        let snapshot = document.get_untracked();
        spawn_local(async move {
            let saved = save_document(
                services.file_dialogs.as_ref(),
                services.files.as_ref(),
                &snapshot,
            )
            .await;
            match saved {
                Ok(Some(path)) => document.update(|doc| doc.path = Some(path)),
                Ok(None) => {}
                Err(err) => services.notices.error("Save failed", err.to_string()),
            }
            busy.set(false);
        });
    };

    view! {
        <AppShell layout_class="app-notepad-shell" aria_label="Editor">
            <ToolBar aria_label="Editor actions">
                <Button on_click=Callback::new(move |_| shell.go_home())>"Back"</Button>
                <Button disabled=busy on_click=Callback::new(open)>"Open"</Button>
                <Button variant=ButtonVariant::Primary disabled=busy on_click=Callback::new(save)>
                    "Save"
                </Button>
            </ToolBar>

            <TextArea
                layout_class="notepad-page"
                aria_label="Document text"
                value=Signal::derive(move || document.with(|doc| doc.text.clone()))
                on_input=Callback::new(move |ev| {
                    let text = event_target_value(&ev);
                    document.update(|doc| doc.text = text);
                })
            />

            <StatusBar>
                <span>{move || format!("Lines: {}", document.with(EditorDocument::line_count))}</span>
                <span>{move || format!("Chars: {}", document.with(EditorDocument::char_count))}</span>
                <span>
                    {move || document.with(|doc| doc.path.clone().unwrap_or_else(|| "Unsaved".into()))}
                </span>
            </StatusBar>
        </AppShell>
    }
}

/// Mounts the editor panel for the runtime app catalog.
pub fn mount(context: AppMountContext) -> View {
    view! { <NotepadApp services=context.services /> }.into_view()
}
