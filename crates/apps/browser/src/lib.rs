//! URL viewer panel and the placeholder bound when no page renderer is available.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use desktop_app_contract::{AppMountContext, AppServices, ShellService};
use leptos::ev::KeyboardEvent;
use leptos::*;
use platform_host::{normalize_page_url, PageRenderer, RenderedPage};
use system_ui::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Page load failures.
pub enum BrowserError {
    /// Address text is not a usable `http`/`https` URL.
    #[error("{0}")]
    InvalidAddress(String),
    /// The renderer could not load the page.
    #[error("could not load {url}: {message}")]
    LoadFailed {
        /// Normalized URL.
        url: String,
        /// Renderer error text.
        message: String,
    },
}

/// Address bar text and the last page that loaded successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserState {
    /// Text in the address field.
    pub address: String,
    /// Page currently shown; kept when a later load fails.
    pub page: Option<RenderedPage>,
}

impl BrowserState {
    /// Records a load result. Failures leave the current page and address in place.
    pub fn apply_load(&mut self, result: &Result<RenderedPage, BrowserError>) {
        if let Ok(page) = result {
            self.address = page.url.clone();
            self.page = Some(page.clone());
        }
    }
}

/// Normalizes `address` and asks the renderer for it.
///
/// # Errors
///
/// Returns [`BrowserError`] for unusable addresses and renderer failures.
pub async fn load_address(
    renderer: &dyn PageRenderer,
    address: &str,
) -> Result<RenderedPage, BrowserError> {
    let url = normalize_page_url(address).map_err(BrowserError::InvalidAddress)?;
    renderer
        .load_page(&url)
        .await
        .map_err(|message| BrowserError::LoadFailed {
            url: url.clone(),
            message,
        })
}

#[component]
/// Browser panel component backed by a host page renderer.
pub fn BrowserApp(
    /// Injected runtime services.
    services: AppServices,
    /// Renderer used for every load.
    renderer: Rc<dyn PageRenderer>,
) -> impl IntoView {
    let state = create_rw_signal(BrowserState::default());
    let loading = create_rw_signal(false);
    let renderer = store_value(renderer);
    let notices = store_value(services.notices.clone());
    let shell = services.shell;

    let go = move || {
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        let address = state.with_untracked(|state| state.address.clone());
        let renderer = renderer.get_value();
        spawn_local(async move {
            let result = load_address(renderer.as_ref(), &address).await;
            if let Err(err) = &result {
                notices.with_value(|notices| notices.error("Page not loaded", err.to_string()));
            }
            state.update(|state| state.apply_load(&result));
            loading.set(false);
        });
    };

    let on_keydown = Callback::new(move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            go();
        }
    });

    view! {
        <AppShell layout_class="app-browser-shell" aria_label="Browser">
            <ToolBar aria_label="Navigation">
                <Button on_click=Callback::new(move |_| shell.go_home())>"Back"</Button>
                <TextField
                    layout_class="browser-address"
                    aria_label="Address"
                    placeholder="example.com"
                    value=Signal::derive(move || state.with(|state| state.address.clone()))
                    on_input=Callback::new(move |ev| {
                        let address = event_target_value(&ev);
                        state.update(|state| state.address = address);
                    })
                    on_keydown=on_keydown
                />
                <Button
                    variant=ButtonVariant::Primary
                    disabled=loading
                    on_click=Callback::new(move |_| go())
                >
                    "Go"
                </Button>
            </ToolBar>

            <Show
                when=move || state.with(|state| state.page.is_some())
                fallback=|| view! { <p class="browser-empty">"Enter an address and press Go."</p> }
            >
                <iframe
                    class="browser-frame"
                    title="Page"
                    src=move || state.with(|state| state.page.as_ref().map(|page| page.url.clone()))
                ></iframe>
            </Show>

            <StatusBar>
                <span>
                    {move || {
                        if loading.get() {
                            "Loading...".to_string()
                        } else {
                            state.with(|state| {
                                state
                                    .page
                                    .as_ref()
                                    .map(|page| page.title.clone())
                                    .unwrap_or_else(|| "No page".to_string())
                            })
                        }
                    }}
                </span>
            </StatusBar>
        </AppShell>
    }
}

#[component]
/// Informational panel bound to the browser view when no renderer is available.
pub fn BrowserUnavailable(
    /// Navigation service for the back button.
    shell: ShellService,
) -> impl IntoView {
    view! {
        <AppShell layout_class="app-browser-shell" aria_label="Browser">
            <ToolBar aria_label="Navigation">
                <Button on_click=Callback::new(move |_| shell.go_home())>"Back"</Button>
            </ToolBar>
            <Stack padding=LayoutPadding::Md layout_class="browser-unavailable">
                <h2>"Browser unavailable"</h2>
                <p>
                    "This build does not include an embeddable page renderer. "
                    "Rebuild with the `embedded-browser` feature to browse pages here."
                </p>
            </Stack>
        </AppShell>
    }
}

/// Mounts the browser panel; falls back to the placeholder without a renderer.
pub fn mount(context: AppMountContext) -> View {
    let services = context.services;
    match services.page_renderer.clone() {
        Some(renderer) => view! { <BrowserApp services=services renderer=renderer /> }.into_view(),
        None => view! { <BrowserUnavailable shell=services.shell /> }.into_view(),
    }
}

/// Mounts the placeholder panel.
pub fn mount_placeholder(context: AppMountContext) -> View {
    view! { <BrowserUnavailable shell=context.services.shell /> }.into_view()
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryPageRenderer;
    use pretty_assertions::assert_eq;

    use super::*;

    fn renderer() -> MemoryPageRenderer {
        let renderer = MemoryPageRenderer::default();
        renderer.insert_page("http://example.com/", "Example Domain");
        renderer
    }

    #[test]
    fn bare_host_gets_http_prefix_and_loads() {
        let renderer = renderer();
        let mut state = BrowserState::default();

        let result = block_on(load_address(&renderer, "example.com"));
        state.apply_load(&result);

        assert_eq!(
            state.page,
            Some(RenderedPage {
                url: "http://example.com/".into(),
                title: "Example Domain".into(),
            })
        );
        assert_eq!(state.address, "http://example.com/");
    }

    #[test]
    fn failed_load_keeps_last_page() {
        let renderer = renderer();
        let mut state = BrowserState::default();
        state.apply_load(&block_on(load_address(&renderer, "example.com")));
        let before = state.clone();

        let unreachable = block_on(load_address(&renderer, "https://nowhere.test"));
        state.apply_load(&unreachable);
        let invalid = block_on(load_address(&renderer, "   "));
        state.apply_load(&invalid);

        assert!(matches!(unreachable, Err(BrowserError::LoadFailed { .. })));
        assert!(matches!(invalid, Err(BrowserError::InvalidAddress(_))));
        assert_eq!(state, before);
    }
}
