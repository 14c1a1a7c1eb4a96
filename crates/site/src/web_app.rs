use desktop_runtime::{deep_link_view, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::build_host_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Desk Shell" />
        <Meta name="description" content="A single-window desktop shell with built-in panels." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/*any" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

/// Mounts the shell with browser host services and the `?view=` deep link.
#[component]
pub fn DesktopEntry() -> impl IntoView {
    let location = use_location();
    let deep_link = location.search.with_untracked(|search| deep_link_view(search));
    let host_services = build_host_services();

    view! {
        <DesktopProvider host_services=host_services deep_link_view=deep_link>
            <DesktopShell />
        </DesktopProvider>
    }
}
