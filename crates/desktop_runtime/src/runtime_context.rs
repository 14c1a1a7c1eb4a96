//! Runtime provider and context wiring for the desktop shell.
//!
//! The provider owns the navigator, the preference and navigation mirrors read by the UI, the
//! runtime effect queue, and the single dispatch path every shell action goes through.

use desktop_app_contract::{AppCommand, AppModule, AppServices, ClockFormat, Panel, ViewName};
use leptos::*;
use platform_host::HostServices;

use crate::{
    apps, boot, effect_executor,
    host::DesktopHostContext,
    model::{NavigatorState, ShellPreferences},
    navigator::{Navigator, NavigatorError},
    persistence,
    reducer::{reduce_shell, RuntimeEffect, ShellAction},
};

/// Visibility handle registered with the navigator for one panel.
#[derive(Debug, Clone)]
pub struct PanelHandle {
    view: ViewName,
    visible: RwSignal<bool>,
}

impl PanelHandle {
    pub fn view(&self) -> &ViewName {
        &self.view
    }
}

impl Panel for PanelHandle {
    fn mount(&self) {
        if !self.visible.get_untracked() {
            self.visible.set(true);
        }
    }

    fn unmount(&self) {
        if self.visible.get_untracked() {
            self.visible.set(false);
        }
    }

    fn is_mounted(&self) -> bool {
        self.visible.get_untracked()
    }
}

/// Render-side data for one panel.
#[derive(Clone)]
pub struct PanelSlot {
    pub view: ViewName,
    pub module: AppModule,
    pub visible: RwSignal<bool>,
    pub placeholder: bool,
}

#[derive(Clone, Copy)]
/// Leptos context for reading shell state and dispatching [`ShellAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for side effects.
    pub host: StoredValue<DesktopHostContext>,
    /// The navigator and its registry.
    pub navigator: StoredValue<Navigator<PanelHandle>>,
    /// Panels in registration order, for rendering.
    pub panels: StoredValue<Vec<PanelSlot>>,
    /// Services handed to every mounted panel.
    pub app_services: StoredValue<AppServices>,
    /// Reactive mirror of the navigator state.
    pub state: RwSignal<NavigatorState>,
    /// Current shell preferences.
    pub preferences: RwSignal<ShellPreferences>,
    /// Clock format, split out so panels can read it without the rest of the preferences.
    pub clock_format: RwSignal<ClockFormat>,
    /// Queue of effects emitted by the reducer and drained by the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ShellAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: ShellAction) {
        self.dispatch.call(action);
    }
}

fn shell_action_for(command: AppCommand) -> ShellAction {
    match command {
        AppCommand::Navigate { view } => ShellAction::Navigate { view },
        AppCommand::SetClockFormat { format } => ShellAction::SetClockFormat { format },
        AppCommand::ResetPreferences => ShellAction::ResetPreferences,
    }
}

fn report_dispatch_error(host: StoredValue<DesktopHostContext>, err: &NavigatorError) {
    logging::warn!("shell reducer error: {err}");
    if matches!(err, NavigatorError::UnknownView(_)) {
        host.with_value(|host| host.notify_error("Navigation failed", &err.to_string()));
    }
}

fn install_boot_hydration(runtime: DesktopRuntimeContext, deep_link_view: Option<String>) {
    spawn_local(async move {
        let prefs_store = runtime.host.with_value(|host| host.prefs_store());
        let stored = match persistence::load_shell_preferences(prefs_store.as_ref()).await {
            Ok(stored) => stored,
            Err(err) => {
                logging::warn!("shell preferences ignored: {err}");
                None
            }
        };
        if let Some(preferences) = stored {
            runtime.dispatch_action(ShellAction::HydratePreferences { preferences });
        }

        let Some(boot) = runtime.navigator.try_with_value(|navigator| {
            boot::resolve_initial_view(deep_link_view.as_deref(), navigator.registry())
        }) else {
            return;
        };
        if let Some(err) = &boot.rejected {
            report_dispatch_error(runtime.host, err);
        }

        logging::log!(
            "desktop shell boot: view={} host={}",
            boot.view,
            runtime.host.with_value(|host| host.host_strategy_name())
        );
        runtime.dispatch_action(ShellAction::Navigate { view: boot.view });
    });
}

/// Builds the navigator, state mirrors and dispatch path for `host_services`.
pub(crate) fn build_runtime(host_services: HostServices) -> DesktopRuntimeContext {
    let has_page_renderer = host_services.has_page_renderer();
    let mut slots = Vec::new();
    let registry = apps::build_view_registry(has_page_renderer, |view, _, resolved| {
        let visible = create_rw_signal(false);
        slots.push(PanelSlot {
            view: view.clone(),
            module: resolved.module,
            visible,
            placeholder: resolved.placeholder,
        });
        PanelHandle { view, visible }
    });
    let registry = match registry {
        Ok(registry) => registry,
        Err(err) => {
            logging::warn!("built-in panel catalog rejected: {err}");
            slots.clear();
            crate::registry::ViewRegistry::new()
        }
    };

    let navigator = store_value(Navigator::new(registry));
    let panels = store_value(slots);
    let state = create_rw_signal(NavigatorState::default());
    let preferences = create_rw_signal(ShellPreferences::default());
    let clock_format = create_rw_signal(ClockFormat::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let host = store_value(DesktopHostContext::new(host_services.clone()));

    let dispatch = Callback::new(move |action: ShellAction| {
        let mut prefs = preferences.get_untracked();
        let previous_prefs = prefs.clone();

        // Panel visibility writes are batched so no effect runs while the navigator is borrowed.
        let result = batch(|| {
            navigator.try_update_value(|navigator| reduce_shell(navigator, &mut prefs, action))
        });

        match result {
            Some(Ok(new_effects)) => {
                if prefs != previous_prefs {
                    if prefs.clock != previous_prefs.clock {
                        clock_format.set(prefs.clock);
                    }
                    preferences.set(prefs);
                }
                let next_state = navigator.with_value(|navigator| navigator.state().clone());
                if state.get_untracked() != next_state {
                    state.set(next_state);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Some(Err(err)) => report_dispatch_error(host, &err),
            None => logging::warn!("shell dispatch after runtime disposal"),
        }
    });

    let app_sender = Callback::new(move |command: AppCommand| {
        dispatch.call(shell_action_for(command));
    });
    let app_services = store_value(AppServices::new(
        app_sender,
        clock_format.read_only(),
        &host_services,
    ));

    DesktopRuntimeContext {
        host,
        navigator,
        panels,
        app_services,
        state,
        preferences,
        clock_format,
        effects,
        dispatch,
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted state.
pub fn DesktopProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    /// View requested by the entry URL, if any.
    #[prop(default = None)]
    deep_link_view: Option<String>,
    children: Children,
) -> impl IntoView {
    let runtime = build_runtime(host_services);

    provide_context(runtime);

    effect_executor::install(runtime);
    install_boot_hydration(runtime, deep_link_view);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
