//! Calculator panel: an expression display, classic keypad, and results tape.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod engine;

use desktop_app_contract::{AppMountContext, AppServices};
use leptos::ev::KeyboardEvent;
use leptos::*;
use system_ui::prelude::*;

pub use engine::{evaluate, format_number, ExpressionError};
use engine::{keyboard_key, CalcKey, CalculatorState, KEYPAD};

#[component]
/// Calculator panel component.
pub fn CalculatorApp(
    /// Injected runtime services.
    services: AppServices,
) -> impl IntoView {
    let calc = create_rw_signal(CalculatorState::default());
    let notices = services.notices.clone();

    let press = move |key: CalcKey| {
        let mut result = Ok(());
        calc.update(|state| result = state.press(key));
        if let Err(err) = result {
            notices.error("Invalid expression", err.to_string());
        }
    };
    let press = store_value(press);

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        if let Some(key) = keyboard_key(&ev.key()) {
            ev.prevent_default();
            press.with_value(|press| press(key));
        }
    };

    let shell = services.shell;

    view! {
        <AppShell layout_class="app-calculator-shell" aria_label="Calculator">
            <ToolBar aria_label="Calculator actions">
                <Button on_click=Callback::new(move |_| shell.go_home())>"Back"</Button>
                <Button
                    variant=ButtonVariant::Danger
                    on_click=Callback::new(move |_| press.with_value(|press| press(CalcKey::Clear)))
                >
                    "C"
                </Button>
                <Button on_click=Callback::new(move |_| press.with_value(|press| press(CalcKey::Backspace)))>
                    "Back Space"
                </Button>
                <Button
                    variant=ButtonVariant::Quiet
                    on_click=Callback::new(move |_| calc.update(|state| state.clear_tape()))
                >
                    "Clear Tape"
                </Button>
            </ToolBar>

            <div class="calculator-workspace" tabindex="0" on:keydown=on_keydown>
                <section class="calculator-main" aria-label="Calculator keypad">
                    <TextField
                        variant=FieldVariant::Inset
                        layout_class="calc-display"
                        aria_label="Expression"
                        readonly=true
                        value=Signal::derive(move || calc.with(|state| state.display().to_string()))
                    />

                    <Grid columns=4 layout_class="calc-keypad" role="group" aria_label="Calculator keys">
                        {KEYPAD
                            .iter()
                            .map(|spec| {
                                let key = spec.key;
                                view! {
                                    <Button
                                        layout_class=spec.class_name
                                        id=format!("calc-key-{}", spec.id)
                                        variant=if key == CalcKey::Equals {
                                            ButtonVariant::Primary
                                        } else {
                                            ButtonVariant::Standard
                                        }
                                        on_click=Callback::new(move |_| press.with_value(|press| press(key)))
                                    >
                                        {spec.label}
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </Grid>
                </section>

                <aside class="calc-tape" aria-label="Recent calculations">
                    <Show
                        when=move || calc.with(|state| !state.tape().is_empty())
                        fallback=|| view! { <p class="calc-empty-tape">"Results appear here."</p> }
                    >
                        <ul class="calc-tape-list">
                            <For
                                each=move || {
                                    let mut items = calc.with(|state| state.tape().to_vec());
                                    items.reverse();
                                    items
                                }
                                key=|item| item.id
                                let:item
                            >
                                <li class="calc-tape-item">
                                    <span class="calc-tape-expr">{item.expression}</span>
                                    <span class="calc-tape-result">{format!("= {}", item.result)}</span>
                                </li>
                            </For>
                        </ul>
                    </Show>
                </aside>
            </div>

            <StatusBar>
                <span>"Keys: 0-9 . + - * / Enter Backspace Esc"</span>
            </StatusBar>
        </AppShell>
    }
}

/// Mounts the calculator panel for the runtime app catalog.
pub fn mount(context: AppMountContext) -> View {
    view! { <CalculatorApp services=context.services /> }.into_view()
}
