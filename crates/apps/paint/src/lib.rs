//! Freehand paint panel.

mod canvas;

use desktop_app_contract::{AppMountContext, AppServices};
use leptos::ev::PointerEvent;
use leptos::html::Canvas;
use leptos::*;
use system_ui::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::CanvasRenderingContext2d;

pub use canvas::{choose_color, PaintCanvas, PaintColor, PaintError, Point, Segment, PEN_WIDTH};

const CANVAS_WIDTH: u32 = 640;
const CANVAS_HEIGHT: u32 = 400;

fn context_2d(canvas: &web_sys::HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_segment(ctx: &CanvasRenderingContext2d, segment: &Segment) {
    ctx.set_stroke_style_str(&segment.color.to_hex());
    ctx.set_line_width(segment.width);
    ctx.set_line_cap("round");
    ctx.begin_path();
    ctx.move_to(segment.from.x, segment.from.y);
    ctx.line_to(segment.to.x, segment.to.y);
    ctx.stroke();
}

fn redraw(ctx: &CanvasRenderingContext2d, segments: &[Segment]) {
    ctx.clear_rect(0.0, 0.0, f64::from(CANVAS_WIDTH), f64::from(CANVAS_HEIGHT));
    for segment in segments {
        draw_segment(ctx, segment);
    }
}

fn pointer_point(ev: &PointerEvent) -> Point {
    Point {
        x: f64::from(ev.offset_x()),
        y: f64::from(ev.offset_y()),
    }
}

#[component]
/// Paint panel component.
pub fn PaintApp(
    /// Injected runtime services.
    services: AppServices,
) -> impl IntoView {
    let canvas = create_rw_signal(PaintCanvas::default());
    let canvas_ref = create_node_ref::<Canvas>();
    let services = store_value(services);
    let shell = services.with_value(|services| services.shell);

    // Full repaint after clear; strokes draw incrementally below.
    let repaint = move || {
        if let Some(element) = canvas_ref.get_untracked() {
            if let Some(ctx) = context_2d(&element) {
                canvas.with_untracked(|canvas| redraw(&ctx, canvas.segments()));
            }
        }
    };

    let on_pointer_down = move |ev: PointerEvent| {
        ev.prevent_default();
        canvas.update(|canvas| canvas.begin_stroke(pointer_point(&ev)));
    };

    let on_pointer_move = move |ev: PointerEvent| {
        if !canvas.with_untracked(PaintCanvas::is_drawing) {
            return;
        }
        let mut drawn = None;
        canvas.update(|canvas| drawn = canvas.extend_stroke(pointer_point(&ev)));
        if let (Some(segment), Some(element)) = (drawn, canvas_ref.get_untracked()) {
            if let Some(ctx) = context_2d(&element) {
                draw_segment(&ctx, &segment);
            }
        }
    };

    let end_stroke = move |_: PointerEvent| canvas.update(PaintCanvas::end_stroke);

    let clear = move |_| {
        canvas.update(PaintCanvas::clear);
        repaint();
    };

    let select_color = move |_| {
        let services = services.get_value();
        let current = canvas.with_untracked(PaintCanvas::color);
        spawn_local(async move {
            match choose_color(services.color_picker.as_ref(), current).await {
                Ok(Some(color)) => canvas.update(|canvas| canvas.set_color(color)),
                Ok(None) => {}
                Err(err) => services.notices.error("Color not changed", err.to_string()),
            }
        });
    };

    view! {
        <AppShell layout_class="app-paint-shell" aria_label="Paint">
            <ToolBar aria_label="Paint actions">
                <Button on_click=Callback::new(move |_| shell.go_home())>"Back"</Button>
                <Button on_click=Callback::new(select_color)>"Select Color"</Button>
                <Button variant=ButtonVariant::Danger on_click=Callback::new(clear)>"Clear"</Button>
                <span
                    class="paint-swatch"
                    aria-label="Current color"
                    style:background-color=move || canvas.with(|canvas| canvas.color().to_hex())
                ></span>
            </ToolBar>

            <canvas
                class="paint-canvas"
                node_ref=canvas_ref
                width=CANVAS_WIDTH
                height=CANVAS_HEIGHT
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=end_stroke
                on:pointerleave=end_stroke
            ></canvas>

            <StatusBar>
                <span>{move || format!("Color: {}", canvas.with(|canvas| canvas.color().to_hex()))}</span>
                <span>{move || format!("Segments: {}", canvas.with(|canvas| canvas.segments().len()))}</span>
            </StatusBar>
        </AppShell>
    }
}

/// Mounts the paint panel for the runtime app catalog.
pub fn mount(context: AppMountContext) -> View {
    view! { <PaintApp services=context.services /> }.into_view()
}
