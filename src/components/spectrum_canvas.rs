use leptos::ev::MouseEvent;
use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::viewer::{with_viewer, ViewerId};

/// Canvas bound to a registered viewer: mouse drives the marker, window
/// keydown drives the key table.
#[component]
pub fn SpectrumCanvas(viewer: ViewerId) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    Effect::new(move || {
        let Some(canvas_el) = canvas_ref.get() else { return };
        let canvas: &HtmlCanvasElement = canvas_el.as_ref();
        let canvas = canvas.clone();
        with_viewer(viewer, |v| v.attach(canvas));
    });

    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        let handled = with_viewer(viewer, |v| v.handle_key(&ev.key())).unwrap_or(false);
        if handled {
            ev.prevent_default();
        }
    });
    on_cleanup(move || {
        keydown.remove();
        with_viewer(viewer, |v| v.detach());
    });

    let on_mousedown = move |ev: MouseEvent| {
        with_viewer(viewer, |v| v.pointer_down(ev.offset_x() as f64));
    };
    let on_mousemove = move |ev: MouseEvent| {
        with_viewer(viewer, |v| v.pointer_move(ev.offset_x() as f64));
    };
    let on_mouseup = move |_: MouseEvent| {
        with_viewer(viewer, |v| v.pointer_up());
    };
    let on_mouseleave = move |_: MouseEvent| {
        with_viewer(viewer, |v| v.pointer_leave());
    };

    view! {
        <canvas
            class="spectrum-canvas"
            style="display:block;width:100%;height:100%"
            node_ref=canvas_ref
            on:mousedown=on_mousedown
            on:mousemove=on_mousemove
            on:mouseup=on_mouseup
            on:mouseleave=on_mouseleave
        />
    }
}
