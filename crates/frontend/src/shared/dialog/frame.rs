use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Dialog frame container (overlay + positioned surface).
///
/// Important: this component intentionally DOES NOT render a header or
/// action buttons. Editor screens render their own compact header so they
/// look identical in a dialog and in a tab.
#[component]
pub fn DialogFrame(
    /// Called when the dialog should close (overlay click, close by host).
    on_close: Callback<()>,
    /// z-index for overlay stacking.
    z_index: i32,
    /// Extra class for the dialog surface (`div.dialog`).
    #[prop(optional)]
    surface_class: Option<String>,
    /// Extra style for the dialog surface (`div.dialog`).
    #[prop(optional)]
    surface_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // We only close if both press and release happened on the overlay itself.
    // This prevents closing when the user selects text inside the dialog and
    // releases the mouse outside.
    let handle_overlay_mouse_down = {
        let is_direct_overlay_event = is_direct_overlay_event;
        move |ev: ev::MouseEvent| {
            overlay_mouse_down.set(is_direct_overlay_event(&ev));
        }
    };

    let handle_overlay_click = {
        let is_direct_overlay_event = is_direct_overlay_event;
        move |ev: ev::MouseEvent| {
            let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
            overlay_mouse_down.set(false);
            if should_close {
                // Defer close to next tick: avoids Leptos event delegation
                // calling a dropped handler when the overlay is removed
                // synchronously during its own click dispatch.
                let on_close = on_close;
                spawn_local(async move {
                    TimeoutFuture::new(0).await;
                    on_close.run(());
                });
            }
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let surface_style_full = move || {
        let extra = surface_style.clone().unwrap_or_default();
        if extra.is_empty() {
            "position: relative;".to_string()
        } else {
            format!("position: relative; {extra}")
        }
    };

    view! {
        <div
            class="dialog-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=move || {
                    if let Some(cls) = surface_class.clone() {
                        format!("dialog {cls}")
                    } else {
                        "dialog".to_string()
                    }
                }
                style=surface_style_full
                on:click=stop_propagation
            >
                {children()}
            </div>
        </div>
    }
}
