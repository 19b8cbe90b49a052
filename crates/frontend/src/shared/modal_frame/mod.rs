use gloo_timers::future::TimeoutFuture;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// True when the event was dispatched on the element carrying the handler,
/// not bubbled up from inside it.
fn on_self(ev: &MouseEvent) -> bool {
    matches!((ev.target(), ev.current_target()), (Some(t), Some(ct)) if t == ct)
}

fn surface_class(modal_class: Option<String>) -> String {
    modal_class
        .filter(|cls| !cls.is_empty())
        .map(|cls| format!("modal {cls}"))
        .unwrap_or_else(|| "modal".to_string())
}

fn overlay_layer(z_index: Option<i32>) -> String {
    format!("z-index: {};", z_index.unwrap_or(1000))
}

/// Mask and surface around one modal of the stack.
///
/// The surface content is entirely up to the pushed view.
#[component]
pub fn ModalFrame(
    /// Mask click asked to close.
    on_close: Callback<()>,
    /// Default: true.
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    /// Default: 1000.
    #[prop(optional)]
    z_index: Option<i32>,
    /// Added to `modal` on the surface.
    #[prop(optional)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let mask_closes = close_on_overlay.unwrap_or(true);
    // Set on mousedown on the mask itself; a drag that starts on the surface
    // and ends on the mask leaves it unset.
    let pressed_on_mask = RwSignal::new(false);

    let on_mask_down = move |ev: MouseEvent| pressed_on_mask.set(on_self(&ev));

    let on_mask_click = move |ev: MouseEvent| {
        let close = mask_closes && pressed_on_mask.get_untracked() && on_self(&ev);
        pressed_on_mask.set(false);
        if close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = surface_class(modal_class);

    view! {
        <div
            class="modal-overlay"
            style=overlay_layer(z_index)
            on:mousedown=on_mask_down
            on:click=on_mask_click
        >
            <div
                class=surface_class
                role="dialog"
                aria-modal="true"
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
