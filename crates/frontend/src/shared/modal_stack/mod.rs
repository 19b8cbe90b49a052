use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: ModalBuilder,
    options: ModalOptions,
}

/// Per-entry presentation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalOptions {
    /// Extra class on the modal surface
    pub modal_class: Option<String>,
    /// Clicking the mask closes the entry.
    pub close_on_overlay: bool,
}

/// Returned by `ModalStackService::push_with`; lets the pushed view close itself.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Application-wide stack of modal views.
///
/// Escape closes only the topmost entry (handled by `ModalHost`).
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            // Next tick: removing a modal synchronously during the originating
            // DOM event would drop the handler that is still running.
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    /// Push a modal; `builder` receives a handle so the view can close itself.
    pub fn push_with<F>(&self, options: ModalOptions, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder: Arc::new(builder),
                options,
            });
        });

        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    pub fn pop(&self) {
        self.stack.update(|s| {
            s.pop();
        });
    }

    pub fn pop_deferred(&self) {
        self.defer(|svc| svc.pop());
    }

    #[cfg(test)]
    fn ids(&self) -> Vec<u64> {
        self.stack.with_untracked(|s| s.iter().map(|e| e.id).collect())
    }
}

/// Renders the modal stack. Mount exactly once, at the application root.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = expect_context::<ModalStackService>();

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && svc.stack.with_untracked(|s| !s.is_empty()) {
                    svc.pop_deferred();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // Host lives as long as the app.
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=move || {
                    svc.stack.get().into_iter().enumerate().collect::<Vec<(usize, ModalEntry)>>()
                }
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    let id = entry.id;
                    let on_close = Callback::new(move |_| svc.close_deferred(id));
                    let view = (entry.builder)(ModalHandle { id, svc });

                    view! {
                        <ModalFrame
                            z_index=1000 + idx as i32
                            on_close=on_close
                            close_on_overlay=entry.options.close_on_overlay
                            modal_class=entry.options.modal_class.clone().unwrap_or_default()
                        >
                            {view}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ModalOptions {
        ModalOptions {
            modal_class: None,
            close_on_overlay: true,
        }
    }

    #[test]
    fn test_push_close_pop() {
        let owner = Owner::new();
        owner.set();

        let svc = ModalStackService::new();
        assert!(!svc.is_open());

        let first = svc.push_with(options(), |_| view! { <div></div> }.into_any());
        svc.push_with(options(), |_| view! { <div></div> }.into_any());
        svc.push_with(options(), |_| view! { <div></div> }.into_any());
        assert_eq!(svc.ids(), vec![1, 2, 3]);

        svc.close(first.id);
        assert_eq!(svc.ids(), vec![2, 3]);

        svc.pop();
        assert_eq!(svc.ids(), vec![2]);
        assert!(svc.is_open());

        svc.pop();
        assert!(!svc.is_open());
    }
}
