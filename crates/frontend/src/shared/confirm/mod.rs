//! Confirmation prompts on top of the modal stack.
//!
//! A prompt runs its action only on an explicit click of the confirm button,
//! and at most once. Cancel, Escape and (when allowed) a mask click dismiss it
//! without side effects.

use crate::shared::modal_stack::{ModalHandle, ModalOptions, ModalStackService};
use leptos::prelude::*;
use std::sync::{Arc, Mutex};
use thaw::*;

/// Visual weight of the confirm button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmStyle {
    #[default]
    Primary,
    /// Destructive action
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmButton {
    Ok,
    Cancel,
}

/// Everything a prompt shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmRequest {
    pub title: String,
    pub content: String,
    pub ok_text: String,
    pub cancel_text: String,
    pub ok_type: ConfirmStyle,
    pub mask_closable: bool,
    /// Button focused when the prompt opens; `None` focuses nothing.
    pub auto_focus: Option<ConfirmButton>,
}

impl ConfirmRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ok_text: "OK".to_string(),
            cancel_text: "Cancel".to_string(),
            ok_type: ConfirmStyle::Primary,
            mask_closable: false,
            auto_focus: Some(ConfirmButton::Ok),
        }
    }

    pub fn ok_text(mut self, text: impl Into<String>) -> Self {
        self.ok_text = text.into();
        self
    }

    pub fn ok_type(mut self, style: ConfirmStyle) -> Self {
        self.ok_type = style;
        self
    }

    pub fn mask_closable(mut self, closable: bool) -> Self {
        self.mask_closable = closable;
        self
    }

    pub fn auto_focus(mut self, button: Option<ConfirmButton>) -> Self {
        self.auto_focus = button;
        self
    }

    fn ok_class(&self) -> &'static str {
        match self.ok_type {
            ConfirmStyle::Primary => "confirm__ok",
            ConfirmStyle::Danger => "confirm__ok button--danger",
        }
    }
}

type PendingAction = Box<dyn FnOnce() + Send>;

/// A confirm action that can run at most once.
///
/// Clones share the same slot: whichever clone fires first wins.
#[derive(Clone)]
pub struct ConfirmOnce {
    action: Arc<Mutex<Option<PendingAction>>>,
}

impl ConfirmOnce {
    pub fn new(action: impl FnOnce() + Send + 'static) -> Self {
        Self {
            action: Arc::new(Mutex::new(Some(Box::new(action)))),
        }
    }

    /// Runs the action if it is still pending. Returns whether it ran.
    pub fn fire(&self) -> bool {
        let taken = self.action.lock().ok().and_then(|mut slot| slot.take());
        match taken {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }

    /// Drops the action without running it.
    pub fn discard(&self) {
        if let Ok(mut slot) = self.action.lock() {
            slot.take();
        }
    }

    #[cfg(test)]
    fn is_pending(&self) -> bool {
        self.action.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

/// Opens a prompt for `request`; `on_ok` runs only after explicit confirmation.
pub fn confirm(
    modal_stack: ModalStackService,
    request: ConfirmRequest,
    on_ok: impl FnOnce() + Send + 'static,
) -> ModalHandle {
    let once = ConfirmOnce::new(on_ok);
    let options = ModalOptions {
        modal_class: Some("confirm-modal".to_string()),
        close_on_overlay: request.mask_closable,
    };

    log::debug!("confirm prompt opened: {}", request.title);

    modal_stack.push_with(options, move |handle| {
        view! { <ConfirmDialog request=request.clone() once=once.clone() handle=handle /> }
            .into_any()
    })
}

#[component]
fn ConfirmDialog(request: ConfirmRequest, once: ConfirmOnce, handle: ModalHandle) -> impl IntoView {
    let handle_ok = {
        let once = once.clone();
        let handle = handle.clone();
        move |_| {
            if once.fire() {
                log::debug!("confirm prompt accepted");
            }
            handle.close();
        }
    };

    let handle_cancel = move |_| {
        once.discard();
        handle.close();
    };

    let ok_class = request.ok_class().to_string();
    let focus_ok = request.auto_focus == Some(ConfirmButton::Ok);
    let focus_cancel = request.auto_focus == Some(ConfirmButton::Cancel);

    view! {
        <div class="confirm">
            <div class="confirm__header">
                <h2 class="modal-title">{request.title}</h2>
            </div>
            <div class="confirm__body">{request.content}</div>
            <div class="confirm__actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    attr:autofocus=focus_cancel
                    on_click=handle_cancel
                >
                    {request.cancel_text}
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    class=ok_class
                    attr:autofocus=focus_ok
                    on_click=handle_ok
                >
                    {request.ok_text}
                </Button>
            </div>
        </div>
    }
}
