use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::shared::confirm::{confirm, ConfirmRequest, ConfirmStyle};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;

pub fn delete_visualization_prompt() -> ConfirmRequest {
    ConfirmRequest::new(
        "Delete Visualization",
        "Are you sure you want to delete this visualization?",
    )
    .ok_text("Delete")
    .ok_type(ConfirmStyle::Danger)
    .mask_closable(true)
    .auto_focus(None)
}

/// Tab title with an optional delete control.
///
/// The control never selects the tab it sits in, and `on_delete` runs only
/// after the user confirms the prompt.
#[component]
pub fn TabLabel(
    #[prop(into)] visualization_name: String,
    #[prop(optional)] can_delete: bool,
    #[prop(optional)] on_delete: Option<Callback<()>>,
) -> impl IntoView {
    let modal_stack = expect_context::<ModalStackService>();

    let handle_delete = move |ev: MouseEvent| {
        ev.stop_propagation();
        confirm(modal_stack, delete_visualization_prompt(), move || {
            if let Some(on_delete) = on_delete {
                on_delete.run(());
            }
        });
    };

    view! {
        <span class="query-visualization-tab">
            <span class="query-visualization-tab__name">{visualization_name}</span>
            {can_delete.then(|| view! {
                <a
                    class="hidden-xs delete-visualization-button"
                    title="Delete"
                    on:click=handle_delete
                >
                    {icon("x")}
                </a>
            })}
        </span>
    }
}
