use crate::query_page::QueryPage;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Confirmation prompts are pushed here from anywhere below.
    provide_context(ModalStackService::new());

    view! {
        <ConfigProvider>
            <QueryPage />
            <ModalHost />
        </ConfigProvider>
    }
}
