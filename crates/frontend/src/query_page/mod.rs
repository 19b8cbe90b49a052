//! Query page: owns the visualization list and tab selection.

pub mod config;
pub mod sample;
pub mod state;

use contracts::shared::visualization::Visualization;
use leptos::prelude::*;

use crate::query_visualization_tabs::QueryVisualizationTabs;
use config::QueryPageConfig;
use sample::{sample_query_result, sample_visualizations, QUERY_NAME};
use state::QueryPageState;

#[component]
pub fn QueryPage() -> impl IntoView {
    let config = QueryPageConfig::from_location();
    let state = RwSignal::new(QueryPageState::new(sample_visualizations(), config.selected));
    let query_result = RwSignal::new(Some(sample_query_result()));

    let visualizations = Signal::derive(move || state.with(|s| s.visualizations.clone()));
    let selected = Signal::derive(move || state.with(|s| s.selected));

    // Keep ?selected= in sync with the current tab.
    Effect::new({
        let config = config.clone();
        move |_| {
            let page_config = QueryPageConfig {
                selected: selected.get(),
                ..config.clone()
            };
            page_config.replace_location();
        }
    });

    let on_change_tab = Callback::new(move |id: i64| state.update(|s| s.select(id)));

    let on_click_new_visualization = Callback::new(move |_: ()| {
        let mut id = 0;
        state.update(|s| id = s.add_table());
        log::info!("visualization {id} added");
    });

    let on_delete_visualization = Callback::new(move |visualization: Visualization| {
        let mut removed = None;
        state.update(|s| removed = s.remove(visualization.id));
        match removed {
            Some(v) => log::info!("visualization {} ({}) deleted", v.id, v.name),
            None => log::warn!("visualization {} is not on this page", visualization.id),
        }
    });

    view! {
        <div class="query-page">
            <h1 class="query-page__title">{QUERY_NAME}</h1>
            <QueryVisualizationTabs
                visualizations=visualizations
                query_result=query_result
                selected_tab=selected
                show_new_visualization_button=config.show_new
                can_delete_visualizations=config.can_edit
                on_change_tab=on_change_tab
                on_click_new_visualization=on_click_new_visualization
                on_delete_visualization=on_delete_visualization
            />
        </div>
    }
}
