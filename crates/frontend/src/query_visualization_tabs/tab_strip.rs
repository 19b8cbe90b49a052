use contracts::shared::visualization::{QueryResult, RenderContext, Visualization};
use leptos::prelude::*;
use thaw::*;

use super::active_tab::bind_active_tab;
use super::model::{
    bar_actions, build_tabs, order_visualizations, tab_key, BarAction, DeleteRequest,
};
use super::tab_label::TabLabel;
use crate::shared::icons::icon;
use crate::visualizations::VisualizationRenderer;

/// Tab strip over the visualizations of a query.
///
/// Controlled view: the parent owns `selected_tab` and updates it from
/// `on_change_tab`; a valid `selected_tab` always decides the active tab.
/// While it names no listed visualization the widget keeps its own current
/// tab, starting at the first one.
#[component]
pub fn QueryVisualizationTabs(
    #[prop(optional, into)] visualizations: Signal<Vec<Visualization>>,
    #[prop(optional, into)] query_result: Signal<Option<QueryResult>>,
    #[prop(optional, into)] selected_tab: Signal<Option<i64>>,
    #[prop(optional, into)] show_new_visualization_button: Signal<bool>,
    #[prop(optional, into)] can_delete_visualizations: Signal<bool>,
    #[prop(optional)] on_change_tab: Option<Callback<i64>>,
    #[prop(optional)] on_click_new_visualization: Option<Callback<()>>,
    #[prop(optional)] on_delete_visualization: Option<Callback<Visualization>>,
    /// Draws a tab body; defaults to the built-in renderers.
    #[prop(optional)]
    renderer: Option<VisualizationRenderer>,
) -> impl IntoView {
    let renderer = renderer.unwrap_or_default();
    let ordered = Memo::new(move |_| order_visualizations(&visualizations.get()));

    let widget_key = bind_active_tab(ordered, selected_tab, on_change_tab);

    let tabs = move || {
        let can_delete = can_delete_visualizations.get();
        ordered.with(|list| build_tabs(list, can_delete))
    };

    let active_pane = move || {
        let key = widget_key.get();
        ordered
            .with(|list| list.iter().find(|v| tab_key(v.id) == key).cloned())
            .map(|visualization| {
                view! {
                    <VisualizationPane
                        visualization=visualization
                        query_result=query_result.get()
                        renderer=renderer.clone()
                    />
                }
            })
    };

    let extra_content = move || {
        bar_actions(show_new_visualization_button.get())
            .into_iter()
            .map(|action| match action {
                BarAction::NewVisualization => view! {
                    <Button
                        class="query-visualization-tabs__new".to_string()
                        on_click=move |_| {
                            if let Some(on_click) = on_click_new_visualization {
                                on_click.run(());
                            }
                        }
                    >
                        {icon("plus")}
                        <span class="m-l-5 hidden-xs">"New Visualization"</span>
                    </Button>
                },
            })
            .collect_view()
    };

    view! {
        <div class="query-visualization-tabs">
            <div class="query-visualization-tabs__bar">
                <TabList selected_value=widget_key>
                    {move || {
                        tabs()
                            .into_iter()
                            .map(|tab| {
                                let on_delete = Callback::new({
                                    let request = DeleteRequest::new(tab.visualization.clone());
                                    move |_: ()| {
                                        log::info!(
                                            "deleting visualization {} ({})",
                                            request.target.id,
                                            request.target.name
                                        );
                                        if let Some(on_delete_visualization) = on_delete_visualization {
                                            on_delete_visualization.run(request.target.clone());
                                        }
                                    }
                                });
                                view! {
                                    <Tab value=tab.key>
                                        <TabLabel
                                            visualization_name=tab.visualization.name
                                            can_delete=tab.deletable
                                            on_delete=on_delete
                                        />
                                    </Tab>
                                }
                            })
                            .collect_view()
                    }}
                </TabList>
                <div class="query-visualization-tabs__extra">{extra_content}</div>
            </div>
            <div class="query-visualization-tabs__pane">{active_pane}</div>
        </div>
    }
}

/// Body of the active tab. Unmounted as soon as another tab is selected.
#[component]
fn VisualizationPane(
    visualization: Visualization,
    query_result: Option<QueryResult>,
    renderer: VisualizationRenderer,
) -> impl IntoView {
    let id = visualization.id;
    log::debug!("visualization pane {id} created");
    on_cleanup(move || log::debug!("visualization pane {id} destroyed"));

    view! {
        <div class="visualization-pane" data-visualization-id=id.to_string()>
            {renderer.render(&visualization, query_result.as_ref(), RenderContext::Query)}
        </div>
    }
}
