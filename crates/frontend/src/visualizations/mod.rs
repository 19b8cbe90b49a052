//! Renderer seam between the tab strip and whatever draws a visualization.

pub mod counter;
pub mod table;

use contracts::shared::visualization::{QueryResult, RenderContext, Visualization, VisualizationKind};
use leptos::prelude::*;
use std::sync::Arc;

use crate::shared::date_utils::format_timestamp;

type RenderFn = dyn Fn(&Visualization, Option<&QueryResult>, RenderContext) -> AnyView + Send + Sync;

/// `render(visualization, query_result, context) -> view`, as a cloneable handle.
#[derive(Clone)]
pub struct VisualizationRenderer {
    render: Arc<RenderFn>,
}

impl VisualizationRenderer {
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&Visualization, Option<&QueryResult>, RenderContext) -> AnyView + Send + Sync + 'static,
    {
        Self {
            render: Arc::new(render),
        }
    }

    pub fn render(
        &self,
        visualization: &Visualization,
        query_result: Option<&QueryResult>,
        context: RenderContext,
    ) -> AnyView {
        (self.render)(visualization, query_result, context)
    }
}

impl Default for VisualizationRenderer {
    fn default() -> Self {
        Self::new(render_builtin)
    }
}

/// Built-in renderers. Kinds without one (charts, plugins) fall back to the table.
fn render_builtin(
    visualization: &Visualization,
    query_result: Option<&QueryResult>,
    context: RenderContext,
) -> AnyView {
    let Some(result) = query_result.cloned() else {
        return view! { <div class="visualization-renderer__empty">"No data"</div> }.into_any();
    };

    let updated = result.retrieved_at.as_ref().map(format_timestamp);
    let body = match visualization.kind {
        VisualizationKind::Counter => view! {
            <counter::CounterView visualization=visualization.clone() result=result />
        }
        .into_any(),
        _ => view! { <table::TableView result=result /> }.into_any(),
    };

    view! {
        <div class="visualization-renderer" data-context=context.as_str()>
            {body}
            {updated.map(|at| view! {
                <div class="visualization-renderer__footer">{format!("Updated {at}")}</div>
            })}
        </div>
    }
    .into_any()
}
