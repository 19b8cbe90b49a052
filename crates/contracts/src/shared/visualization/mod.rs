//! Visualizations attached to a saved query and the data they render.

pub mod query_result;

pub use query_result::*;

use serde::{Deserialize, Serialize};

/// A named, renderable chart/table definition attached to a query.
///
/// `id` is unique and stable within a query. `options` belongs to the
/// renderer and is never inspected by the tab strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visualization {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: VisualizationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub options: serde_json::Value,
}

impl Visualization {
    pub fn new(id: i64, name: impl Into<String>, kind: VisualizationKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            description: None,
            options: serde_json::Value::Null,
        }
    }

    pub fn with_options(mut self, options: serde_json::Value) -> Self {
        self.options = options;
        self
    }
}

/// Renderer type tag, serialized as the upper-case name (`"TABLE"`, `"CHART"`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VisualizationKind {
    #[default]
    Table,
    Chart,
    Counter,
    /// Any renderer type this build does not know about.
    Other(String),
}

impl From<String> for VisualizationKind {
    fn from(tag: String) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "TABLE" => Self::Table,
            "CHART" => Self::Chart,
            "COUNTER" => Self::Counter,
            _ => Self::Other(tag),
        }
    }
}

impl From<VisualizationKind> for String {
    fn from(kind: VisualizationKind) -> Self {
        match kind {
            VisualizationKind::Table => "TABLE".to_string(),
            VisualizationKind::Chart => "CHART".to_string(),
            VisualizationKind::Counter => "COUNTER".to_string(),
            VisualizationKind::Other(tag) => tag,
        }
    }
}

/// Display context a renderer is invoked in.
///
/// Opaque to the tab strip; renderers may adjust layout by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderContext {
    /// Query editor/viewer page
    Query,
    /// Dashboard widget
    Widget,
}

impl RenderContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderContext::Query => "query",
            RenderContext::Widget => "widget",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_visualization_from_json() {
        let vis: Visualization = serde_json::from_value(json!({
            "id": 7,
            "name": "Chart A",
            "type": "CHART",
            "options": { "globalSeriesType": "column" }
        }))
        .unwrap();

        assert_eq!(vis.id, 7);
        assert_eq!(vis.name, "Chart A");
        assert_eq!(vis.kind, VisualizationKind::Chart);
        assert_eq!(vis.description, None);
        assert_eq!(vis.options["globalSeriesType"], "column");
    }

    #[test]
    fn test_visualization_defaults() {
        let vis: Visualization = serde_json::from_value(json!({ "id": 1, "name": "Table" })).unwrap();
        assert_eq!(vis.kind, VisualizationKind::Table);
        assert!(vis.options.is_null());
    }

    #[test]
    fn test_unknown_kind_is_preserved() {
        let vis: Visualization =
            serde_json::from_value(json!({ "id": 2, "name": "Map", "type": "CHOROPLETH" })).unwrap();
        assert_eq!(vis.kind, VisualizationKind::Other("CHOROPLETH".to_string()));

        let back = serde_json::to_value(&vis).unwrap();
        assert_eq!(back["type"], "CHOROPLETH");
    }

    #[test]
    fn test_render_context_tag() {
        assert_eq!(RenderContext::Query.as_str(), "query");
        assert_eq!(serde_json::to_value(RenderContext::Widget).unwrap(), json!("widget"));
    }
}
