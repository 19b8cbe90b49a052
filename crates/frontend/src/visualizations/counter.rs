use contracts::shared::visualization::{QueryResult, Visualization};
use leptos::prelude::*;

use crate::shared::components::table::format_cell;

/// Big-number value: first row of `options.counterColName`, else of the first column.
pub fn counter_value(visualization: &Visualization, result: &QueryResult) -> Option<String> {
    let column = visualization
        .options
        .get("counterColName")
        .and_then(|v| v.as_str())
        .and_then(|name| result.column(name))
        .or_else(|| result.columns.first())?;
    result
        .cell(0, &column.name)
        .map(|value| format_cell(value, column.column_type))
}

#[component]
pub fn CounterView(visualization: Visualization, result: QueryResult) -> impl IntoView {
    let value = counter_value(&visualization, &result).unwrap_or_else(|| "-".to_string());

    view! {
        <div class="counter-visualization">
            <div class="counter-visualization__value">{value}</div>
            <div class="counter-visualization__label">{visualization.name}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::visualization::{ColumnType, QueryColumn, VisualizationKind};
    use serde_json::json;

    fn result() -> QueryResult {
        QueryResult {
            columns: vec![
                QueryColumn::new("country", ColumnType::String),
                QueryColumn::new("orders", ColumnType::Integer),
            ],
            rows: vec![json!({ "country": "DE", "orders": 15230 }).as_object().unwrap().clone()],
            ..QueryResult::default()
        }
    }

    #[test]
    fn test_counter_uses_configured_column() {
        let vis = Visualization::new(4, "Orders", VisualizationKind::Counter)
            .with_options(json!({ "counterColName": "orders" }));
        assert_eq!(counter_value(&vis, &result()).as_deref(), Some("15 230"));
    }

    #[test]
    fn test_counter_falls_back_to_first_column() {
        let vis = Visualization::new(4, "Orders", VisualizationKind::Counter)
            .with_options(json!({ "counterColName": "missing" }));
        assert_eq!(counter_value(&vis, &result()).as_deref(), Some("DE"));
    }

    #[test]
    fn test_counter_on_empty_result() {
        let vis = Visualization::new(4, "Orders", VisualizationKind::Counter);
        assert_eq!(counter_value(&vis, &QueryResult::default()), None);
    }
}
