//! Built-in query used when the page runs without a backend.

use chrono::Utc;
use contracts::shared::visualization::{
    ColumnType, QueryColumn, QueryResult, Visualization, VisualizationKind,
};
use serde_json::{json, Map, Value};

pub const QUERY_NAME: &str = "Orders by country";

pub fn sample_visualizations() -> Vec<Visualization> {
    vec![
        Visualization::new(3, "Total orders", VisualizationKind::Counter)
            .with_options(json!({ "counterColName": "orders" })),
        Visualization::new(1, "Table", VisualizationKind::Table),
        Visualization::new(2, "Revenue by country", VisualizationKind::Chart)
            .with_options(json!({ "globalSeriesType": "column" })),
    ]
}

fn row(country: &str, orders: i64, revenue: f64) -> Map<String, Value> {
    let mut row = Map::new();
    row.insert("country".to_string(), json!(country));
    row.insert("orders".to_string(), json!(orders));
    row.insert("revenue".to_string(), json!(revenue));
    row
}

pub fn sample_query_result() -> QueryResult {
    let mut country = QueryColumn::new("country", ColumnType::String);
    country.friendly_name = Some("Country".to_string());

    QueryResult {
        columns: vec![
            country,
            QueryColumn::new("orders", ColumnType::Integer),
            QueryColumn::new("revenue", ColumnType::Float),
        ],
        rows: vec![
            row("DE", 15230, 1_204_511.5),
            row("FR", 9814, 830_020.0),
            row("PL", 4120, 212_994.75),
        ],
        retrieved_at: Some(Utc::now()),
        runtime: Some(0.42),
    }
}
