use contracts::shared::visualization::{Visualization, VisualizationKind};

use crate::query_visualization_tabs::model::{default_visualization_id, order_visualizations};

/// Visualization list and selection owned by the query page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryPageState {
    pub visualizations: Vec<Visualization>,
    pub selected: Option<i64>,
}

impl QueryPageState {
    pub fn new(visualizations: Vec<Visualization>, selected: Option<i64>) -> Self {
        Self {
            visualizations,
            selected,
        }
    }

    pub fn select(&mut self, id: i64) {
        self.selected = Some(id);
    }

    fn next_id(&self) -> i64 {
        self.visualizations.iter().map(|v| v.id).max().unwrap_or(0) + 1
    }

    /// Appends a table visualization, selects it and returns its id.
    pub fn add_table(&mut self) -> i64 {
        let id = self.next_id();
        let tables = self
            .visualizations
            .iter()
            .filter(|v| v.kind == VisualizationKind::Table)
            .count();
        let name = format!("Table {}", tables + 1);
        self.visualizations.push(Visualization::new(id, name, VisualizationKind::Table));
        self.selected = Some(id);
        id
    }

    /// Removes a visualization. Deleting the selected one selects the default.
    pub fn remove(&mut self, id: i64) -> Option<Visualization> {
        let index = self.visualizations.iter().position(|v| v.id == id)?;
        let removed = self.visualizations.remove(index);
        if self.selected == Some(id) {
            self.selected = default_visualization_id(&order_visualizations(&self.visualizations));
        }
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> QueryPageState {
        QueryPageState::new(
            vec![
                Visualization::new(3, "Table", VisualizationKind::Table),
                Visualization::new(1, "Bar Chart", VisualizationKind::Chart),
                Visualization::new(2, "Pie", VisualizationKind::Chart),
            ],
            Some(2),
        )
    }

    #[test]
    fn test_add_table_uses_next_id_and_selects_it() {
        let mut state = state();
        let id = state.add_table();
        assert_eq!(id, 4);
        assert_eq!(state.selected, Some(4));
        let added = state.visualizations.last().unwrap();
        assert_eq!(added.name, "Table 2");
        assert_eq!(added.kind, VisualizationKind::Table);
    }

    #[test]
    fn test_add_to_empty_list() {
        let mut state = QueryPageState::default();
        assert_eq!(state.add_table(), 1);
        assert_eq!(state.visualizations[0].name, "Table 1");
    }

    #[test]
    fn test_remove_selected_falls_back_to_default() {
        let mut state = state();
        let removed = state.remove(2).unwrap();
        assert_eq!(removed.name, "Pie");
        assert_eq!(state.selected, Some(1));
        assert_eq!(state.visualizations.len(), 2);
    }

    #[test]
    fn test_remove_other_keeps_selection() {
        let mut state = state();
        state.remove(3);
        assert_eq!(state.selected, Some(2));
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut state = state();
        assert!(state.remove(99).is_none());
        assert_eq!(state, self::state());
    }
}
