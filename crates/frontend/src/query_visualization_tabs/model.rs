use contracts::shared::visualization::Visualization;

/// Tab key of a visualization: its id in decimal.
pub fn tab_key(id: i64) -> String {
    id.to_string()
}

pub fn parse_tab_key(key: &str) -> Option<i64> {
    key.trim().parse().ok()
}

/// Visualizations in ascending id order. Stable for equal ids.
pub fn order_visualizations(visualizations: &[Visualization]) -> Vec<Visualization> {
    let mut ordered = visualizations.to_vec();
    ordered.sort_by_key(|v| v.id);
    ordered
}

/// Id of the default (lowest-id) visualization of an ordered list.
pub fn default_visualization_id(ordered: &[Visualization]) -> Option<i64> {
    ordered.first().map(|v| v.id)
}

/// One rendered tab.
#[derive(Debug, Clone, PartialEq)]
pub struct TabSpec {
    pub key: String,
    pub visualization: Visualization,
    /// Shows the delete affordance
    pub deletable: bool,
}

/// Tabs for an already ordered list. The default visualization is never deletable.
pub fn build_tabs(ordered: &[Visualization], can_delete_visualizations: bool) -> Vec<TabSpec> {
    let default_id = default_visualization_id(ordered);
    ordered
        .iter()
        .map(|v| TabSpec {
            key: tab_key(v.id),
            visualization: v.clone(),
            deletable: can_delete_visualizations && Some(v.id) != default_id,
        })
        .collect()
}

/// Key the strip forces active: only when `selected` names a listed visualization.
pub fn forced_active_key(ordered: &[Visualization], selected: Option<i64>) -> Option<String> {
    let selected = selected?;
    ordered.iter().any(|v| v.id == selected).then(|| tab_key(selected))
}

/// Key the tab widget should show next.
///
/// A forced key wins. Otherwise the widget keeps its own key while that tab
/// still exists, and falls back to the first tab. Empty for an empty list.
pub fn next_widget_key(ordered: &[Visualization], forced: Option<String>, current: &str) -> String {
    if let Some(key) = forced {
        return key;
    }
    if ordered.iter().any(|v| tab_key(v.id) == current) {
        return current.to_string();
    }
    ordered.first().map(|v| tab_key(v.id)).unwrap_or_default()
}

/// Id to report for a widget key change, `None` when the key is the one last
/// synced from props (no user action) or is not a valid id.
pub fn changed_tab_id(key: &str, synced: Option<&str>) -> Option<i64> {
    if key.is_empty() || synced == Some(key) {
        return None;
    }
    match parse_tab_key(key) {
        Some(id) => Some(id),
        None => {
            log::warn!("ignoring tab change to non-numeric key {key:?}");
            None
        }
    }
}

/// Controls in the tab bar's extra-content slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarAction {
    NewVisualization,
}

pub fn bar_actions(show_new_visualization_button: bool) -> Vec<BarAction> {
    if show_new_visualization_button {
        vec![BarAction::NewVisualization]
    } else {
        Vec::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabAction {
    Delete,
}

/// A mutation raised by a tab label, carried out only after confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteRequest {
    pub action: TabAction,
    pub target: Visualization,
}

impl DeleteRequest {
    pub fn new(target: Visualization) -> Self {
        Self {
            action: TabAction::Delete,
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::visualization::VisualizationKind;

    fn vis(id: i64, name: &str) -> Visualization {
        Visualization::new(id, name, VisualizationKind::Table)
    }

    fn scenario() -> Vec<Visualization> {
        vec![vis(3, "Table"), vis(1, "Bar Chart"), vis(2, "Pie")]
    }

    #[test]
    fn test_order_is_ascending_by_id() {
        let ordered = order_visualizations(&scenario());
        let ids: Vec<i64> = ordered.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let mut reversed = scenario();
        reversed.reverse();
        assert_eq!(order_visualizations(&reversed), ordered);
    }

    #[test]
    fn test_scenario_labels_and_deletability() {
        let tabs = build_tabs(&order_visualizations(&scenario()), true);
        let summary: Vec<(&str, bool)> = tabs
            .iter()
            .map(|t| (t.visualization.name.as_str(), t.deletable))
            .collect();
        assert_eq!(summary, vec![("Bar Chart", false), ("Pie", true), ("Table", true)]);
        assert_eq!(tabs[1].key, "2");
    }

    #[test]
    fn test_no_delete_without_permission() {
        let tabs = build_tabs(&order_visualizations(&scenario()), false);
        assert!(tabs.iter().all(|t| !t.deletable));
    }

    #[test]
    fn test_single_visualization_is_never_deletable() {
        let tabs = build_tabs(&[vis(42, "Only")], true);
        assert_eq!(tabs.len(), 1);
        assert!(!tabs[0].deletable);
    }

    #[test]
    fn test_empty_list() {
        assert!(build_tabs(&[], true).is_empty());
        assert_eq!(default_visualization_id(&[]), None);
        assert_eq!(forced_active_key(&[], Some(1)), None);
        assert_eq!(next_widget_key(&[], None, "3"), "");
    }

    #[test]
    fn test_forced_active_key() {
        let list = order_visualizations(&[vis(7, "Chart A"), vis(3, "Table")]);
        assert_eq!(forced_active_key(&list, Some(7)).as_deref(), Some("7"));
        assert_eq!(forced_active_key(&list, None), None);
        assert_eq!(forced_active_key(&list, Some(99)), None);
    }

    #[test]
    fn test_next_widget_key() {
        let list = order_visualizations(&scenario());
        assert_eq!(next_widget_key(&list, Some("3".to_string()), "1"), "3");
        // user-picked tab survives when nothing is forced
        assert_eq!(next_widget_key(&list, None, "2"), "2");
        // widget default: first tab
        assert_eq!(next_widget_key(&list, None, ""), "1");
        assert_eq!(next_widget_key(&list, None, "9"), "1");
    }

    #[test]
    fn test_changed_tab_id() {
        assert_eq!(changed_tab_id("2", Some("1")), Some(2));
        assert_eq!(changed_tab_id("2", None), Some(2));
        assert_eq!(changed_tab_id("2", Some("2")), None);
        assert_eq!(changed_tab_id("", Some("1")), None);
        assert_eq!(changed_tab_id("pie", Some("1")), None);
    }

    #[test]
    fn test_tab_key_codec() {
        assert_eq!(tab_key(15), "15");
        assert_eq!(parse_tab_key("15"), Some(15));
        assert_eq!(parse_tab_key("-3"), Some(-3));
        assert_eq!(parse_tab_key("x"), None);
    }

    #[test]
    fn test_bar_actions() {
        assert_eq!(bar_actions(true), vec![BarAction::NewVisualization]);
        assert!(bar_actions(false).is_empty());
    }

    #[test]
    fn test_delete_request_carries_whole_visualization() {
        let target = vis(2, "Pie").with_options(serde_json::json!({ "series": ["a"] }));
        let request = DeleteRequest::new(target.clone());
        assert_eq!(request.action, TabAction::Delete);
        assert_eq!(request.target, target);
    }
}
