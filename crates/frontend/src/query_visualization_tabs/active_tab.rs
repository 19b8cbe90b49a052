//! Keeps the tab widget's current key in step with the parent's `selected_tab`.

use contracts::shared::visualization::Visualization;
use leptos::prelude::*;

use super::model::{changed_tab_id, forced_active_key, next_widget_key};

/// Creates the key signal bound to a thaw `TabList`.
///
/// - a valid `selected_tab` always wins, including right after a user click
///   the parent did not accept
/// - prop-driven key changes are never reported through `on_change_tab`
/// - a user click is reported exactly once
/// - without a valid `selected_tab` the widget keeps its own key, first tab by default
pub fn bind_active_tab(
    ordered: Memo<Vec<Visualization>>,
    selected_tab: Signal<Option<i64>>,
    on_change_tab: Option<Callback<i64>>,
) -> RwSignal<String> {
    let initial_key = ordered.with_untracked(|list| {
        let forced = forced_active_key(list, selected_tab.get_untracked());
        next_widget_key(list, forced, "")
    });
    let widget_key = RwSignal::new(initial_key.clone());
    // Last key written by this binding; the widget showing it is not a user action.
    let synced_key = StoredValue::new(Some(initial_key));

    Effect::new(move |_| {
        let next = ordered.with(|list| {
            let forced = forced_active_key(list, selected_tab.get());
            next_widget_key(list, forced, &widget_key.get_untracked())
        });
        synced_key.set_value(Some(next.clone()));
        if widget_key.get_untracked() != next {
            widget_key.set(next);
        }
    });

    Effect::new(move |_| {
        let key = widget_key.get();
        let Some(id) = changed_tab_id(&key, synced_key.get_value().as_deref()) else {
            return;
        };

        log::debug!("visualization tab {id} picked");
        if let Some(on_change_tab) = on_change_tab {
            on_change_tab.run(id);
        }

        // The parent may have accepted (selected_tab now names `key`), refused
        // (still names another tab) or not be controlling at all.
        let controlled =
            ordered.with_untracked(|list| forced_active_key(list, selected_tab.get_untracked()));
        match controlled {
            Some(controlled) if controlled != key => {
                log::debug!("tab {id} not accepted, back to {controlled}");
                synced_key.set_value(Some(controlled.clone()));
                widget_key.set(controlled);
            }
            _ => synced_key.set_value(Some(key)),
        }
    });

    widget_key
}
