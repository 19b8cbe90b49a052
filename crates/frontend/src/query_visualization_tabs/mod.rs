//! Tabbed view of the visualizations attached to a query result.
//!
//! - `active_tab` - widget key bound to the parent's `selected_tab`
//! - `model` - ordering, deletability and active-tab resolution (no view code)
//! - `tab_label` - tab title with the confirm-before-delete affordance
//! - `tab_strip` - the `QueryVisualizationTabs` component

pub mod active_tab;
pub mod model;
pub mod tab_label;
pub mod tab_strip;

pub use tab_label::TabLabel;
pub use tab_strip::QueryVisualizationTabs;
