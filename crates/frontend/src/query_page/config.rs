use serde::{Deserialize, Serialize};
use web_sys::window;

/// Page settings carried in the URL query string.
///
/// `?selected=2&can_edit=false&show_new=false`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryPageConfig {
    /// Initially selected visualization id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<i64>,
    /// User may delete visualizations
    pub can_edit: bool,
    /// Show the "New Visualization" button
    pub show_new: bool,
}

impl Default for QueryPageConfig {
    fn default() -> Self {
        Self {
            selected: None,
            can_edit: true,
            show_new: true,
        }
    }
}

impl QueryPageConfig {
    pub fn from_query(query: &str) -> Result<Self, serde_qs::Error> {
        serde_qs::from_str(query.trim_start_matches('?'))
    }

    pub fn to_query(&self) -> Result<String, serde_qs::Error> {
        serde_qs::to_string(self).map(|qs| format!("?{qs}"))
    }

    /// Reads `window.location.search`; a malformed query falls back to defaults.
    pub fn from_location() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match Self::from_query(&search) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("invalid page query {search:?}: {err}; using defaults");
                Self::default()
            }
        }
    }

    /// Rewrites the URL to reflect this config without adding a history entry.
    pub fn replace_location(&self) {
        let new_url = match self.to_query() {
            Ok(url) => url,
            Err(err) => {
                log::warn!("cannot encode page query: {err}");
                return;
            }
        };

        let Some(w) = window() else {
            return;
        };
        let current = w.location().search().unwrap_or_default();
        if current == new_url {
            return;
        }
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
        }
    }
}
