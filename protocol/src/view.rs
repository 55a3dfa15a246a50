//! Persisted view state: the slice of dashboard state that survives a
//! reload.

use serde::Deserialize;
use serde::Serialize;

/// Storage key the dashboard saves its view under.
pub const DEFAULT_VIEW_KEY: &str = "feedback-view";

/// Snapshot of the view configuration, saved on change and restored on
/// the next mount.
///
/// Serialized with the field names the web dashboard has always used so
/// previously saved state keeps loading. Missing fields fall back to
/// their zero values, which is also the complete default view: first
/// page, no sort, no filter, no search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistedView {
    pub page: usize,
    /// Column name, or empty when nothing is sorted.
    pub sort_by: String,
    /// `"desc"`, `"asc"`, or empty for feed order.
    pub sort_direction: String,
    /// Rating values whose rows stay visible; empty means no filtering.
    pub filter_by: Vec<String>,
    pub search_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_with_the_dashboard_key_spelling() {
        let view = PersistedView {
            page: 2,
            sort_by: "rating".to_string(),
            sort_direction: "desc".to_string(),
            filter_by: vec!["4".to_string(), "5".to_string()],
            search_text: "slow".to_string(),
        };
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "page": 2,
                "sortBy": "rating",
                "sortDirection": "desc",
                "filterBy": ["4", "5"],
                "searchText": "slow"
            })
        );
    }

    #[test]
    fn missing_fields_fall_back_to_the_default_view() {
        let view: PersistedView =
            serde_json::from_value(serde_json::json!({ "page": 3 })).unwrap();
        assert_eq!(view.page, 3);
        assert_eq!(view.sort_by, "");
        assert_eq!(view.sort_direction, "");
        assert!(view.filter_by.is_empty());
        assert_eq!(view.search_text, "");
    }

    #[test]
    fn older_three_field_snapshots_still_load() {
        // Saved state written before search and filter were persisted.
        let view: PersistedView = serde_json::from_value(serde_json::json!({
            "page": 1,
            "sortBy": "browser",
            "sortDirection": "asc"
        }))
        .unwrap();
        assert_eq!(view.page, 1);
        assert_eq!(view.sort_by, "browser");
        assert_eq!(view.sort_direction, "asc");
        assert!(view.filter_by.is_empty());
        assert_eq!(view.search_text, "");
    }
}
