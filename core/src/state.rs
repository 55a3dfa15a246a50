//! The mutable per-session query state.

use crate::error::StateError;
use indexmap::IndexSet;
use pulse_protocol::PersistedView;
use pulse_protocol::RATING_VALUES;
use pulse_protocol::SortColumn;
use pulse_protocol::SortOrder;
use std::str::FromStr;

/// The four independent axes driving recomputation: search, filter,
/// sort and page. Any combination is legal, and the zero value of
/// every axis together is the default view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub search_text: String,
    /// Active rating filters in the order they were toggled on. Order
    /// matters only for persistence; membership drives filtering.
    pub filters: IndexSet<String>,
    /// Column being sorted, if any.
    pub sort_by: Option<SortColumn>,
    pub sort_order: SortOrder,
    /// Requested page; the engine clamps it to the available range.
    pub page: usize,
}

impl QueryState {
    /// Rebuilds the state from a saved view snapshot.
    ///
    /// Unknown column names, directions or rating values mean the
    /// snapshot was written by something else or corrupted in storage;
    /// both fail loudly instead of degrading into a silently different
    /// view.
    pub fn from_persisted(view: &PersistedView) -> Result<Self, StateError> {
        let sort_by = match view.sort_by.as_str() {
            "" => None,
            name => Some(
                SortColumn::from_str(name)
                    .map_err(|_| StateError::UnknownSortColumn(name.to_string()))?,
            ),
        };
        let sort_order = SortOrder::parse(&view.sort_direction)
            .ok_or_else(|| StateError::UnknownSortDirection(view.sort_direction.clone()))?;
        let mut filters = IndexSet::new();
        for value in &view.filter_by {
            if !RATING_VALUES.contains(&value.as_str()) {
                return Err(StateError::UnknownRating(value.clone()));
            }
            filters.insert(value.clone());
        }
        Ok(Self {
            search_text: view.search_text.clone(),
            filters,
            sort_by,
            sort_order,
            page: view.page,
        })
    }

    /// Snapshot handed to the persistence bridge.
    pub fn to_persisted(&self) -> PersistedView {
        PersistedView {
            page: self.page,
            sort_by: self
                .sort_by
                .map(|column| column.to_string())
                .unwrap_or_default(),
            sort_direction: self.sort_order.as_str().to_string(),
            filter_by: self.filters.iter().cloned().collect(),
            search_text: self.search_text.clone(),
        }
    }

    /// Applies a header click: a new column starts descending, a
    /// repeated click moves the current column one step along the
    /// direction cycle.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if self.sort_by == Some(column) {
            self.sort_order = self.sort_order.next();
        } else {
            self.sort_by = Some(column);
            self.sort_order = SortOrder::Desc;
        }
    }

    /// Applies a rating-filter click; returns whether the value is now
    /// active. Values outside the rating domain fail loudly.
    pub fn toggle_filter(&mut self, value: &str) -> Result<bool, StateError> {
        if !RATING_VALUES.contains(&value) {
            return Err(StateError::UnknownRating(value.to_string()));
        }
        if self.filters.shift_remove(value) {
            Ok(false)
        } else {
            self.filters.insert(value.to_string());
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_state_is_the_default_view() {
        let state = QueryState::default();
        assert_eq!(state.search_text, "");
        assert!(state.filters.is_empty());
        assert_eq!(state.sort_by, None);
        assert_eq!(state.sort_order, SortOrder::Original);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn persisted_round_trip_preserves_every_axis() {
        let state = QueryState {
            search_text: "slow".to_string(),
            filters: IndexSet::from(["4".to_string(), "2".to_string()]),
            sort_by: Some(SortColumn::Browser),
            sort_order: SortOrder::Desc,
            page: 3,
        };
        let restored = QueryState::from_persisted(&state.to_persisted()).unwrap();
        assert_eq!(restored, state);
        assert_eq!(state.to_persisted().filter_by, ["4", "2"]);
    }

    #[test]
    fn unknown_column_direction_or_rating_fail_loudly() {
        let bogus_column = PersistedView {
            sort_by: "severity".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            QueryState::from_persisted(&bogus_column),
            Err(StateError::UnknownSortColumn(name)) if name == "severity"
        ));

        let bogus_direction = PersistedView {
            sort_direction: "up".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            QueryState::from_persisted(&bogus_direction),
            Err(StateError::UnknownSortDirection(_))
        ));

        let bogus_rating = PersistedView {
            filter_by: vec!["6".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            QueryState::from_persisted(&bogus_rating),
            Err(StateError::UnknownRating(_))
        ));
    }

    #[test]
    fn toggling_a_new_column_starts_descending() {
        let mut state = QueryState::default();
        state.toggle_sort(SortColumn::Rating);
        assert_eq!(state.sort_by, Some(SortColumn::Rating));
        assert_eq!(state.sort_order, SortOrder::Desc);
        state.toggle_sort(SortColumn::Rating);
        assert_eq!(state.sort_order, SortOrder::Asc);
        // Switching columns restarts the cycle instead of continuing it.
        state.toggle_sort(SortColumn::Browser);
        assert_eq!(state.sort_by, Some(SortColumn::Browser));
        assert_eq!(state.sort_order, SortOrder::Desc);
    }

    #[test]
    fn filter_toggle_is_an_on_off_switch() {
        let mut state = QueryState::default();
        assert!(state.toggle_filter("3").unwrap());
        assert!(!state.toggle_filter("3").unwrap());
        assert!(state.filters.is_empty());
        assert!(state.toggle_filter("0").is_err());
    }

    #[test]
    fn filters_persist_in_toggle_order() {
        let mut state = QueryState::default();
        state.toggle_filter("5").unwrap();
        state.toggle_filter("1").unwrap();
        state.toggle_filter("3").unwrap();
        assert_eq!(state.to_persisted().filter_by, ["5", "1", "3"]);
    }
}
