//! The query engine: derives the visible record sequence from the
//! current query state.

use crate::error::StateError;
use crate::search::CommentIndex;
use crate::search::SearchConfig;
use crate::state::QueryState;
use indexmap::IndexMap;
use pulse_protocol::Feedback;
use pulse_protocol::SortOrder;
use std::collections::HashSet;
use tracing::debug;

/// Holds the record set for one feed load and recomputes the active
/// view on demand.
///
/// Records keep their feed order, which doubles as the order that
/// "original" sorting restores. The set is never mutated after
/// construction; every user action derives a fresh [`ActiveView`]
/// instead of patching the previous one.
pub struct QueryEngine {
    records: IndexMap<String, Feedback>,
    index: CommentIndex,
    page_size: usize,
}

/// One recomputed view over the record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveView {
    /// Ids surviving search and filtering, in display order.
    pub ids: Vec<String>,
    /// Requested page after clamping to the available range.
    pub page: usize,
    /// Total pages at the engine's page size; zero when nothing
    /// matches.
    pub page_count: usize,
    page_size: usize,
}

impl ActiveView {
    /// Ids visible on the clamped page.
    pub fn page_ids(&self) -> &[String] {
        if self.ids.is_empty() {
            return &[];
        }
        let start = self.page * self.page_size;
        let end = ((self.page + 1) * self.page_size).min(self.ids.len());
        &self.ids[start..end]
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl QueryEngine {
    /// Builds the engine for one feed load.
    ///
    /// Duplicate record ids are rejected: the feed promises unique ids
    /// and the pipeline depends on them, so a duplicate means the
    /// payload is corrupt. A zero page size is rejected for the same
    /// reason.
    pub fn new(
        records: Vec<Feedback>,
        page_size: usize,
        search: SearchConfig,
    ) -> Result<Self, StateError> {
        if page_size == 0 {
            return Err(StateError::ZeroPageSize);
        }
        let index = CommentIndex::build(&records, search);
        let mut by_id = IndexMap::with_capacity(records.len());
        for record in records {
            let id = record.id.clone();
            if by_id.insert(id.clone(), record).is_some() {
                return Err(StateError::DuplicateId(id));
            }
        }
        Ok(Self {
            records: by_id,
            index,
            page_size,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Looks up one record by id.
    pub fn record(&self, id: &str) -> Option<&Feedback> {
        self.records.get(id)
    }

    /// All record ids in feed order.
    pub fn feed_order(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Runs the pipeline for `state`: search, then filter, then sort,
    /// then page clamping.
    pub fn recompute(&self, state: &QueryState) -> ActiveView {
        let mut ids = self.search_stage(&state.search_text);
        self.filter_stage(&mut ids, state);
        self.sort_stage(&mut ids, state);
        let (page, page_count) = self.clamp_stage(ids.len(), state.page);
        debug!(
            matches = ids.len(),
            page, page_count, "recomputed active view"
        );
        ActiveView {
            ids,
            page,
            page_count,
            page_size: self.page_size,
        }
    }

    /// An empty search shows the whole feed; anything else asks the
    /// comment index and keeps its relevance order.
    fn search_stage(&self, search_text: &str) -> Vec<String> {
        if search_text.is_empty() {
            self.records.keys().cloned().collect()
        } else {
            self.index.query(search_text)
        }
    }

    /// Drops ids whose rating is not among the active filters,
    /// preserving the incoming order. No active filters means no-op.
    fn filter_stage(&self, ids: &mut Vec<String>, state: &QueryState) {
        if state.filters.is_empty() {
            return;
        }
        ids.retain(|id| {
            self.records
                .get(id)
                .is_some_and(|record| state.filters.contains(record.rating.as_str()))
        });
    }

    /// Orders `ids` along the sort axis.
    ///
    /// With no sort column the incoming order stands. With a column,
    /// ascending compares the uppercased cell values and keeps the
    /// incoming relative order for ties; descending is the exact
    /// reversal of ascending, ties included. The `Original` direction
    /// rewinds the surviving ids to feed order rather than keeping
    /// their current order.
    fn sort_stage(&self, ids: &mut Vec<String>, state: &QueryState) {
        let Some(column) = state.sort_by else {
            return;
        };
        match state.sort_order {
            SortOrder::Original => {
                let keep: HashSet<&str> = ids.iter().map(String::as_str).collect();
                *ids = self
                    .records
                    .keys()
                    .filter(|id| keep.contains(id.as_str()))
                    .cloned()
                    .collect();
            }
            direction @ (SortOrder::Asc | SortOrder::Desc) => {
                let mut keyed: Vec<(String, String)> = ids
                    .drain(..)
                    .filter_map(|id| {
                        let record = self.records.get(&id)?;
                        Some((column.sort_key(record).to_uppercase(), id))
                    })
                    .collect();
                keyed.sort_by(|a, b| a.0.cmp(&b.0));
                ids.extend(keyed.into_iter().map(|(_, id)| id));
                if direction == SortOrder::Desc {
                    ids.reverse();
                }
            }
        }
    }

    /// Clamps the requested page to the available range; an empty
    /// active set has zero pages and pins the page to zero.
    fn clamp_stage(&self, active_len: usize, requested_page: usize) -> (usize, usize) {
        if active_len == 0 {
            return (0, 0);
        }
        let page_count = active_len.div_ceil(self.page_size);
        (requested_page.min(page_count - 1), page_count)
    }
}
