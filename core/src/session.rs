//! The dashboard session: wires the engine, the query state and the
//! persistence bridge together.

use crate::engine::ActiveView;
use crate::engine::QueryEngine;
use crate::error::StateError;
use crate::normalize::normalize;
use crate::search::SearchConfig;
use crate::state::QueryState;
use crate::store::ViewStateStore;
use pulse_protocol::DEFAULT_VIEW_KEY;
use pulse_protocol::Feedback;
use pulse_protocol::PersistedView;
use pulse_protocol::RawFeedback;
use pulse_protocol::SortColumn;
use tracing::debug;
use tracing::info;

/// Rows per page unless the embedder picks otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Session-wide constants chosen at mount time.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Rows per page; fixed for the session's lifetime.
    pub page_size: usize,
    /// Storage key the view snapshot is saved under.
    pub view_key: String,
    pub search: SearchConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            view_key: DEFAULT_VIEW_KEY.to_string(),
            search: SearchConfig::default(),
        }
    }
}

/// One mounted dashboard: owns the record set, the current query state
/// and the live view, and persists the view whenever it changes.
///
/// All mutation funnels through the action methods, each of which
/// recomputes the active view synchronously before returning, so the
/// session is never observable in a half-updated state.
pub struct FeedbackSession<S: ViewStateStore> {
    engine: QueryEngine,
    state: QueryState,
    view: ActiveView,
    store: S,
    view_key: String,
    last_saved: PersistedView,
}

impl<S: ViewStateStore> FeedbackSession<S> {
    /// Builds a session from freshly fetched feed items.
    ///
    /// The previous view snapshot, if the store has one, is applied
    /// before the first recompute. Restoring never writes back:
    /// mounting alone leaves the store untouched, and the restored
    /// snapshot becomes the baseline that later change detection
    /// compares against.
    pub fn mount(
        items: Vec<RawFeedback>,
        store: S,
        config: SessionConfig,
    ) -> Result<Self, StateError> {
        let records = normalize(items);
        let engine = QueryEngine::new(records, config.page_size, config.search)?;
        let restored = store.load(&config.view_key);
        let was_restored = restored.is_some();
        let mut state = match restored {
            Some(view) => QueryState::from_persisted(&view)?,
            None => QueryState::default(),
        };
        let view = engine.recompute(&state);
        state.page = view.page;
        let last_saved = state.to_persisted();
        info!(
            records = engine.len(),
            restored = was_restored,
            "feedback session mounted"
        );
        Ok(Self {
            engine,
            state,
            view,
            store,
            view_key: config.view_key,
            last_saved,
        })
    }

    /// Replaces the search text and jumps back to the first page, so a
    /// narrowed result is always visible from its start.
    pub fn set_search(&mut self, text: &str) {
        self.state.search_text = text.to_string();
        self.state.page = 0;
        self.apply();
    }

    /// Toggles one rating filter value on or off.
    pub fn toggle_filter(&mut self, value: &str) -> Result<(), StateError> {
        self.state.toggle_filter(value)?;
        self.apply();
        Ok(())
    }

    /// Applies a header click on `column`.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.state.toggle_sort(column);
        self.apply();
    }

    /// Jumps to `page`; out-of-range requests clamp to the last page.
    pub fn set_page(&mut self, page: usize) {
        self.state.page = page;
        self.apply();
    }

    /// Current query state.
    pub fn query_state(&self) -> &QueryState {
        &self.state
    }

    /// The live view, already clamped.
    pub fn active_view(&self) -> &ActiveView {
        &self.view
    }

    /// Record lookup, e.g. for the detail modal.
    pub fn record(&self, id: &str) -> Option<&Feedback> {
        self.engine.record(id)
    }

    /// Records on the current page, in display order.
    pub fn page_records(&self) -> Vec<&Feedback> {
        self.view
            .page_ids()
            .iter()
            .filter_map(|id| self.engine.record(id))
            .collect()
    }

    /// Rows the table should render: the current page, or the
    /// no-results placeholder when nothing matches.
    pub fn display_rows(&self) -> Vec<Feedback> {
        let rows: Vec<Feedback> = self.page_records().into_iter().cloned().collect();
        if rows.is_empty() {
            vec![Feedback::no_results()]
        } else {
            rows
        }
    }

    /// Recomputes the view, folds the clamped page back into the
    /// state, and saves the snapshot if any axis changed.
    fn apply(&mut self) {
        let view = self.engine.recompute(&self.state);
        self.state.page = view.page;
        self.view = view;
        let snapshot = self.state.to_persisted();
        if snapshot != self.last_saved {
            debug!(key = %self.view_key, "saving view state");
            self.store.save(&self.view_key, &snapshot);
            self.last_saved = snapshot;
        }
    }
}
