//! Shared types for the feedback dashboard: the raw feed payload, the
//! normalized record shape, the query surface and the persisted view
//! state.
//!
//! Everything in this crate is plain data. Normalization, querying and
//! persistence behavior live in `pulse-core`.

pub mod feed;
pub mod query;
pub mod record;
pub mod view;

pub use feed::BrowserHint;
pub use feed::ComputedBrowser;
pub use feed::FeedbackImages;
pub use feed::FeedbackPayload;
pub use feed::RawFeedback;
pub use feed::RawRating;
pub use feed::Screenshot;
pub use query::RATING_VALUES;
pub use query::SortColumn;
pub use query::SortOrder;
pub use record::Device;
pub use record::Feedback;
pub use record::NO_RESULTS_COMMENT;
pub use record::NO_RESULTS_ID;
pub use view::DEFAULT_VIEW_KEY;
pub use view::PersistedView;
