//! Feedback dashboard core: normalization, fuzzy comment search, the
//! query pipeline and view-state persistence.
//!
//! [`FeedbackSession`] is the main entry point. Mount it with freshly
//! fetched feed items and a [`ViewStateStore`], then drive it with user
//! actions (search keystrokes, filter and sort clicks, page jumps); it
//! keeps the visible record list and the saved view snapshot current.
//! The lower layers are public too for callers that only want a piece:
//! [`normalize`] for the record shape, [`CommentIndex`] for fuzzy
//! search, [`QueryEngine`] for the pipeline itself.

pub mod engine;
pub mod error;
pub mod normalize;
pub mod search;
pub mod session;
pub mod state;
pub mod store;

pub use engine::ActiveView;
pub use engine::QueryEngine;
pub use error::StateError;
pub use normalize::normalize;
pub use search::CommentIndex;
pub use search::SearchConfig;
pub use session::DEFAULT_PAGE_SIZE;
pub use session::FeedbackSession;
pub use session::SessionConfig;
pub use state::QueryState;
pub use store::MemoryViewStore;
pub use store::ViewStateStore;
