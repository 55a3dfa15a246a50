use thiserror::Error;

/// Errors raised while building the engine or applying a restored view.
///
/// All of these indicate an integration bug or corrupted saved state,
/// never bad user input: search text and filter clicks arrive through
/// typed APIs that cannot produce them.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("unknown sort column `{0}`")]
    UnknownSortColumn(String),

    #[error("unknown sort direction `{0}`")]
    UnknownSortDirection(String),

    #[error("unknown rating value `{0}`")]
    UnknownRating(String),

    #[error("duplicate feedback id `{0}`")]
    DuplicateId(String),

    #[error("page size must be at least 1")]
    ZeroPageSize,
}
