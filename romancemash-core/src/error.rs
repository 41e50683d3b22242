use thiserror::Error;

/// Errors raised by the rating model: bad codes, bad keys, bad duels.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RankError {
    #[error("Unknown category code: {0}")]
    UnknownCategory(String),
    #[error("Unknown context code: {0}")]
    UnknownContext(String),
    #[error("Malformed bucket key: {0}")]
    BadBucketKey(String),
    #[error("Item not in catalog: {0}")]
    UnknownItem(String),
    #[error("A duel needs two different items, got \"{0}\" twice")]
    SameItem(String),
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

/// Errors raised while reading or writing persisted state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Errors from a session operation that both validates and persists.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Rank(#[from] RankError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
