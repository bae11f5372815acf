use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown rank metric: {0} (expected `posts` or `comments`)")]
    UnknownMetric(String),

    #[error("timestamp out of range: {0}")]
    InvalidTimestamp(i64),
}
