use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by a [`ContentSource`](crate::ContentSource).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Network or transport failure. Not retried.
    #[error("content source unavailable: {0}")]
    Unavailable(String),

    /// Credentials were rejected. Fatal for the run.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The source answered with data it could not decode.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The community does not exist or is not accessible.
    #[error("community not found: {0}")]
    CommunityNotFound(String),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Errors from an aggregation run.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("cannot load fixture {path}: {reason}")]
    Fixture { path: PathBuf, reason: String },
}

impl EngineError {
    /// Returns `true` when the run failed because credentials were rejected.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Source(SourceError::AuthenticationFailed(_)))
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
