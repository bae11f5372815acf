use tally_types::{Comment, Submission};

use crate::error::SourceResult;

/// Read boundary to a community's content.
///
/// The engine receives an already-authenticated source and calls it
/// sequentially from a single thread. Implementations must satisfy:
/// - `fetch_recent_submissions` returns at most `limit` items, newest first
///   (non-increasing `created_at`). The engine relies on this ordering to stop
///   scanning early and does not re-sort.
/// - `fetch_flattened_comments` returns every comment under the submission as
///   a flat list, with any "load more" placeholders already resolved.
/// - Retry, backoff, and rate limiting live here, never in the engine.
pub trait ContentSource {
    /// Newest submissions in `community`, up to `limit`.
    fn fetch_recent_submissions(
        &self,
        community: &str,
        limit: usize,
    ) -> SourceResult<Vec<Submission>>;

    /// All comments under `submission`, flattened.
    fn fetch_flattened_comments(&self, submission: &Submission) -> SourceResult<Vec<Comment>>;
}

impl<S: ContentSource + ?Sized> ContentSource for &S {
    fn fetch_recent_submissions(
        &self,
        community: &str,
        limit: usize,
    ) -> SourceResult<Vec<Submission>> {
        (**self).fetch_recent_submissions(community, limit)
    }

    fn fetch_flattened_comments(&self, submission: &Submission) -> SourceResult<Vec<Comment>> {
        (**self).fetch_flattened_comments(submission)
    }
}

impl<S: ContentSource + ?Sized> ContentSource for Box<S> {
    fn fetch_recent_submissions(
        &self,
        community: &str,
        limit: usize,
    ) -> SourceResult<Vec<Submission>> {
        (**self).fetch_recent_submissions(community, limit)
    }

    fn fetch_flattened_comments(&self, submission: &Submission) -> SourceResult<Vec<Comment>> {
        (**self).fetch_flattened_comments(submission)
    }
}
