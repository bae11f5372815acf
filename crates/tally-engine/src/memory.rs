use std::collections::HashMap;
use std::sync::Mutex;

use tally_types::{Comment, Submission};

use crate::error::{SourceError, SourceResult};
use crate::source::ContentSource;

/// A call observed by an [`InMemorySource`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceCall {
    Submissions { community: String, limit: usize },
    Comments { submission_id: String },
}

/// In-memory content source for tests, offline runs, and embedding.
///
/// Pages are served exactly as stored: callers that want the newest-first
/// contract must insert pages in that order. Unknown communities report
/// [`SourceError::CommunityNotFound`]; submissions without stored comments
/// have none. Failures can be injected per community or per submission.
#[derive(Default)]
pub struct InMemorySource {
    pages: HashMap<String, Vec<Submission>>,
    comments: HashMap<String, Vec<Comment>>,
    page_failures: HashMap<String, SourceError>,
    comment_failures: HashMap<String, SourceError>,
    calls: Mutex<Vec<SourceCall>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the page served for `community`.
    pub fn with_page(mut self, community: impl Into<String>, page: Vec<Submission>) -> Self {
        self.pages.insert(community.into(), page);
        self
    }

    /// Store the flattened comments for a submission id.
    pub fn with_comments(
        mut self,
        submission_id: impl Into<String>,
        comments: Vec<Comment>,
    ) -> Self {
        self.comments.insert(submission_id.into(), comments);
        self
    }

    /// Make every page fetch for `community` fail with `error`.
    pub fn failing_page(mut self, community: impl Into<String>, error: SourceError) -> Self {
        self.page_failures.insert(community.into(), error);
        self
    }

    /// Make the comment fetch for `submission_id` fail with `error`.
    pub fn failing_comments(
        mut self,
        submission_id: impl Into<String>,
        error: SourceError,
    ) -> Self {
        self.comment_failures.insert(submission_id.into(), error);
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<SourceCall> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    fn log(&self, call: SourceCall) {
        self.calls.lock().expect("call log poisoned").push(call);
    }
}

impl ContentSource for InMemorySource {
    fn fetch_recent_submissions(
        &self,
        community: &str,
        limit: usize,
    ) -> SourceResult<Vec<Submission>> {
        self.log(SourceCall::Submissions {
            community: community.to_string(),
            limit,
        });
        if let Some(error) = self.page_failures.get(community) {
            return Err(error.clone());
        }
        let page = self
            .pages
            .get(community)
            .ok_or_else(|| SourceError::CommunityNotFound(community.to_string()))?;
        Ok(page.iter().take(limit).cloned().collect())
    }

    fn fetch_flattened_comments(&self, submission: &Submission) -> SourceResult<Vec<Comment>> {
        self.log(SourceCall::Comments {
            submission_id: submission.id.clone(),
        });
        if let Some(error) = self.comment_failures.get(&submission.id) {
            return Err(error.clone());
        }
        Ok(self.comments.get(&submission.id).cloned().unwrap_or_default())
    }
}

impl std::fmt::Debug for InMemorySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySource")
            .field("communities", &self.pages.len())
            .field("threads", &self.comments.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use tally_types::AuthorId;

    use super::*;

    fn submission(id: &str, secs: i64) -> Submission {
        Submission::new(id, AuthorId::account("amy"), Utc.timestamp_opt(secs, 0).unwrap())
    }

    #[test]
    fn page_is_truncated_to_limit() {
        let source = InMemorySource::new().with_page(
            "rust",
            vec![submission("a", 3), submission("b", 2), submission("c", 1)],
        );
        let page = source.fetch_recent_submissions("rust", 2).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[1].id, "b");
    }

    #[test]
    fn unknown_community_is_not_found() {
        let source = InMemorySource::new();
        assert_eq!(
            source.fetch_recent_submissions("nope", 5),
            Err(SourceError::CommunityNotFound("nope".into()))
        );
    }

    #[test]
    fn missing_comments_are_empty() {
        let source = InMemorySource::new();
        let comments = source.fetch_flattened_comments(&submission("a", 1)).unwrap();
        assert!(comments.is_empty());
    }

    #[test]
    fn injected_failures_are_returned() {
        let source = InMemorySource::new()
            .with_page("rust", vec![submission("a", 1)])
            .failing_page("down", SourceError::Unavailable("timeout".into()))
            .failing_comments("a", SourceError::Unavailable("reset".into()));

        assert_eq!(
            source.fetch_recent_submissions("down", 5),
            Err(SourceError::Unavailable("timeout".into()))
        );
        assert_eq!(
            source.fetch_flattened_comments(&submission("a", 1)),
            Err(SourceError::Unavailable("reset".into()))
        );
    }

    #[test]
    fn calls_are_logged_in_order() {
        let source = InMemorySource::new().with_page("rust", vec![submission("a", 1)]);
        source.fetch_recent_submissions("rust", 20).unwrap();
        source.fetch_flattened_comments(&submission("a", 1)).unwrap();
        assert_eq!(
            source.calls(),
            vec![
                SourceCall::Submissions {
                    community: "rust".into(),
                    limit: 20
                },
                SourceCall::Comments {
                    submission_id: "a".into()
                },
            ]
        );
    }
}
