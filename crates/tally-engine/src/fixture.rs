use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use tally_types::{Comment, Submission};

use crate::error::{EngineError, EngineResult, SourceResult};
use crate::memory::InMemorySource;
use crate::source::ContentSource;

/// Recorded community content, as stored in a JSON fixture file.
///
/// ```json
/// {
///   "communities": {
///     "python": [{ "id": "a1", "author": "amy", "created_at": "2024-05-01T12:00:00Z" }]
///   },
///   "comments": {
///     "a1": [{ "author": "bob" }, { "author": null }]
///   }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub communities: BTreeMap<String, Vec<Submission>>,
    #[serde(default)]
    pub comments: BTreeMap<String, Vec<Comment>>,
}

impl Fixture {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Content source backed by a [`Fixture`].
///
/// Pages are sorted newest first on load, so a fixture honors the source
/// ordering contract whatever order its file lists submissions in.
#[derive(Debug)]
pub struct FixtureSource {
    inner: InMemorySource,
}

impl FixtureSource {
    pub fn new(fixture: Fixture) -> Self {
        let mut inner = InMemorySource::new();
        for (community, mut page) in fixture.communities {
            page.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            inner = inner.with_page(community, page);
        }
        for (submission_id, comments) in fixture.comments {
            inner = inner.with_comments(submission_id, comments);
        }
        Self { inner }
    }

    /// Load a fixture from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let fixture_error = |reason: String| EngineError::Fixture {
            path: path.to_path_buf(),
            reason,
        };
        let json = fs::read_to_string(path).map_err(|e| fixture_error(e.to_string()))?;
        let fixture = Fixture::from_json(&json).map_err(|e| fixture_error(e.to_string()))?;
        debug!(
            path = %path.display(),
            communities = fixture.communities.len(),
            threads = fixture.comments.len(),
            "fixture loaded"
        );
        Ok(Self::new(fixture))
    }
}

impl ContentSource for FixtureSource {
    fn fetch_recent_submissions(
        &self,
        community: &str,
        limit: usize,
    ) -> SourceResult<Vec<Submission>> {
        self.inner.fetch_recent_submissions(community, limit)
    }

    fn fetch_flattened_comments(&self, submission: &Submission) -> SourceResult<Vec<Comment>> {
        self.inner.fetch_flattened_comments(submission)
    }
}
