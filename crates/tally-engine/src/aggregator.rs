use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use tally_ledger::{ActivityLedger, LedgerReader, LedgerWriter};
use tally_types::TimeWindow;

use crate::error::{EngineError, EngineResult};
use crate::source::ContentSource;
use crate::window::{is_newest_first, select};

/// Builds a per-author activity ledger from one page of a community.
///
/// A run fetches a single page of newest submissions, keeps the in-window
/// prefix, counts each retained submission's author, then fetches and counts
/// each retained submission's comments, one submission at a time.
///
/// Runs are all-or-nothing: any source error aborts the run and the partial
/// ledger is dropped. Authors reported as unavailable are counted under the
/// shared [`AuthorId::Unavailable`](tally_types::AuthorId::Unavailable) key.
pub struct Aggregator<S> {
    source: S,
}

impl<S: ContentSource> Aggregator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run against the current wall-clock time.
    pub fn run(
        &self,
        community: &str,
        lookback: Duration,
        page_limit: usize,
    ) -> EngineResult<ActivityLedger> {
        self.run_at(community, lookback, page_limit, Utc::now())
    }

    /// Run with the window ending at `now`.
    pub fn run_at(
        &self,
        community: &str,
        lookback: Duration,
        page_limit: usize,
        now: DateTime<Utc>,
    ) -> EngineResult<ActivityLedger> {
        if page_limit == 0 {
            return Err(EngineError::InvalidRequest(
                "page limit must be at least 1".into(),
            ));
        }
        if lookback < Duration::zero() {
            return Err(EngineError::InvalidRequest(format!(
                "lookback must not be negative, got {lookback}"
            )));
        }

        let window = TimeWindow::trailing(now, lookback);
        info!(community, cutoff = %window.cutoff(), page_limit, "aggregation started");

        let page = self.source.fetch_recent_submissions(community, page_limit)?;
        if !is_newest_first(&page) {
            warn!(
                community,
                "submission page is not ordered newest first; in-window items may be dropped"
            );
        }
        let retained = select(&page, &window);
        debug!(fetched = page.len(), retained = retained.len(), "window applied");

        let mut ledger = ActivityLedger::new();
        for submission in retained {
            ledger.record_post(&submission.author);
        }

        for submission in retained {
            let comments = self.source.fetch_flattened_comments(submission)?;
            debug!(
                submission = %submission.id,
                comments = comments.len(),
                "comments folded"
            );
            for comment in &comments {
                ledger.record_comment(&comment.author);
            }
        }

        let summary = ledger.summary();
        info!(
            community,
            fetched = page.len(),
            retained = retained.len(),
            authors = summary.authors,
            posts = summary.posts,
            comments = summary.comments,
            "aggregation finished"
        );
        Ok(ledger)
    }
}
