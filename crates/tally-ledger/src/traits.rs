use serde::{Deserialize, Serialize};
use tally_types::{ActivityRecord, AuthorId};

/// Write boundary for ledger accumulation.
///
/// Every call counts one event. Nothing here deduplicates: recording the same
/// physical post twice counts it twice, so callers must record each event
/// exactly once.
pub trait LedgerWriter {
    /// Count one submission by `author`, creating a zeroed record first if
    /// the author is new.
    fn record_post(&mut self, author: &AuthorId);

    /// Count one comment by `author`, creating a zeroed record first if the
    /// author is new.
    fn record_comment(&mut self, author: &AuthorId);
}

/// Read boundary for ledger queries and ranking.
pub trait LedgerReader {
    fn get(&self, author: &AuthorId) -> Option<ActivityRecord>;

    /// Snapshot of every entry. No ordering guarantee.
    fn entries(&self) -> Vec<(AuthorId, ActivityRecord)>;

    /// Number of distinct authors.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Totals across every entry.
    fn summary(&self) -> LedgerSummary {
        self.entries()
            .iter()
            .fold(LedgerSummary::default(), |mut acc, (_, record)| {
                acc.authors += 1;
                acc.posts += record.posts;
                acc.comments += record.comments;
                acc
            })
    }
}

/// Aggregate counts over a whole ledger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub authors: usize,
    pub posts: u64,
    pub comments: u64,
}
