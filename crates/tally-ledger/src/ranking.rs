use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tally_types::{ActivityRecord, AuthorId, RankMetric};

use crate::traits::LedgerReader;

/// One row of a ranking, with its 1-based position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub author: AuthorId,
    pub posts: u64,
    pub comments: u64,
}

impl RankedEntry {
    pub fn record(&self) -> ActivityRecord {
        ActivityRecord::new(self.posts, self.comments)
    }
}

/// Deterministic top-K views over a ledger.
///
/// Entries are ordered by the chosen metric, highest first. Equal values are
/// ordered by [`AuthorId`] ascending, so the same ledger always ranks the same
/// way regardless of map iteration order.
pub struct Ranker;

impl Ranker {
    /// The `k` highest entries by `metric`. Returns every entry when `k`
    /// exceeds the ledger size, and nothing when `k == 0`.
    pub fn top_k<R: LedgerReader + ?Sized>(
        reader: &R,
        metric: RankMetric,
        k: usize,
    ) -> Vec<(AuthorId, ActivityRecord)> {
        if k == 0 {
            return Vec::new();
        }
        let mut entries = reader.entries();
        entries.sort_by(|a, b| compare(metric, a, b));
        entries.truncate(k);
        entries
    }

    /// Same as [`Ranker::top_k`], numbered for presentation.
    pub fn ranked<R: LedgerReader + ?Sized>(
        reader: &R,
        metric: RankMetric,
        k: usize,
    ) -> Vec<RankedEntry> {
        Self::top_k(reader, metric, k)
            .into_iter()
            .enumerate()
            .map(|(index, (author, record))| RankedEntry {
                rank: index + 1,
                author,
                posts: record.posts,
                comments: record.comments,
            })
            .collect()
    }
}

fn compare(
    metric: RankMetric,
    (a_author, a): &(AuthorId, ActivityRecord),
    (b_author, b): &(AuthorId, ActivityRecord),
) -> Ordering {
    b.metric(metric)
        .cmp(&a.metric(metric))
        .then_with(|| a_author.cmp(b_author))
}
