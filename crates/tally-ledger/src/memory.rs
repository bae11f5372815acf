use std::collections::HashMap;

use tally_types::{ActivityRecord, AuthorId};

use crate::traits::{LedgerReader, LedgerWriter};

/// In-memory activity ledger.
///
/// Owned by a single aggregation run; mutation goes through `&mut self`, so
/// there is no internal locking. Entries are only ever inserted or
/// incremented, never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityLedger {
    records: HashMap<AuthorId, ActivityRecord>,
}

impl ActivityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn record_mut(&mut self, author: &AuthorId) -> &mut ActivityRecord {
        self.records.entry(author.clone()).or_default()
    }
}

impl LedgerWriter for ActivityLedger {
    fn record_post(&mut self, author: &AuthorId) {
        self.record_mut(author).posts += 1;
    }

    fn record_comment(&mut self, author: &AuthorId) {
        self.record_mut(author).comments += 1;
    }
}

impl LedgerReader for ActivityLedger {
    fn get(&self, author: &AuthorId) -> Option<ActivityRecord> {
        self.records.get(author).copied()
    }

    fn entries(&self) -> Vec<(AuthorId, ActivityRecord)> {
        self.records
            .iter()
            .map(|(author, record)| (author.clone(), *record))
            .collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
