use std::fmt;

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use tally_ledger::{LedgerReader, LedgerSummary, RankedEntry, Ranker};
use tally_types::{RankMetric, TimeWindow};

/// Everything one `tally top` run prints.
#[derive(Debug, Serialize)]
pub struct Report {
    pub community: String,
    pub cutoff: DateTime<Utc>,
    pub summary: LedgerSummary,
    pub rankings: Vec<Ranking>,
}

#[derive(Debug, Serialize)]
pub struct Ranking {
    pub metric: RankMetric,
    pub entries: Vec<RankedEntry>,
}

impl Report {
    pub fn build<R: LedgerReader + ?Sized>(
        community: &str,
        window: &TimeWindow,
        ledger: &R,
        metrics: &[RankMetric],
        top: usize,
    ) -> Self {
        Self {
            community: community.to_string(),
            cutoff: window.cutoff(),
            summary: ledger.summary(),
            rankings: metrics
                .iter()
                .map(|&metric| Ranking {
                    metric,
                    entries: Ranker::ranked(ledger, metric, top),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}{} since {}",
            "r/".dimmed(),
            self.community.bold(),
            self.cutoff.format("%Y-%m-%d %H:%M UTC").to_string().cyan()
        )?;
        writeln!(
            f,
            "  {} authors, {} posts, {} comments",
            self.summary.authors, self.summary.posts, self.summary.comments
        )?;

        for ranking in &self.rankings {
            writeln!(f)?;
            writeln!(f, "Top authors by {}", ranking.metric.as_str().yellow().bold())?;
            if ranking.entries.is_empty() {
                writeln!(f, "  {}", "no activity in window".dimmed())?;
                continue;
            }
            let width = ranking
                .entries
                .iter()
                .map(|e| e.author.to_string().len())
                .max()
                .unwrap_or(0)
                .max("author".len());
            writeln!(
                f,
                "  {:>4}  {:<width$}  {:>6}  {:>8}",
                "#", "author", "posts", "comments"
            )?;
            for entry in &ranking.entries {
                let name = format!("{:<width$}", entry.author.to_string());
                let name = if entry.author.is_unavailable() {
                    name.dimmed()
                } else {
                    name.normal()
                };
                writeln!(
                    f,
                    "  {:>4}  {}  {:>6}  {:>8}",
                    entry.rank, name, entry.posts, entry.comments
                )?;
            }
        }
        Ok(())
    }
}
