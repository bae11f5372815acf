use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Per-author activity counters.
///
/// Both counters start at zero and only ever grow by one per recorded event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Submissions authored inside the window.
    pub posts: u64,
    /// Comments authored under retained submissions.
    pub comments: u64,
}

impl ActivityRecord {
    pub const fn new(posts: u64, comments: u64) -> Self {
        Self { posts, comments }
    }

    /// Value of the counter selected by `metric`.
    pub const fn metric(&self, metric: RankMetric) -> u64 {
        match metric {
            RankMetric::Posts => self.posts,
            RankMetric::Comments => self.comments,
        }
    }

    /// Total events attributed to this author.
    pub const fn total(&self) -> u64 {
        self.posts + self.comments
    }
}

/// Counter a ranking is ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankMetric {
    Posts,
    Comments,
}

impl RankMetric {
    /// Every metric, in display order.
    pub const ALL: [RankMetric; 2] = [RankMetric::Posts, RankMetric::Comments];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Comments => "comments",
        }
    }
}

impl fmt::Display for RankMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankMetric {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "posts" | "post" => Ok(Self::Posts),
            "comments" | "comment" => Ok(Self::Comments),
            other => Err(TypeError::UnknownMetric(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_zero() {
        let r = ActivityRecord::default();
        assert_eq!(r.posts, 0);
        assert_eq!(r.comments, 0);
        assert_eq!(r.total(), 0);
    }

    #[test]
    fn metric_selects_field() {
        let r = ActivityRecord::new(2, 7);
        assert_eq!(r.metric(RankMetric::Posts), 2);
        assert_eq!(r.metric(RankMetric::Comments), 7);
        assert_eq!(r.total(), 9);
    }

    #[test]
    fn parse_metric() {
        assert_eq!("posts".parse::<RankMetric>().unwrap(), RankMetric::Posts);
        assert_eq!("Comments".parse::<RankMetric>().unwrap(), RankMetric::Comments);
        assert_eq!(" post ".parse::<RankMetric>().unwrap(), RankMetric::Posts);
        assert_eq!(
            "karma".parse::<RankMetric>(),
            Err(TypeError::UnknownMetric("karma".into()))
        );
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for metric in RankMetric::ALL {
            assert_eq!(metric.to_string().parse::<RankMetric>().unwrap(), metric);
        }
    }

    #[test]
    fn metric_serde_is_lowercase() {
        let json = serde_json::to_string(&RankMetric::Comments).unwrap();
        assert_eq!(json, "\"comments\"");
    }
}
