use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Trailing time window, fixed at a single cutoff instant.
///
/// The cutoff is computed once per aggregation run (`now - lookback`) and is
/// not recomputed while the run is fetching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    cutoff: DateTime<Utc>,
}

impl TimeWindow {
    /// Window covering everything at or after `cutoff`.
    pub const fn since(cutoff: DateTime<Utc>) -> Self {
        Self { cutoff }
    }

    /// Window covering the `lookback` ending at `now`. A lookback reaching
    /// past the earliest representable instant starts the window there.
    pub fn trailing(now: DateTime<Utc>, lookback: Duration) -> Self {
        Self {
            cutoff: now
                .checked_sub_signed(lookback)
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
        }
    }

    pub const fn cutoff(&self) -> DateTime<Utc> {
        self.cutoff
    }

    /// Returns `true` if `timestamp` is no older than the cutoff.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.cutoff
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "since {}", self.cutoff.to_rfc3339())
    }
}
