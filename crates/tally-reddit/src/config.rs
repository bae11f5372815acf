use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::endpoint::{DEFAULT_API_URL, DEFAULT_AUTH_URL};

/// Connection settings for [`RedditSource`](crate::RedditSource).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedditConfig {
    /// Base URL of the token endpoint host.
    pub auth_url: String,
    /// Base URL of the OAuth API host.
    pub api_url: String,
    /// Per-request timeout, in seconds.
    pub timeout_secs: u64,
    /// Cap on "load more" expansions per thread. `None` expands everything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand_limit: Option<usize>,
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.into(),
            api_url: DEFAULT_API_URL.into(),
            timeout_secs: 30,
            expand_limit: None,
        }
    }
}

impl RedditConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub(crate) fn api(&self, path: &str) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), path)
    }

    pub(crate) fn auth(&self, path: &str) -> String {
        format!("{}{}", self.auth_url.trim_end_matches('/'), path)
    }
}
