use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use tally_reddit::RedditConfig;

use crate::cli::TopArgs;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "tally.toml";

/// Largest page a single listing request can return.
pub const MAX_PAGE_LIMIT: usize = tally_reddit::endpoint::MAX_PAGE_LIMIT;

/// Resolved run settings: defaults, then the config file, then CLI flags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    pub subreddit: String,
    pub lookback_days: u32,
    pub page_limit: usize,
    pub top: usize,
    pub reddit: RedditConfig,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            subreddit: "python".into(),
            lookback_days: 3,
            page_limit: 20,
            top: 3,
            reddit: RedditConfig::default(),
        }
    }
}

impl TallyConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Load `explicit` if given, else `tally.toml` in `dir` if it exists,
    /// else defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let fallback: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            tracing::debug!(path = %fallback.display(), "using config file");
            Self::load(&fallback)
        } else {
            Ok(Self::default())
        }
    }

    /// Overlay flags given on the command line.
    pub fn apply(&mut self, args: &TopArgs) {
        if let Some(subreddit) = &args.subreddit {
            self.subreddit = subreddit.trim_start_matches("r/").to_string();
        }
        if let Some(days) = args.days {
            self.lookback_days = days;
        }
        if let Some(limit) = args.limit {
            self.page_limit = limit;
        }
        if let Some(top) = args.top {
            self.top = top;
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.subreddit.trim().is_empty() {
            bail!("subreddit must not be empty");
        }
        if self.lookback_days == 0 {
            bail!("lookback_days must be at least 1");
        }
        if self.page_limit == 0 || self.page_limit > MAX_PAGE_LIMIT {
            bail!(
                "page_limit must be between 1 and {MAX_PAGE_LIMIT}, got {}",
                self.page_limit
            );
        }
        if self.top == 0 {
            bail!("top must be at least 1");
        }
        Ok(())
    }

    pub fn lookback(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.lookback_days))
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("serializing config")
    }
}
