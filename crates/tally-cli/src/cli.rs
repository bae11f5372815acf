use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tally_types::RankMetric;

#[derive(Parser)]
#[command(
    name = "tally",
    about = "Rank the most active authors in a subreddit's recent posts",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Config file (defaults to ./tally.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Aggregate recent activity and print the top authors
    Top(TopArgs),
    /// Print the resolved configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct TopArgs {
    /// Subreddit to aggregate, without the `r/` prefix
    pub subreddit: Option<String>,
    /// Trailing window width, in days
    #[arg(short, long)]
    pub days: Option<u32>,
    /// Newest submissions to fetch (one page)
    #[arg(short, long)]
    pub limit: Option<usize>,
    /// Authors to show per ranking
    #[arg(short = 'k', long)]
    pub top: Option<usize>,
    #[arg(short, long, default_value = "all")]
    pub metric: MetricArg,
    /// Read content from a JSON fixture instead of Reddit
    #[arg(long)]
    pub fixture: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum MetricArg {
    Posts,
    Comments,
    All,
}

impl MetricArg {
    pub fn metrics(self) -> Vec<RankMetric> {
        match self {
            Self::Posts => vec![RankMetric::Posts],
            Self::Comments => vec![RankMetric::Comments],
            Self::All => RankMetric::ALL.to_vec(),
        }
    }
}

#[derive(Args)]
pub struct ConfigArgs {}
