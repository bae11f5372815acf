use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use tally_engine::{Aggregator, ContentSource, FixtureSource};
use tally_reddit::{Credentials, RedditSource};
use tally_types::TimeWindow;

use crate::cli::*;
use crate::config::TallyConfig;
use crate::output::Report;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("reading working directory")?;
    let config = TallyConfig::resolve(cli.config.as_deref(), &cwd)?;
    match cli.command {
        Command::Top(args) => cmd_top(config, args, cli.format),
        Command::Config(_) => cmd_config(&config),
    }
}

fn cmd_top(mut config: TallyConfig, args: TopArgs, format: OutputFormat) -> anyhow::Result<()> {
    config.apply(&args);
    config.validate()?;

    let source = open_source(&config, args.fixture.as_deref())?;
    let report = aggregate(source, &config, &args.metric.metrics())?;
    match format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn cmd_config(config: &TallyConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

fn open_source(
    config: &TallyConfig,
    fixture: Option<&Path>,
) -> anyhow::Result<Box<dyn ContentSource>> {
    if let Some(path) = fixture {
        return Ok(Box::new(FixtureSource::load(path)?));
    }
    let credentials = Credentials::from_env().context("loading Reddit credentials")?;
    let source = RedditSource::connect(&credentials, config.reddit.clone())
        .context("connecting to Reddit")?;
    Ok(Box::new(source))
}

/// Run one aggregation and rank the result.
pub(crate) fn aggregate<S: ContentSource>(
    source: S,
    config: &TallyConfig,
    metrics: &[tally_types::RankMetric],
) -> anyhow::Result<Report> {
    let now = Utc::now();
    let ledger = Aggregator::new(source)
        .run_at(&config.subreddit, config.lookback(), config.page_limit, now)
        .with_context(|| format!("aggregating r/{}", config.subreddit))?;
    let window = TimeWindow::trailing(now, config.lookback());
    Ok(Report::build(&config.subreddit, &window, &ledger, metrics, config.top))
}
