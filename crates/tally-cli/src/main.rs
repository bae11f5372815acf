use clap::Parser;
use tracing::Level;

mod cli;
mod commands;
mod config;
mod output;

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; credentials may come from the environment.
    dotenv::dotenv().ok();
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);
    commands::run_command(cli)
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
