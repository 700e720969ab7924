use std::io;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use nba_scores::cli::{Command, USAGE, parse_args};
use nba_scores::config::ScoresConfig;
use nba_scores::runner::{HttpSource, summarise_games};

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    init_logging();

    let command = parse_args(std::env::args().skip(1), Local::now().date_naive())
        .context("unable to read arguments")?;
    let date = match command {
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Command::Summarise(date) => date,
    };
    let cfg = ScoresConfig::from_env();
    debug!(?cfg, %date, "starting summary run");

    let source = HttpSource::new(&cfg);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    summarise_games(&source, &cfg, date, &mut out)?;
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
