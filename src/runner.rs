use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use crate::config::ScoresConfig;
use crate::error::Result as ScoresResult;
use crate::game;
use crate::model::Game;
use crate::render::{render_game, render_header};
use crate::schedule;

/// Where the day's games come from.
pub trait BoxScoreSource {
    fn game_urls(&self, date: NaiveDate) -> ScoresResult<Vec<String>>;
    fn game(&self, url: &str) -> ScoresResult<Game>;
}

/// Live source backed by basketball-reference over HTTP.
pub struct HttpSource<'c> {
    cfg: &'c ScoresConfig,
}

impl<'c> HttpSource<'c> {
    pub fn new(cfg: &'c ScoresConfig) -> Self {
        Self { cfg }
    }
}

impl BoxScoreSource for HttpSource<'_> {
    fn game_urls(&self, date: NaiveDate) -> ScoresResult<Vec<String>> {
        schedule::fetch_game_urls(self.cfg, date)
    }

    fn game(&self, url: &str) -> ScoresResult<Game> {
        game::fetch_game(self.cfg, url)
    }
}

/// Writes the header and then each game's summary, one game at a time.
/// Stops at the first game that fails.
pub fn summarise_games<S: BoxScoreSource, W: Write>(
    source: &S,
    cfg: &ScoresConfig,
    date: NaiveDate,
    out: &mut W,
) -> Result<usize> {
    let urls = source
        .game_urls(date)
        .with_context(|| format!("failed to list games for {date}"))?;

    write_lines(out, &render_header(date, cfg.layout))?;

    for url in &urls {
        let game = source
            .game(url)
            .with_context(|| format!("failed to summarise {url}"))?;
        write_lines(out, &render_game(&game, cfg.layout))?;
    }

    info!(%date, games = urls.len(), "summary complete");
    Ok(urls.len())
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}").context("failed writing summary")?;
    }
    out.flush().context("failed flushing summary")
}
