use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use nba_scores::config::ScoresConfig;
use nba_scores::game::parse_game;
use nba_scores::model::Game;
use nba_scores::runner::{BoxScoreSource, summarise_games};
use nba_scores::schedule::parse_schedule;

const BASE: &str = "https://www.basketball-reference.com";

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

/// Serves a scoreboard fixture, and the same box-score fixture for every game.
struct FixtureSource {
    cfg: ScoresConfig,
    scoreboard: &'static str,
    box_score: &'static str,
}

impl BoxScoreSource for FixtureSource {
    fn game_urls(&self, _date: NaiveDate) -> nba_scores::Result<Vec<String>> {
        parse_schedule(&read_fixture(self.scoreboard), BASE)
    }

    fn game(&self, url: &str) -> nba_scores::Result<Game> {
        parse_game(url, &read_fixture(self.box_score))
    }
}

fn christmas() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 12, 25).unwrap()
}

fn run(source: &FixtureSource) -> anyhow::Result<(usize, Vec<String>)> {
    let mut out = Vec::new();
    let games = summarise_games(source, &source.cfg, christmas(), &mut out)?;
    let text = String::from_utf8(out).expect("utf8 output");
    Ok((games, text.lines().map(str::to_string).collect()))
}

#[test]
fn empty_day_prints_only_the_header() {
    let source = FixtureSource {
        cfg: ScoresConfig::default(),
        scoreboard: "scoreboard_empty.html",
        box_score: "box_score.html",
    };
    let (games, lines) = run(&source).unwrap();
    assert_eq!(games, 0);
    assert_eq!(lines.len(), 6);
    assert!(lines[2].contains("NBA Scores Summary"));
    assert!(lines[3].contains("25/12/2019"));
}

#[test]
fn each_game_gets_a_block() {
    let source = FixtureSource {
        cfg: ScoresConfig::default(),
        scoreboard: "scoreboard.html",
        box_score: "box_score.html",
    };
    let (games, lines) = run(&source).unwrap();
    assert_eq!(games, 3);
    assert_eq!(lines.len(), 6 + 3 * 9);

    let width = source.cfg.layout.width;
    assert!(lines.iter().all(|l| l.chars().count() == width + 2));

    let block = &lines[6..15];
    assert!(block[1].contains("Boston Celtics   @   Toronto Raptors"));
    assert!(block[2].contains("69") && block[2].contains("59"));
    assert!(block[3].contains("23-8") && block[3].contains("20-11"));
    assert!(block[5].contains("Top Player - Andre Whitfield (TOR)"));
    assert!(block[6].contains("34 PTS, 7 REB, 7 AST, 2 STL, 1 BLK"));
    assert_eq!(block[8], "*".repeat(width + 2));
}

#[test]
fn one_bad_game_stops_the_run() {
    let source = FixtureSource {
        cfg: ScoresConfig::default(),
        scoreboard: "scoreboard.html",
        box_score: "box_score_single.html",
    };
    let err = run(&source).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("201912250TOR"), "{chain}");
    assert!(chain.contains("expected 2 team box scores, found 1"), "{chain}");
}

#[test]
fn width_is_configurable() {
    let mut cfg = ScoresConfig::default();
    cfg.layout.width = 80;
    let source = FixtureSource {
        cfg,
        scoreboard: "scoreboard.html",
        box_score: "box_score.html",
    };
    let (_, lines) = run(&source).unwrap();
    assert!(lines.iter().all(|l| l.chars().count() == 82));
}
