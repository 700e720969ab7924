use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::document::{Find, Query};
use crate::error::{Result, ScoresError};
use crate::model::{Player, StatKey, StatLine, Team};

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([\w ]+) ").expect("valid regex"));
static RECORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((\d+-\d+)").expect("valid regex"));
static ACRONYM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"x_(\w+)_").expect("valid regex"));

static HEADING: Lazy<Find> = Lazy::new(|| Find::new("h2", &[]).expect("valid selector"));
static ROW: Lazy<Find> = Lazy::new(|| Find::new("tr", &[]).expect("valid selector"));
static CELL: Lazy<Find> = Lazy::new(|| Find::new("td", &[]).expect("valid selector"));
static LINK: Lazy<Find> = Lazy::new(|| Find::new("a", &[]).expect("valid selector"));
static PLAYER_HEADER: Lazy<Find> = Lazy::new(|| {
    Find::new("th", &[("data-stat", "player"), ("scope", "row")]).expect("valid selector")
});

const REASON_STAT: &str = "reason";

/// Builds a [`Team`] from one team's basic box-score fragment.
pub fn extract_team<'a, Q: Query<'a>>(fragment: Q) -> Result<Team> {
    let id = fragment
        .attr_of("id")
        .ok_or_else(|| ScoresError::parse("box score fragment has no id"))?;
    let acronym = capture(&ACRONYM_RE, id, "team acronym")?.to_uppercase();

    let heading = fragment
        .first(&HEADING)
        .ok_or_else(|| ScoresError::parse(format!("box score {id} has no heading")))?
        .text_of();
    let name = capture(&NAME_RE, &heading, "team name")?.to_string();
    let record = capture(&RECORD_RE, &heading, "team record")?.to_string();

    let mut rows = stat_rows(fragment);
    let totals_row = rows
        .pop()
        .ok_or_else(|| ScoresError::parse(format!("box score {id} has no stat rows")))?;
    let totals = stat_line(totals_row)?;

    let mut players = Vec::with_capacity(rows.len());
    for row in rows {
        if did_not_play(row) {
            continue;
        }
        players.push(Player {
            name: player_name(row)?,
            team: acronym.clone(),
            stats: stat_line(row)?,
        });
    }

    debug!(%acronym, players = players.len(), pts = totals.pts, "extracted team");
    Ok(Team {
        name,
        acronym,
        record,
        players,
        totals,
    })
}

fn capture<'t>(re: &Regex, haystack: &'t str, what: &str) -> Result<&'t str> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| ScoresError::parse(format!("no {what} in {haystack:?}")))
}

/// Rows headed by a player cell; the last one is the team totals.
/// Separator rows ("Reserves") carry only header cells and are skipped.
fn stat_rows<'a, Q: Query<'a>>(fragment: Q) -> Vec<Q> {
    fragment
        .find(&ROW)
        .into_iter()
        .filter(|row| row.first(&PLAYER_HEADER).is_some() && row.first(&CELL).is_some())
        .collect()
}

fn did_not_play<'a, Q: Query<'a>>(row: Q) -> bool {
    row.first(&CELL)
        .and_then(|td| td.attr_of("data-stat"))
        .is_some_and(|stat| stat == REASON_STAT)
}

fn player_name<'a, Q: Query<'a>>(row: Q) -> Result<String> {
    let cell = row
        .first(&LINK)
        .or_else(|| row.first(&PLAYER_HEADER))
        .ok_or_else(|| ScoresError::parse("player row without header cell"))?;
    Ok(cell.text_of().trim().to_string())
}

/// Reads the counting-stat cells of a row. Cells whose `data-stat` is not a
/// counting stat (`mp`, `fg_pct`, `trb`, `plus_minus`, ...) are ignored.
fn stat_line<'a, Q: Query<'a>>(row: Q) -> Result<StatLine> {
    let mut cells: HashMap<StatKey, u32> = HashMap::new();
    for td in row.find(&CELL) {
        let Some(key) = td.attr_of("data-stat").and_then(StatKey::from_attr) else {
            continue;
        };
        let raw = td.text_of();
        let value = raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ScoresError::parse(format!("{key} cell is not a count: {raw:?}")))?;
        cells.insert(key, value);
    }
    StatLine::from_map(&cells)
}
