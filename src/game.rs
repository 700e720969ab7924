use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::config::ScoresConfig;
use crate::document::{Find, Query, parse_document};
use crate::error::{Result, ScoresError};
use crate::extract::extract_team;
use crate::http_client::fetch_text;
use crate::model::Game;

static BASIC_BOX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"all_box_\w+_basic").expect("valid regex"));
static SECTION: Lazy<Find> = Lazy::new(|| Find::new("div", &[]).expect("valid selector"));

pub fn fetch_game(cfg: &ScoresConfig, url: &str) -> Result<Game> {
    let body = fetch_text(cfg, url, &[])?;
    let game = parse_game(url, &body)?;
    info!(%game, "assembled game");
    Ok(game)
}

/// Builds a game from a box-score page: road team first, home second.
pub fn parse_game(url: &str, html: &str) -> Result<Game> {
    let doc = parse_document(html);
    let fragments = doc
        .root_element()
        .find_by_id_pattern(&SECTION, &BASIC_BOX_RE);
    if fragments.len() < 2 {
        return Err(ScoresError::IncompleteGame {
            url: url.to_string(),
            found: fragments.len(),
        });
    }
    if fragments.len() > 2 {
        debug!(url, found = fragments.len(), "extra box scores ignored");
    }

    Ok(Game {
        url: url.to_string(),
        road: extract_team(fragments[0])?,
        home: extract_team(fragments[1])?,
    })
}
