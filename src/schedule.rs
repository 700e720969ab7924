use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use tracing::info;

use crate::config::ScoresConfig;
use crate::document::{Find, Query, parse_document};
use crate::error::{Result, ScoresError};
use crate::http_client::fetch_text;

static GAME_LINK_CELL: Lazy<Find> =
    Lazy::new(|| Find::new("td", &[("class", "gamelink")]).expect("valid selector"));
static LINK: Lazy<Find> = Lazy::new(|| Find::new("a", &[]).expect("valid selector"));

/// Lists the box-score URLs for every game played on `date`, in page order.
pub fn fetch_game_urls(cfg: &ScoresConfig, date: NaiveDate) -> Result<Vec<String>> {
    let url = format!("{}/boxscores", cfg.base_url);
    let params = [
        ("day", date.day().to_string()),
        ("month", date.month().to_string()),
        ("year", date.year().to_string()),
    ];
    let body = fetch_text(cfg, &url, &params)?;
    let urls = parse_schedule(&body, &cfg.base_url)?;
    info!(%date, games = urls.len(), "found games");
    Ok(urls)
}

pub fn parse_schedule(html: &str, base_url: &str) -> Result<Vec<String>> {
    let doc = parse_document(html);
    let mut urls = Vec::new();
    for cell in doc.root_element().find(&GAME_LINK_CELL) {
        let href = cell
            .first(&LINK)
            .and_then(|a| a.attr_of("href"))
            .ok_or_else(|| ScoresError::parse("game link cell without href"))?;
        urls.push(format!("{base_url}{href}"));
    }
    Ok(urls)
}

/// Parses the `DD/MM/YYYY` command-line date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%d/%m/%Y")
        .map_err(|e| ScoresError::Usage(format!("invalid date {raw:?} (expected DD/MM/YYYY): {e}")))
}
