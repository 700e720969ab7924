use chrono::NaiveDate;

use crate::config::SummaryLayout;
use crate::model::{Game, Team};

const BORDER: char = '*';
const TEAM_GAP: &str = "   @   ";

/// Title block printed once per run, before any game.
pub fn render_header(date: NaiveDate, layout: SummaryLayout) -> Vec<String> {
    let stars = BORDER.to_string().repeat(layout.width);
    vec![
        centered(&stars, layout),
        centered("", layout),
        centered("NBA Scores Summary", layout),
        centered(&date.format("%d/%m/%Y").to_string(), layout),
        centered("", layout),
        centered(&stars, layout),
    ]
}

pub fn render_game(game: &Game, layout: SummaryLayout) -> Vec<String> {
    let road = &game.road;
    let home = &game.home;
    let names = format!("{}{TEAM_GAP}{}", road.name, home.name);
    let names_pad = left_pad(&names, layout.width as i64);

    let mut lines = vec![centered("", layout), centered(&names, layout)];
    lines.push(aligned_pair(
        road,
        &road.score().to_string(),
        home,
        &home.score().to_string(),
        names_pad,
        layout,
    ));
    lines.push(aligned_pair(road, &road.record, home, &home.record, names_pad, layout));
    lines.push(centered("", layout));

    match game.top_player() {
        Some(top) => {
            let s = &top.stats;
            lines.push(centered(
                &format!("Top Player - {} ({})", top.name, top.team),
                layout,
            ));
            lines.push(centered(
                &format!(
                    "{} PTS, {} REB, {} AST, {} STL, {} BLK",
                    s.pts,
                    s.rebounds(),
                    s.ast,
                    s.stl,
                    s.blk
                ),
                layout,
            ));
        }
        None => {
            lines.push(centered("Top Player - n/a", layout));
            lines.push(centered("", layout));
        }
    }

    lines.push(centered("", layout));
    lines.push(closing_border(layout));
    lines
}

pub fn closing_border(layout: SummaryLayout) -> String {
    BORDER.to_string().repeat(layout.width + 2)
}

/// Two values, each centred under its team's name in the names line.
fn aligned_pair(
    road: &Team,
    road_value: &str,
    home: &Team,
    home_value: &str,
    names_pad: i64,
    layout: SummaryLayout,
) -> String {
    let road_pad = left_pad(road_value, char_len(&road.name));
    let home_pad = left_pad(home_value, char_len(&home.name));
    let gap = char_len(TEAM_GAP);
    let centre = (char_len(&road.name) - char_len(road_value) - road_pad + gap + home_pad).max(1);
    let line = format!("{road_value}{}{home_value}", " ".repeat(centre as usize));
    bordered(&line, names_pad + road_pad, layout)
}

fn char_len(s: &str) -> i64 {
    s.chars().count() as i64
}

/// Floor of half the slack; negative when `text` is wider than `width`.
fn left_pad(text: &str, width: i64) -> i64 {
    (width - char_len(text)).div_euclid(2)
}

pub fn centered(text: &str, layout: SummaryLayout) -> String {
    bordered(text, left_pad(text, layout.width as i64), layout)
}

/// Frames `text` so exactly `layout.width` characters sit between the borders.
fn bordered(text: &str, left: i64, layout: SummaryLayout) -> String {
    let width = layout.width;
    let text: String = text.chars().take(width).collect();
    let len = text.chars().count();
    let left = left.clamp(0, (width - len) as i64) as usize;
    let right = width - left - len;
    format!(
        "{BORDER}{}{text}{}{BORDER}",
        " ".repeat(left),
        " ".repeat(right)
    )
}
