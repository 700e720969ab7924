use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, ScoresError};
use crate::metric;

/// The fourteen counting stats read from a box-score row, keyed by their
/// `data-stat` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatKey {
    Fg,
    Fga,
    Fg3,
    Fg3a,
    Ft,
    Fta,
    Orb,
    Drb,
    Ast,
    Stl,
    Blk,
    Tov,
    Pf,
    Pts,
}

impl StatKey {
    pub const ALL: [StatKey; 14] = [
        StatKey::Fg,
        StatKey::Fga,
        StatKey::Fg3,
        StatKey::Fg3a,
        StatKey::Ft,
        StatKey::Fta,
        StatKey::Orb,
        StatKey::Drb,
        StatKey::Ast,
        StatKey::Stl,
        StatKey::Blk,
        StatKey::Tov,
        StatKey::Pf,
        StatKey::Pts,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StatKey::Fg => "fg",
            StatKey::Fga => "fga",
            StatKey::Fg3 => "fg3",
            StatKey::Fg3a => "fg3a",
            StatKey::Ft => "ft",
            StatKey::Fta => "fta",
            StatKey::Orb => "orb",
            StatKey::Drb => "drb",
            StatKey::Ast => "ast",
            StatKey::Stl => "stl",
            StatKey::Blk => "blk",
            StatKey::Tov => "tov",
            StatKey::Pf => "pf",
            StatKey::Pts => "pts",
        }
    }

    pub fn from_attr(attr: &str) -> Option<StatKey> {
        StatKey::ALL.into_iter().find(|k| k.as_str() == attr)
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of counting stats. Every field is required, so a `StatLine`
/// always carries `pts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatLine {
    pub fg: u32,
    pub fga: u32,
    pub fg3: u32,
    pub fg3a: u32,
    pub ft: u32,
    pub fta: u32,
    pub orb: u32,
    pub drb: u32,
    pub ast: u32,
    pub stl: u32,
    pub blk: u32,
    pub tov: u32,
    pub pf: u32,
    pub pts: u32,
}

impl StatLine {
    /// Builds a line from scraped cells, failing on the first absent key.
    pub fn from_map(cells: &HashMap<StatKey, u32>) -> Result<Self> {
        let get = |key: StatKey| cells.get(&key).copied().ok_or(ScoresError::MissingStat(key));
        Ok(Self {
            fg: get(StatKey::Fg)?,
            fga: get(StatKey::Fga)?,
            fg3: get(StatKey::Fg3)?,
            fg3a: get(StatKey::Fg3a)?,
            ft: get(StatKey::Ft)?,
            fta: get(StatKey::Fta)?,
            orb: get(StatKey::Orb)?,
            drb: get(StatKey::Drb)?,
            ast: get(StatKey::Ast)?,
            stl: get(StatKey::Stl)?,
            blk: get(StatKey::Blk)?,
            tov: get(StatKey::Tov)?,
            pf: get(StatKey::Pf)?,
            pts: get(StatKey::Pts)?,
        })
    }

    pub fn get(&self, key: StatKey) -> u32 {
        match key {
            StatKey::Fg => self.fg,
            StatKey::Fga => self.fga,
            StatKey::Fg3 => self.fg3,
            StatKey::Fg3a => self.fg3a,
            StatKey::Ft => self.ft,
            StatKey::Fta => self.fta,
            StatKey::Orb => self.orb,
            StatKey::Drb => self.drb,
            StatKey::Ast => self.ast,
            StatKey::Stl => self.stl,
            StatKey::Blk => self.blk,
            StatKey::Tov => self.tov,
            StatKey::Pf => self.pf,
            StatKey::Pts => self.pts,
        }
    }

    pub fn rebounds(&self) -> u32 {
        self.orb + self.drb
    }

    pub fn game_score(&self) -> f64 {
        metric::game_score(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    /// Acronym of the owning team.
    pub team: String,
    pub stats: StatLine,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub name: String,
    pub acronym: String,
    pub record: String,
    pub players: Vec<Player>,
    pub totals: StatLine,
}

impl Team {
    pub fn score(&self) -> u32 {
        self.totals.pts
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub url: String,
    pub road: Team,
    pub home: Team,
}

impl Game {
    /// All players of both teams, road first, in page order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.road.players.iter().chain(self.home.players.iter())
    }

    /// Highest game score; the first player wins a tie.
    pub fn top_player(&self) -> Option<&Player> {
        let mut best: Option<(&Player, f64)> = None;
        for player in self.players() {
            let score = player.stats.game_score();
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((player, score)),
            }
        }
        best.map(|(player, _)| player)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.road,
            self.road.score(),
            self.home.score(),
            self.home
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, pts: u32) -> Player {
        Player {
            name: name.to_string(),
            team: "AAA".to_string(),
            stats: StatLine {
                pts,
                ..StatLine::default()
            },
        }
    }

    fn team(acronym: &str, players: Vec<Player>, pts: u32) -> Team {
        Team {
            name: format!("{acronym} City"),
            acronym: acronym.to_string(),
            record: "1-0".to_string(),
            players,
            totals: StatLine {
                pts,
                ..StatLine::default()
            },
        }
    }

    #[test]
    fn stat_key_attr_round_trip() {
        for key in StatKey::ALL {
            assert_eq!(StatKey::from_attr(key.as_str()), Some(key));
        }
        assert_eq!(StatKey::from_attr("mp"), None);
        assert_eq!(StatKey::from_attr("plus_minus"), None);
    }

    #[test]
    fn stat_line_requires_every_key() {
        let mut cells: HashMap<StatKey, u32> = StatKey::ALL.iter().map(|k| (*k, 1)).collect();
        assert!(StatLine::from_map(&cells).is_ok());

        cells.remove(&StatKey::Fg3a);
        let err = StatLine::from_map(&cells).unwrap_err();
        assert!(matches!(err, ScoresError::MissingStat(StatKey::Fg3a)));
    }

    #[test]
    fn top_player_ties_go_to_first_seen() {
        let game = Game {
            url: "u".to_string(),
            road: team("AAA", vec![player("First", 20), player("Low", 5)], 25),
            home: team("BBB", vec![player("Second", 20)], 20),
        };
        assert_eq!(game.top_player().map(|p| p.name.as_str()), Some("First"));
        assert_eq!(game.to_string(), "AAA City 25 - 20 BBB City");
    }

    #[test]
    fn top_player_of_empty_game_is_none() {
        let game = Game {
            url: "u".to_string(),
            road: team("AAA", Vec::new(), 0),
            home: team("BBB", Vec::new(), 0),
        };
        assert!(game.top_player().is_none());
    }
}
