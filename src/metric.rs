use std::collections::HashMap;

use crate::error::{Result, ScoresError};
use crate::model::{StatKey, StatLine};

/// Keys the game score formula reads; three-pointers are not among them.
pub const GAME_SCORE_KEYS: [StatKey; 12] = [
    StatKey::Pts,
    StatKey::Fg,
    StatKey::Tov,
    StatKey::Fga,
    StatKey::Orb,
    StatKey::Fta,
    StatKey::Ft,
    StatKey::Drb,
    StatKey::Stl,
    StatKey::Ast,
    StatKey::Blk,
    StatKey::Pf,
];

pub fn game_score(s: &StatLine) -> f64 {
    weighted(|key| s.get(key) as f64)
}

/// Same formula over a loose `data-stat -> value` mapping.
pub fn game_score_from_map(stats: &HashMap<String, u32>) -> Result<f64> {
    if let Some(missing) = GAME_SCORE_KEYS
        .into_iter()
        .find(|key| !stats.contains_key(key.as_str()))
    {
        return Err(ScoresError::MissingStat(missing));
    }
    Ok(weighted(|key| {
        stats.get(key.as_str()).copied().unwrap_or_default() as f64
    }))
}

fn weighted(v: impl Fn(StatKey) -> f64) -> f64 {
    v(StatKey::Pts) + 0.4 * v(StatKey::Fg) - v(StatKey::Tov) - 0.7 * v(StatKey::Fga)
        + 0.7 * v(StatKey::Orb)
        - 0.4 * (v(StatKey::Fta) - v(StatKey::Ft))
        + 0.3 * v(StatKey::Drb)
        + v(StatKey::Stl)
        + 0.7 * v(StatKey::Ast)
        + 0.7 * v(StatKey::Blk)
        - 0.4 * v(StatKey::Pf)
}
