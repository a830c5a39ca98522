//! Heuristic position scoring.
//!
//! Reduces a player's user map to four numbers: how much land they hold,
//! how well it is covered by towers, how strong their army is, and how many
//! farms they run.
//!
//! Tower coverage is counted per covered cell, so a tower contributes once
//! for itself and once for each owned neighbour. Decision thresholds are
//! tuned against that area-weighted magnitude.

use super::user_map::UserMap;
use crate::board::{neighbors_in_bounds, Coord, Object};

/// Per-agent exponents applied to unit and tower levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponents {
    pub soldier: f64,
    pub tower: f64,
}

impl Default for Exponents {
    fn default() -> Self {
        Exponents {
            soldier: 1.0,
            tower: 1.0,
        }
    }
}

/// Strategic summary of one player's position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UserWeight {
    pub territory: f64,
    pub defense: f64,
    pub attack: f64,
    pub farming: f64,
}

impl UserWeight {
    /// Defense per owned cell, or `None` for a player with no territory.
    pub fn defense_ratio(&self) -> Option<f64> {
        if self.territory > 0.0 {
            Some(self.defense / self.territory)
        } else {
            None
        }
    }
}

#[inline]
fn weighted(level: u32, exponent: f64) -> f64 {
    if level == 0 {
        0.0
    } else {
        f64::from(level).powf(exponent)
    }
}

/// Highest tower level on `c` or any of its neighbours, 0 if none.
fn strongest_tower_near(map: &UserMap, c: Coord) -> u32 {
    let (height, width) = (map.cells().height(), map.cells().width());
    std::iter::once(c)
        .chain(neighbors_in_bounds(c, height, width))
        .filter_map(|n| map.get(n).and_then(|cell| cell.owned_object()))
        .filter(|o| o.is_tower())
        .map(Object::level)
        .max()
        .unwrap_or(0)
}

/// Scores a user map.
pub fn score(map: &UserMap, exponents: Exponents) -> UserWeight {
    let mut weight = UserWeight::default();
    for (c, object) in map.owned() {
        weight.territory += 1.0;
        if object == Object::Farm {
            weight.farming += 1.0;
        }
        if object.is_soldier() {
            weight.attack += weighted(object.level(), exponents.soldier);
        }
        weight.defense += weighted(strongest_tower_near(map, c), exponents.tower);
    }
    weight
}
