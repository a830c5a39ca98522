//! Game configuration and purchase catalogues.
//!
//! The authority sends its configuration once per game. Field names follow
//! the authority's JSON, and the income and price tables are keyed by map
//! symbols.

use serde::{Deserialize, Serialize};

use super::balance::Balance;
use crate::board::{GameTime, Object};

/// Per-tick income contributed by each kind of owned cell. Negative values
/// are upkeep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeTable {
    #[serde(rename = "&")]
    pub town_hall: f64,
    #[serde(rename = "#")]
    pub land: f64,
    #[serde(rename = "$")]
    pub farm: f64,
    #[serde(rename = ".")]
    pub empty: f64,
    #[serde(rename = "1")]
    pub soldier1: f64,
    #[serde(rename = "2")]
    pub soldier2: f64,
    #[serde(rename = "3")]
    pub soldier3: f64,
    #[serde(rename = "4")]
    pub soldier4: f64,
    #[serde(rename = "|")]
    pub tower1: f64,
    #[serde(rename = "‖")]
    pub tower2: f64,
    #[serde(rename = "↑")]
    pub tree: f64,
    #[serde(rename = "✞")]
    pub grave: f64,
}

impl IncomeTable {
    /// Income delta of an object standing on an owned cell.
    pub fn of(&self, object: Object) -> f64 {
        match object {
            Object::Empty => self.empty,
            Object::TownHall => self.town_hall,
            Object::Farm => self.farm,
            Object::Tower1 => self.tower1,
            Object::Tower2 => self.tower2,
            Object::Soldier1 => self.soldier1,
            Object::Soldier2 => self.soldier2,
            Object::Soldier3 => self.soldier3,
            Object::Soldier4 => self.soldier4,
            Object::Tree => self.tree,
            Object::Grave => self.grave,
        }
    }
}

/// Purchase prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    #[serde(rename = "farmStart")]
    pub farm_start: f64,
    #[serde(rename = "farmStep")]
    pub farm_step: f64,
    #[serde(rename = ".")]
    pub empty: f64,
    #[serde(rename = "1")]
    pub soldier1: f64,
    #[serde(rename = "2")]
    pub soldier2: f64,
    #[serde(rename = "3")]
    pub soldier3: f64,
    #[serde(rename = "4")]
    pub soldier4: f64,
    #[serde(rename = "|")]
    pub tower1: f64,
    #[serde(rename = "‖")]
    pub tower2: f64,
}

impl PriceTable {
    /// Price of a purchasable object; `None` for things that cannot be bought
    /// at a flat price.
    pub fn of(&self, object: Object) -> Option<f64> {
        match object {
            Object::Empty => Some(self.empty),
            Object::Soldier1 => Some(self.soldier1),
            Object::Soldier2 => Some(self.soldier2),
            Object::Soldier3 => Some(self.soldier3),
            Object::Soldier4 => Some(self.soldier4),
            Object::Tower1 => Some(self.tower1),
            Object::Tower2 => Some(self.tower2),
            _ => None,
        }
    }

    /// Price of the next farm for a player who already owns `owned` farms.
    pub fn farm(&self, owned: usize) -> f64 {
        self.farm_start + self.farm_step * owned as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Economy {
    pub income: IncomeTable,
    pub prices: PriceTable,
}

/// Game settings announced by the authority at the start of a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    /// Visibility radius in cells; negative disables fog.
    pub fog: i32,
    pub start_timeout: u64,
    /// Milliseconds per economy tick.
    pub tick_duration: f64,
    pub initial_balance: f64,
    pub max_balance: f64,
    pub prepare_soldiers: bool,
    pub economy: Economy,
    /// Milliseconds a soldier must rest after moving.
    pub soldier_cooldown: i64,
    /// Rating assigned to server-filled seats.
    pub average_rating: Option<f64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            fog: -1,
            start_timeout: 1500,
            tick_duration: 8000.0,
            initial_balance: 10.0,
            max_balance: 140.0,
            prepare_soldiers: false,
            economy: Economy {
                income: IncomeTable {
                    town_hall: 2.0,
                    land: 1.0,
                    farm: 4.0,
                    empty: 0.0,
                    soldier1: -1.0,
                    soldier2: -6.0,
                    soldier3: -18.0,
                    soldier4: -36.0,
                    tower1: -1.0,
                    tower2: -6.0,
                    tree: -1.0,
                    grave: -1.0,
                },
                prices: PriceTable {
                    farm_start: 12.0,
                    farm_step: 6.0,
                    empty: 0.0,
                    soldier1: 10.0,
                    soldier2: 20.0,
                    soldier3: 30.0,
                    soldier4: 40.0,
                    tower1: 15.0,
                    tower2: 35.0,
                },
            },
            soldier_cooldown: 10_000,
            average_rating: None,
        }
    }
}

impl GameConfig {
    /// Visibility radius, or `None` when the game is played without fog.
    pub fn fog_radius(&self) -> Option<u32> {
        u32::try_from(self.fog).ok()
    }

    fn tier(&self, object: Object) -> Tier {
        Tier {
            object,
            price: self.economy.prices.of(object).unwrap_or(f64::INFINITY),
            upkeep: self.economy.income.of(object),
        }
    }

    /// Tower tiers, weakest first.
    pub fn towers(&self) -> Vec<Tier> {
        [Object::Tower1, Object::Tower2]
            .into_iter()
            .map(|o| self.tier(o))
            .collect()
    }

    /// Soldier tiers, weakest first.
    pub fn soldiers(&self) -> Vec<Tier> {
        [
            Object::Soldier1,
            Object::Soldier2,
            Object::Soldier3,
            Object::Soldier4,
        ]
        .into_iter()
        .map(|o| self.tier(o))
        .collect()
    }
}

/// One purchasable kind with its sticker price and recurring income delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub object: Object,
    pub price: f64,
    pub upkeep: f64,
}

/// Picks the strongest tier the player can both buy now and sustain.
///
/// `tiers` must be ordered weakest first. A tier qualifies when the current
/// amount exceeds its price and current income exceeds its upkeep.
pub fn strongest_affordable(balance: &Balance, now: GameTime, tiers: &[Tier]) -> Option<Tier> {
    let amount = balance.amount(now);
    let income = balance.income();
    tiers
        .iter()
        .rev()
        .find(|t| amount > t.price && income > -t.upkeep)
        .copied()
}
