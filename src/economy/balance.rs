//! Player balances and the authority clock.

use std::time::Instant;

use crate::board::GameTime;

/// A player's treasury, anchored at the time the authority last reported it.
///
/// The spendable amount grows linearly with income between reports. Either
/// field missing means the player has been eliminated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance {
    principal: Option<f64>,
    income: Option<f64>,
    anchor: GameTime,
    tick_duration: f64,
}

impl Balance {
    pub fn new(
        principal: Option<f64>,
        income: Option<f64>,
        anchor: GameTime,
        tick_duration: f64,
    ) -> Self {
        Balance {
            principal,
            income,
            anchor,
            tick_duration,
        }
    }

    /// A balance for a seat that is out of the game.
    pub fn eliminated(anchor: GameTime, tick_duration: f64) -> Self {
        Balance::new(None, None, anchor, tick_duration)
    }

    pub fn is_valid(&self) -> bool {
        self.principal.is_some() && self.income.is_some()
    }

    /// Income per tick. Zero when unknown.
    pub fn income(&self) -> f64 {
        self.income.unwrap_or(0.0)
    }

    pub fn anchor(&self) -> GameTime {
        self.anchor
    }

    /// Spendable amount at `now`, extrapolated from the anchor.
    pub fn amount(&self, now: GameTime) -> f64 {
        let elapsed = (now - self.anchor) as f64;
        (self.principal.unwrap_or(0.0) + self.income() * elapsed) / self.tick_duration
    }
}

/// Maps authority time onto the local monotonic clock.
///
/// Updates carry the authority's `now`; between updates the agent advances
/// it by the wall time elapsed since the update arrived.
#[derive(Debug, Clone, Copy)]
pub struct GameClock {
    server_time: GameTime,
    received: Instant,
}

impl GameClock {
    pub fn new(server_time: GameTime) -> Self {
        GameClock::anchored(server_time, Instant::now())
    }

    pub fn anchored(server_time: GameTime, received: Instant) -> Self {
        GameClock {
            server_time,
            received,
        }
    }

    pub fn now(&self) -> GameTime {
        self.at(Instant::now())
    }

    /// Authority time corresponding to the local instant `at`.
    pub fn at(&self, at: Instant) -> GameTime {
        let elapsed = at.saturating_duration_since(self.received);
        self.server_time + elapsed.as_millis() as GameTime
    }
}
