//! Game state representation.
//!
//! Holds one authoritative snapshot of the map: three same-shaped layers
//! (terrain, ownership, objects), plus the unit and economy data delivered
//! alongside them.

use std::fmt;

use super::cell::{Object, Owner, PlayerId, Seen, Terrain, FOG_SYMBOL};
use super::grid::{Coord, Grid};
use crate::economy::Balance;

/// Authority time in milliseconds, monotonic within a game session.
pub type GameTime = i64;

/// A seat in the current game.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub rating: f64,
    /// True when the seat was filled by a server bot.
    pub bot: bool,
}

/// A soldier on the map. Its owner is whoever owns the cell it stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Soldier {
    pub coord: Coord,
    pub cooldown_start: GameTime,
}

/// The three map layers of a snapshot.
///
/// All layers share dimensions; the authority guarantees it and the
/// protocol decoder checks it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct World {
    pub land: Grid<Seen<Terrain>>,
    pub owners: Grid<Seen<Owner>>,
    pub objects: Grid<Seen<Object>>,
}

impl World {
    pub fn new(
        land: Grid<Seen<Terrain>>,
        owners: Grid<Seen<Owner>>,
        objects: Grid<Seen<Object>>,
    ) -> Self {
        debug_assert!(land.same_shape(&owners) && land.same_shape(&objects));
        World {
            land,
            owners,
            objects,
        }
    }

    pub fn height(&self) -> usize {
        self.land.height()
    }

    pub fn width(&self) -> usize {
        self.land.width()
    }

    /// Returns true if `player` owns the cell at `c`.
    pub fn is_owned_by(&self, c: Coord, player: PlayerId) -> bool {
        self.owners
            .get(c)
            .is_some_and(|o| o.is(Owner::Player(player)))
    }

    /// The visible object at `c`, or `None` when fogged or off the map.
    pub fn object_at(&self, c: Coord) -> Option<Object> {
        self.objects.get(c).and_then(|o| o.known())
    }

    /// Returns true if `c` is visible, passable land.
    pub fn is_land(&self, c: Coord) -> bool {
        self.land.get(c).is_some_and(|t| t.is(Terrain::Land))
    }

    /// Soldiers standing on cells owned by `player`.
    pub fn soldiers_of<'a>(
        &'a self,
        soldiers: &'a [Soldier],
        player: PlayerId,
    ) -> impl Iterator<Item = &'a Soldier> + 'a {
        soldiers
            .iter()
            .filter(move |s| self.is_owned_by(s.coord, player))
    }
}

/// Two characters per cell, separated by spaces: the object if there is one,
/// else the terrain, then the owner. Fogged layers print `*`.
impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.land.coords().enumerate() {
            if c.col == 0 && i > 0 {
                writeln!(f)?;
            } else if c.col > 0 {
                write!(f, " ")?;
            }
            let ground = match (self.objects.get(c), self.land.get(c)) {
                (Some(Seen::Known(o)), _) if *o != Object::Empty => o.symbol(),
                (_, Some(Seen::Known(t))) => t.symbol(),
                _ => FOG_SYMBOL,
            };
            let owner = match self.owners.get(c) {
                Some(Seen::Known(o)) => o.symbol(),
                _ => FOG_SYMBOL,
            };
            write!(f, "{}{}", ground, owner)?;
        }
        Ok(())
    }
}

/// Everything the authority hands the agent on one update.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub now: GameTime,
    pub world: World,
    pub me: PlayerId,
    pub balance: Balance,
    /// Balances of every seat, in seat order.
    pub balances: Vec<Balance>,
    pub soldiers: Vec<Soldier>,
    /// Diagnostic output toggle; never affects decisions.
    pub log: bool,
}
