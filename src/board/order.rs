//! Actions the agent can issue.
//!
//! The authority accepts a single `move(from, to, what)` message: `from` is
//! absent for purchases and present when an existing soldier relocates.

use super::cell::Object;
use super::grid::Coord;

/// One action sent to the authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Buy `what` and place it at `to`.
    Place { to: Coord, what: Object },

    /// Relocate the soldier standing on `from`.
    Move { from: Coord, to: Coord, what: Object },
}

impl Action {
    /// Source cell, `None` for purchases.
    pub fn from(&self) -> Option<Coord> {
        match *self {
            Action::Place { .. } => None,
            Action::Move { from, .. } => Some(from),
        }
    }

    pub fn to(&self) -> Coord {
        match *self {
            Action::Place { to, .. } | Action::Move { to, .. } => to,
        }
    }

    pub fn what(&self) -> Object {
        match *self {
            Action::Place { what, .. } | Action::Move { what, .. } => what,
        }
    }
}

/// Receives the agent's decisions. The driver turns them into protocol
/// messages; tests collect them.
pub trait ActionSink {
    fn emit(&mut self, action: Action);

    /// Concede the game. Not used by the current policy.
    fn surrender(&mut self) {}
}

impl ActionSink for Vec<Action> {
    fn emit(&mut self, action: Action) {
        self.push(action);
    }
}
