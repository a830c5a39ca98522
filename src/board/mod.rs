//! Board representation and game-state types.
//!
//! Contains the grid container, hex geometry, the per-layer cell alphabets,
//! actions, and the snapshot the authority sends every update.

pub mod cell;
pub mod grid;
pub mod hex;
pub mod order;
pub mod state;

pub use cell::{Object, Owner, PlayerId, Seen, Terrain, FOG_SYMBOL, PLAYER_COUNT, PLAYER_SYMBOLS};
pub use grid::{visit, Coord, Grid};
pub use hex::{distance, is_adjacent, neighbors, neighbors_in_bounds};
pub use order::{Action, ActionSink};
pub use state::{GameTime, Player, Snapshot, Soldier, World};
