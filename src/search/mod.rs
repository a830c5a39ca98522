//! Breadth-first searches over the map.
//!
//! `fog` computes land distances from a player's territory and redacts what
//! lies beyond sight; `path` finds shortest soldier routes between cells.

pub mod fog;
pub mod path;

pub use fog::{apply_fog, distance_field};
pub use path::{back_prune, expand, shortest_path};
