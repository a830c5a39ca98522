//! Position evaluation.
//!
//! Rebuilds each player's ownership view of the map and scores it by
//! territory, tower coverage, army strength and farming.

pub mod heuristic;
pub mod user_map;

pub use heuristic::{score, Exponents, UserWeight};
pub use user_map::{UserCell, UserMap, OWNED_EMPTY_SYMBOL};
