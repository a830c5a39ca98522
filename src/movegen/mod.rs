//! Action generation.
//!
//! Finds the cells a player can move soldiers to or build on, and turns the
//! agent's policy into concrete actions.

pub mod build;
pub mod movement;

pub use build::{free_building_spaces, needs_defense, tower_build};
pub use movement::{free_soldier_spaces, frontier, is_ready, random_soldier_move, soldier_targets};
