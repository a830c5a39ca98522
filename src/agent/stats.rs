//! Per-seat activity tracking.

use crate::board::GameTime;
use crate::eval::UserMap;

/// What the agent has observed about one seat's pace of play.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerStats {
    /// User map from the previous update.
    pub user_map: UserMap,
    /// Number of actions detected so far.
    pub moves: u32,
    /// Authority time of the last detected action.
    pub last_interaction: GameTime,
    /// Weighted moving average of the gap between actions, in milliseconds.
    pub average_interaction: f64,
}

impl PlayerStats {
    /// Records a fresh user map, folding the gap since the previous action
    /// into the average when the map shows one. Returns true if it did.
    pub fn observe(&mut self, map: UserMap, now: GameTime, weight: f64) -> bool {
        let acted = map.shows_action_since(&self.user_map);
        if acted {
            let gap = (now - self.last_interaction) as f64;
            self.average_interaction = blend(self.average_interaction, self.moves, gap, weight);
            self.moves += 1;
            self.last_interaction = now;
        }
        self.user_map = map;
        acted
    }

    /// Returns true once at least one action has been seen.
    pub fn has_activity(&self) -> bool {
        self.moves > 0
    }
}

/// `(avg * n * w + gap * (2 - w)) / (n + 1)`
pub fn blend(average: f64, moves: u32, gap: f64, weight: f64) -> f64 {
    let n = f64::from(moves);
    (average * n * weight + gap * (2.0 - weight)) / (n + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Coord, Grid, Object, Owner, PlayerId, Seen, Terrain, World};

    fn me() -> PlayerId {
        PlayerId::from_index(0).unwrap()
    }

    fn map_with(object: Object) -> UserMap {
        let land = Grid::filled(2, 2, Seen::Known(Terrain::Land));
        let owners = Grid::filled(2, 2, Seen::Known(Owner::Player(me())));
        let mut objects = Grid::filled(2, 2, Seen::Known(Object::Empty));
        objects.set(Coord::new(1, 1), Seen::Known(object));
        UserMap::build(&World::new(land, owners, objects), me())
    }

    #[test]
    fn first_action_seeds_the_average() {
        assert!((blend(0.0, 0, 1000.0, 0.87) - 1130.0).abs() < 1e-9);
    }

    #[test]
    fn later_actions_are_discounted() {
        // (1130 * 1 * 0.87 + 2000 * 1.13) / 2
        let expected = (1130.0 * 0.87 + 2000.0 * 1.13) / 2.0;
        assert!((blend(1130.0, 1, 2000.0, 0.87) - expected).abs() < 1e-9);
    }

    #[test]
    fn first_map_never_counts() {
        let mut stats = PlayerStats::default();
        assert!(!stats.observe(map_with(Object::Empty), 5_000, 0.87));
        assert_eq!(stats.moves, 0);
        assert_eq!(stats.last_interaction, 0);
        assert_eq!(stats.user_map, map_with(Object::Empty));
    }

    #[test]
    fn action_updates_counters() {
        let mut stats = PlayerStats::default();
        stats.observe(map_with(Object::Empty), 1_000, 0.87);
        assert!(stats.observe(map_with(Object::Tower1), 3_000, 0.87));
        assert_eq!(stats.moves, 1);
        assert_eq!(stats.last_interaction, 3_000);
        assert!((stats.average_interaction - 3_000.0 * 1.13).abs() < 1e-9);
        assert!(stats.has_activity());
    }

    #[test]
    fn noise_is_ignored() {
        let mut stats = PlayerStats::default();
        stats.observe(map_with(Object::Grave), 1_000, 0.87);
        assert!(!stats.observe(map_with(Object::Tree), 2_000, 0.87));
        assert_eq!(stats.moves, 0);
        assert_eq!(stats.user_map, map_with(Object::Tree));
    }
}
