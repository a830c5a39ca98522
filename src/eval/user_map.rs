//! Per-player user maps.
//!
//! A user map reveals what stands on the cells a player owns and shows bare
//! terrain everywhere else. It is an ownership view, unrelated to fog: the
//! agent keeps one per seat and diffs consecutive maps to notice when a
//! player has acted.

use std::fmt;

use crate::board::{Coord, Grid, Object, PlayerId, Seen, Terrain, World, FOG_SYMBOL};

/// Symbol used when rendering an owned cell with nothing on it.
pub const OWNED_EMPTY_SYMBOL: char = 'o';

/// One cell of a user map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserCell {
    /// Not owned by the subject player; only the terrain is shown.
    Terrain(Seen<Terrain>),
    /// Owned by the subject player, with whatever stands there.
    /// `Known(Object::Empty)` marks owned, empty ground.
    Owned(Seen<Object>),
}

impl UserCell {
    pub fn symbol(self) -> char {
        match self {
            UserCell::Terrain(Seen::Known(t)) => t.symbol(),
            UserCell::Owned(Seen::Known(Object::Empty)) => OWNED_EMPTY_SYMBOL,
            UserCell::Owned(Seen::Known(o)) => o.symbol(),
            UserCell::Terrain(Seen::Fog) | UserCell::Owned(Seen::Fog) => FOG_SYMBOL,
        }
    }

    /// The object on an owned, visible cell.
    pub fn owned_object(self) -> Option<Object> {
        match self {
            UserCell::Owned(Seen::Known(o)) => Some(o),
            _ => None,
        }
    }

    /// Land, graves and trees flip between each other through decay and
    /// regrowth without anyone acting.
    fn is_noise(self) -> bool {
        matches!(
            self,
            UserCell::Terrain(Seen::Known(Terrain::Land))
                | UserCell::Owned(Seen::Known(Object::Grave | Object::Tree))
        )
    }
}

/// A player's ownership view of the world.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserMap {
    cells: Grid<UserCell>,
}

impl UserMap {
    /// Reconstructs `player`'s user map from a snapshot.
    pub fn build(world: &World, player: PlayerId) -> UserMap {
        let cells = world.land.map(|terrain, c| {
            if world.is_owned_by(c, player) {
                UserCell::Owned(world.objects.get(c).copied().unwrap_or(Seen::Fog))
            } else {
                UserCell::Terrain(*terrain)
            }
        });
        UserMap { cells }
    }

    pub fn cells(&self) -> &Grid<UserCell> {
        &self.cells
    }

    pub fn get(&self, c: Coord) -> Option<UserCell> {
        self.cells.get(c).copied()
    }

    /// Visible owned cells and what stands on them, row-major.
    pub fn owned(&self) -> impl Iterator<Item = (Coord, Object)> + '_ {
        self.cells
            .iter()
            .filter_map(|(c, cell)| cell.owned_object().map(|o| (c, o)))
    }

    /// Returns true if this map shows a player action relative to `previous`.
    ///
    /// Any changed cell counts unless both sides are decay noise. Maps of
    /// different shape (the very first update) never count.
    pub fn shows_action_since(&self, previous: &UserMap) -> bool {
        if !self.cells.same_shape(&previous.cells) {
            return false;
        }
        self.cells
            .iter()
            .zip(previous.cells.iter())
            .any(|((_, now), (_, before))| now != before && !(now.is_noise() && before.is_noise()))
    }
}

impl fmt::Display for UserMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Owner;

    fn p(i: usize) -> PlayerId {
        PlayerId::from_index(i).unwrap()
    }

    fn world() -> World {
        let land = Grid::from_rows(vec![
            vec![Seen::Known(Terrain::Land); 3],
            vec![
                Seen::Known(Terrain::Land),
                Seen::Known(Terrain::Water),
                Seen::Fog,
            ],
        ])
        .unwrap();
        let mut owners = Grid::filled(2, 3, Seen::Known(Owner::Nobody));
        owners.set(Coord::new(0, 0), Seen::Known(Owner::Player(p(0))));
        owners.set(Coord::new(0, 1), Seen::Known(Owner::Player(p(0))));
        owners.set(Coord::new(0, 2), Seen::Known(Owner::Player(p(1))));
        let mut objects = Grid::filled(2, 3, Seen::Known(Object::Empty));
        objects.set(Coord::new(0, 0), Seen::Known(Object::TownHall));
        objects.set(Coord::new(0, 2), Seen::Known(Object::Soldier3));
        World::new(land, owners, objects)
    }

    #[test]
    fn owned_cells_show_objects_others_show_terrain() {
        let map = UserMap::build(&world(), p(0));
        assert_eq!(map.to_string(), "&o#\n#.*");
        let other = UserMap::build(&world(), p(1));
        assert_eq!(other.to_string(), "##3\n#.*");
    }

    #[test]
    fn owned_lists_visible_owned_cells() {
        let map = UserMap::build(&world(), p(0));
        let owned: Vec<_> = map.owned().collect();
        assert_eq!(
            owned,
            vec![
                (Coord::new(0, 0), Object::TownHall),
                (Coord::new(0, 1), Object::Empty)
            ]
        );
    }

    #[test]
    fn identical_maps_show_no_action() {
        let a = UserMap::build(&world(), p(0));
        assert!(!a.shows_action_since(&a.clone()));
    }

    #[test]
    fn first_map_never_counts() {
        let a = UserMap::build(&world(), p(0));
        assert!(!a.shows_action_since(&UserMap::default()));
    }

    #[test]
    fn building_counts_as_action() {
        let before = UserMap::build(&world(), p(0));
        let mut w = world();
        w.objects.set(Coord::new(0, 1), Seen::Known(Object::Tower1));
        let after = UserMap::build(&w, p(0));
        assert!(after.shows_action_since(&before));
    }

    #[test]
    fn decay_noise_is_ignored() {
        let mut w = world();
        w.objects.set(Coord::new(0, 1), Seen::Known(Object::Grave));
        let grave = UserMap::build(&w, p(0));
        w.objects.set(Coord::new(0, 1), Seen::Known(Object::Tree));
        let tree = UserMap::build(&w, p(0));
        assert!(!tree.shows_action_since(&grave));

        // Losing an overgrown cell back to bare land is noise too.
        w.owners.set(Coord::new(0, 1), Seen::Known(Owner::Nobody));
        let land = UserMap::build(&w, p(0));
        assert!(!land.shows_action_since(&tree));
    }

    #[test]
    fn capturing_land_counts() {
        let before = UserMap::build(&world(), p(0));
        let mut w = world();
        w.owners.set(Coord::new(1, 0), Seen::Known(Owner::Player(p(0))));
        let after = UserMap::build(&w, p(0));
        assert!(after.shows_action_since(&before));
    }
}
