//! Fog of war.
//!
//! A player sees every cell within a fixed number of land steps of their
//! territory. The distance field is a multi-source BFS seeded at all owned
//! cells; redaction then replaces everything beyond the radius with fog.

use crate::board::{neighbors_in_bounds, Coord, Grid, Owner, PlayerId, Seen, Terrain, World};

/// Land-step distance from `player`'s territory to every cell.
///
/// Owned cells are at distance 0. The search only enters visible land
/// cells, so water and fog block it. Cells never reached are `None`.
/// With `max_depth`, cells farther than that stay `None`.
pub fn distance_field(
    land: &Grid<Seen<Terrain>>,
    owners: &Grid<Seen<Owner>>,
    player: PlayerId,
    max_depth: Option<u32>,
) -> Grid<Option<u32>> {
    let (height, width) = (land.height(), land.width());
    let mut field: Grid<Option<u32>> = Grid::filled(height, width, None);

    let mut frontier = owners.filter_coords(|o, _| o.is(Owner::Player(player)));
    for &c in &frontier {
        field.set(c, Some(0));
    }

    let mut depth = 0u32;
    while !frontier.is_empty() {
        if max_depth.is_some_and(|max| depth >= max) {
            break;
        }
        depth += 1;
        let mut next: Vec<Coord> = Vec::new();
        for &c in &frontier {
            for n in neighbors_in_bounds(c, height, width) {
                if field.get(n).is_some_and(|d| d.is_none())
                    && land.get(n).is_some_and(|t| t.is(Terrain::Land))
                {
                    field.set(n, Some(depth));
                    next.push(n);
                }
            }
        }
        frontier = next;
    }

    field
}

/// Redacts every cell of `grid` farther than `radius` in `field`.
pub fn apply_fog<T: Clone>(
    grid: &Grid<Seen<T>>,
    field: &Grid<Option<u32>>,
    radius: u32,
) -> Grid<Seen<T>> {
    grid.map(|cell, c| match field.get(c) {
        Some(Some(d)) if *d <= radius => cell.clone(),
        _ => Seen::Fog,
    })
}

impl World {
    /// The part of this world `player` can see from their territory.
    pub fn fogged_for(&self, player: PlayerId, radius: u32) -> World {
        let field = distance_field(&self.land, &self.owners, player, Some(radius));
        World::new(
            apply_fog(&self.land, &field, radius),
            apply_fog(&self.owners, &field, radius),
            apply_fog(&self.objects, &field, radius),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Object;

    fn p(i: usize) -> PlayerId {
        PlayerId::from_index(i).unwrap()
    }

    /// Builds a world from terrain rows ('#' land, '.' water) with `owned`
    /// cells belonging to seat 0.
    fn world(rows: &[&str], owned: &[Coord]) -> World {
        let land = Grid::from_rows(
            rows.iter()
                .map(|r| {
                    r.chars()
                        .map(|c| Seen::Known(Terrain::from_symbol(c).unwrap()))
                        .collect()
                })
                .collect(),
        )
        .unwrap();
        let mut owners = Grid::filled(land.height(), land.width(), Seen::Known(Owner::Nobody));
        for &c in owned {
            owners.set(c, Seen::Known(Owner::Player(p(0))));
        }
        let objects = Grid::filled(land.height(), land.width(), Seen::Known(Object::Empty));
        World::new(land, owners, objects)
    }

    #[test]
    fn owned_cells_are_at_zero() {
        let w = world(&["####", "####"], &[Coord::new(0, 0), Coord::new(1, 3)]);
        let f = distance_field(&w.land, &w.owners, p(0), None);
        assert_eq!(f.get(Coord::new(0, 0)), Some(&Some(0)));
        assert_eq!(f.get(Coord::new(1, 3)), Some(&Some(0)));
        assert_eq!(f.get(Coord::new(0, 1)), Some(&Some(1)));
    }

    #[test]
    fn open_field_matches_hex_distance() {
        let w = world(&["#####", "#####", "#####", "#####"], &[Coord::new(1, 2)]);
        let f = distance_field(&w.land, &w.owners, p(0), None);
        for (c, d) in f.iter() {
            assert_eq!(*d, Some(crate::board::distance(Coord::new(1, 2), c)));
        }
    }

    #[test]
    fn water_blocks_expansion() {
        // Column 2 is water from top to bottom; the right side is unreachable.
        let w = world(&["##.##", "##.##", "##.##"], &[Coord::new(0, 0)]);
        let f = distance_field(&w.land, &w.owners, p(0), None);
        assert_eq!(f.get(Coord::new(0, 2)), Some(&None));
        assert_eq!(f.get(Coord::new(1, 4)), Some(&None));
        for radius in [0, 1, 5, 100] {
            let fogged = apply_fog(&w.land, &f, radius);
            assert!(fogged.get(Coord::new(1, 4)).unwrap().is_fog());
        }
    }

    #[test]
    fn max_depth_limits_search() {
        let w = world(&["######"], &[Coord::new(0, 0)]);
        let f = distance_field(&w.land, &w.owners, p(0), Some(2));
        assert_eq!(f.get(Coord::new(0, 2)), Some(&Some(2)));
        assert_eq!(f.get(Coord::new(0, 3)), Some(&None));
    }

    #[test]
    fn player_without_territory_sees_nothing() {
        let w = world(&["###"], &[]);
        let fogged = w.fogged_for(p(0), 10);
        assert!(fogged.land.iter().all(|(_, t)| t.is_fog()));
    }

    #[test]
    fn fogged_world_redacts_all_layers() {
        let w = world(&["#####"], &[Coord::new(0, 0)]);
        let fogged = w.fogged_for(p(0), 2);
        assert!(fogged.land.same_shape(&w.land));
        assert!(fogged.land.get(Coord::new(0, 2)).unwrap().is(Terrain::Land));
        assert!(fogged.owners.get(Coord::new(0, 3)).unwrap().is_fog());
        assert!(fogged.objects.get(Coord::new(0, 4)).unwrap().is_fog());
        assert!(fogged.is_owned_by(Coord::new(0, 0), p(0)));
    }
}
