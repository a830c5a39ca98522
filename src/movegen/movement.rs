//! Soldier movement.
//!
//! Enumerates where a soldier may go (free owned cells and the land frontier
//! around the territory) and picks a random reachable relocation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{
    neighbors_in_bounds, Action, Coord, GameTime, Object, PlayerId, Soldier, World,
};
use crate::eval::UserMap;
use crate::search::shortest_path;

/// Owned cells a soldier can step onto without displacing anything of value.
pub fn free_soldier_spaces(map: &UserMap) -> Vec<Coord> {
    map.owned()
        .filter(|(_, o)| matches!(o, Object::Empty | Object::Grave | Object::Tree))
        .map(|(c, _)| c)
        .collect()
}

/// Visible land cells outside `player`'s territory that border it.
pub fn frontier(world: &World, player: PlayerId) -> Vec<Coord> {
    let (height, width) = (world.height(), world.width());
    world.land.filter_coords(|_, c| {
        world.is_land(c)
            && !world.is_owned_by(c, player)
            && neighbors_in_bounds(c, height, width).any(|n| world.is_owned_by(n, player))
    })
}

/// Every cell a soldier of `player` may be sent to, row-major within each
/// group: free owned cells first, then the frontier.
pub fn soldier_targets(world: &World, map: &UserMap, player: PlayerId) -> Vec<Coord> {
    let mut targets = free_soldier_spaces(map);
    targets.extend(frontier(world, player));
    targets
}

/// Returns true once a soldier has rested for `cooldown` milliseconds.
pub fn is_ready(soldier: &Soldier, now: GameTime, cooldown: i64) -> bool {
    now - soldier.cooldown_start >= cooldown
}

/// Picks one of `player`'s rested soldiers uniformly and sends it to a
/// uniformly chosen reachable target.
///
/// Returns `None` when no soldier is ready or the chosen soldier has nowhere
/// to go.
pub fn random_soldier_move(
    world: &World,
    map: &UserMap,
    soldiers: &[Soldier],
    player: PlayerId,
    now: GameTime,
    cooldown: i64,
    rng: &mut impl Rng,
) -> Option<Action> {
    let ready: Vec<(&Soldier, Object)> = world
        .soldiers_of(soldiers, player)
        .filter(|s| is_ready(s, now, cooldown))
        .filter_map(|s| {
            world
                .object_at(s.coord)
                .filter(|o| o.is_soldier())
                .map(|o| (s, o))
        })
        .collect();
    let &(soldier, kind) = ready.choose(rng)?;

    let mut targets = soldier_targets(world, map, player);
    targets.retain(|&c| c != soldier.coord);
    targets.shuffle(rng);

    let to = targets
        .into_iter()
        .find(|&to| shortest_path(&world.land, soldier.coord, to).is_some())?;

    Some(Action::Move {
        from: soldier.coord,
        to,
        what: kind,
    })
}
