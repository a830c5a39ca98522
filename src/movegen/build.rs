//! Tower purchases.
//!
//! When a player's land is thinly covered by towers, the strongest tower the
//! treasury can sustain goes on the first free owned cell.

use crate::board::{Action, Coord, GameTime, Object};
use crate::economy::{strongest_affordable, Balance, GameConfig};
use crate::eval::{UserMap, UserWeight};

/// Free building spaces needed before a tower is considered.
const MIN_FREE_SPACES: usize = 4;

/// Owned, empty cells in row-major order.
pub fn free_building_spaces(map: &UserMap) -> Vec<Coord> {
    map.owned()
        .filter(|(_, o)| *o == Object::Empty)
        .map(|(c, _)| c)
        .collect()
}

/// Returns true if the position calls for more tower coverage.
pub fn needs_defense(weight: &UserWeight, free_spaces: usize) -> bool {
    weight.defense_ratio().is_some_and(|r| r < 1.0) && free_spaces >= MIN_FREE_SPACES
}

/// Chooses a tower purchase, if the position needs one and any is
/// affordable.
///
/// The free-space threshold counts every owned empty cell; cells in
/// `reserved` are only skipped when picking where the tower goes.
pub fn tower_build(
    weight: &UserWeight,
    map: &UserMap,
    balance: &Balance,
    now: GameTime,
    config: &GameConfig,
    reserved: &[Coord],
) -> Option<Action> {
    let spaces = free_building_spaces(map);
    if !needs_defense(weight, spaces.len()) {
        return None;
    }
    let to = spaces.into_iter().find(|c| !reserved.contains(c))?;
    let tier = strongest_affordable(balance, now, &config.towers())?;
    Some(Action::Place {
        to,
        what: tier.object,
    })
}
