//! JSON-lines messages exchanged with the transport adapter.
//!
//! Incoming events mirror what the authority pushes to a connected bot
//! (`config`, `update`) plus two control events (`stop`, `quit`). Outgoing
//! lines carry the `move` and `surrender` requests.

use serde::{Deserialize, Serialize};

use super::text::{parse_grid, parse_player, ProtocolError};
use crate::board::{Action, Coord, GameTime, Player, PlayerId, Snapshot, Soldier, World, PLAYER_COUNT};
use crate::economy::{Balance, GameConfig};

/// Rating given to server-filled seats when the config names none.
pub const DEFAULT_RATING: f64 = 1500.0;

/// Display name of server-filled seats.
pub const SERVER_BOT_NAME: &str = "server bot";

/// One line from the transport.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    /// A new game: settings and the seat roster. `None` seats are server bots.
    Config {
        config: GameConfig,
        #[serde(default)]
        players: Vec<Option<(String, f64)>>,
    },

    Update(UpdateMessage),

    /// The game is over or the connection dropped.
    Stop,

    /// Terminate the process.
    Quit,
}

/// Raw `update` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMessage {
    pub now: GameTime,
    pub land: String,
    pub team: String,
    pub objects: String,
    pub me: String,
    pub balance: Option<f64>,
    pub income: Option<f64>,
    /// `[row, col, cooldown_start]` triples.
    #[serde(default)]
    pub soldiers: Vec<(i32, i32, GameTime)>,
    /// `[balance, income]` per seat, `null` once eliminated.
    #[serde(default)]
    pub balances: Vec<Option<(f64, f64)>>,
    #[serde(default)]
    pub log: bool,
}

impl UpdateMessage {
    /// Decodes the payload into a snapshot. Balances are anchored at `now`.
    pub fn into_snapshot(self, config: &GameConfig) -> Result<Snapshot, ProtocolError> {
        let world = World {
            land: parse_grid(&self.land)?,
            owners: parse_grid(&self.team)?,
            objects: parse_grid(&self.objects)?,
        };
        if !world.land.same_shape(&world.owners) || !world.land.same_shape(&world.objects) {
            return Err(ProtocolError::ShapeMismatch);
        }
        let me = parse_player(&self.me)?;
        let tick = config.tick_duration;
        let balance = Balance::new(self.balance, self.income, self.now, tick);
        let balances = self
            .balances
            .iter()
            .map(|b| match *b {
                Some((amount, income)) => Balance::new(Some(amount), Some(income), self.now, tick),
                None => Balance::eliminated(self.now, tick),
            })
            .collect();
        let soldiers = self
            .soldiers
            .iter()
            .map(|&(row, col, cooldown_start)| Soldier {
                coord: Coord::new(row, col),
                cooldown_start,
            })
            .collect();
        Ok(Snapshot {
            now: self.now,
            world,
            me,
            balance,
            balances,
            soldiers,
            log: self.log,
        })
    }
}

/// Builds the seat roster from the `config` event's player list.
pub fn roster(
    players: &[Option<(String, f64)>],
    config: &GameConfig,
) -> Result<Vec<Player>, ProtocolError> {
    if players.len() > PLAYER_COUNT {
        return Err(ProtocolError::TooManyPlayers(players.len()));
    }
    let bot_rating = config.average_rating.unwrap_or(DEFAULT_RATING);
    Ok(players
        .iter()
        .enumerate()
        .filter_map(|(i, seat)| {
            let id = PlayerId::from_index(i)?;
            Some(match seat {
                Some((name, rating)) => Player {
                    id,
                    name: name.clone(),
                    rating: *rating,
                    bot: false,
                },
                None => Player {
                    id,
                    name: SERVER_BOT_NAME.to_string(),
                    rating: bot_rating,
                    bot: true,
                },
            })
        })
        .collect())
}

/// Parses one input line.
pub fn parse_event(line: &str) -> Result<Event, ProtocolError> {
    Ok(serde_json::from_str(line.trim())?)
}

#[derive(Debug, Serialize)]
enum Outgoing {
    #[serde(rename = "move")]
    Move(Option<[i32; 2]>, [i32; 2], String),
    #[serde(rename = "surrender")]
    Surrender(bool),
}

fn pair(c: Coord) -> [i32; 2] {
    [c.row, c.col]
}

/// Encodes an action as a `move` line: `{"move":[from|null,to,symbol]}`.
pub fn encode_action(action: &Action) -> Result<String, ProtocolError> {
    let msg = Outgoing::Move(
        action.from().map(pair),
        pair(action.to()),
        action.what().symbol().to_string(),
    );
    Ok(serde_json::to_string(&msg)?)
}

/// The `surrender` line.
pub fn encode_surrender() -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(&Outgoing::Surrender(true))?)
}
