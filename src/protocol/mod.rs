//! Driver protocol.
//!
//! Text encoding of the authority's map layers, and the JSON-lines events
//! and actions the driver binary exchanges with a transport adapter.

pub mod message;
pub mod text;

pub use message::{
    encode_action, encode_surrender, parse_event, roster, Event, UpdateMessage, DEFAULT_RATING,
    SERVER_BOT_NAME,
};
pub use text::{encode_grid, parse_grid, parse_player, LayerSymbol, ProtocolError};
