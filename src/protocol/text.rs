//! Text encoding of map layers.
//!
//! The authority sends each layer as one string: rows separated by `\n`,
//! one symbol per cell, `*` for fogged cells. Surrounding whitespace is
//! ignored.

use crate::board::{Grid, Object, Owner, PlayerId, Seen, Terrain, FOG_SYMBOL};

/// Errors that can occur while decoding authority messages.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("row {row} of the {layer} layer has {found} cells, expected {expected}")]
    RaggedRow {
        layer: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid {layer} symbol: '{symbol}'")]
    UnknownSymbol { layer: &'static str, symbol: char },

    #[error("layers differ in shape")]
    ShapeMismatch,

    #[error("invalid player symbol: '{0}'")]
    InvalidPlayer(String),

    #[error("roster has {0} seats, at most 15 are supported")]
    TooManyPlayers(usize),

    #[error("update received before config")]
    NoConfig,

    #[error("malformed message: {0}")]
    Json(#[from] serde_json::Error),
}

/// A cell type with a single-character encoding.
pub trait LayerSymbol: Sized + Copy {
    /// Layer name used in error messages.
    const LAYER: &'static str;

    fn decode(c: char) -> Option<Self>;
    fn encode(self) -> char;
}

impl LayerSymbol for Terrain {
    const LAYER: &'static str = "land";

    fn decode(c: char) -> Option<Self> {
        Terrain::from_symbol(c)
    }

    fn encode(self) -> char {
        self.symbol()
    }
}

impl LayerSymbol for Owner {
    const LAYER: &'static str = "team";

    fn decode(c: char) -> Option<Self> {
        Owner::from_symbol(c)
    }

    fn encode(self) -> char {
        self.symbol()
    }
}

impl LayerSymbol for Object {
    const LAYER: &'static str = "objects";

    fn decode(c: char) -> Option<Self> {
        Object::from_symbol(c)
    }

    fn encode(self) -> char {
        self.symbol()
    }
}

fn decode_cell<T: LayerSymbol>(c: char) -> Result<Seen<T>, ProtocolError> {
    if c == FOG_SYMBOL {
        return Ok(Seen::Fog);
    }
    T::decode(c).map(Seen::Known).ok_or(ProtocolError::UnknownSymbol {
        layer: T::LAYER,
        symbol: c,
    })
}

/// Parses one layer. An empty string yields an empty grid.
pub fn parse_grid<T: LayerSymbol>(text: &str) -> Result<Grid<Seen<T>>, ProtocolError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Grid::default());
    }
    let mut rows: Vec<Vec<Seen<T>>> = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        let row = line
            .trim_end_matches('\r')
            .chars()
            .map(decode_cell::<T>)
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(first) = rows.first().map(Vec::len) {
            if row.len() != first {
                return Err(ProtocolError::RaggedRow {
                    layer: T::LAYER,
                    row: i,
                    expected: first,
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }
    Grid::from_rows(rows).ok_or(ProtocolError::ShapeMismatch)
}

/// Encodes one layer in the authority's format.
pub fn encode_grid<T: LayerSymbol>(grid: &Grid<Seen<T>>) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|cell| match *cell {
                    Seen::Fog => FOG_SYMBOL,
                    Seen::Known(v) => v.encode(),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses a seat symbol such as `"1"` or `"A"`.
pub fn parse_player(text: &str) -> Result<PlayerId, ProtocolError> {
    let mut chars = text.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            PlayerId::from_symbol(c).ok_or_else(|| ProtocolError::InvalidPlayer(text.to_string()))
        }
        _ => Err(ProtocolError::InvalidPlayer(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;

    #[test]
    fn parses_land_with_fog() {
        let g: Grid<Seen<Terrain>> = parse_grid("\n##.\n#*#\n").unwrap();
        assert_eq!(g.height(), 2);
        assert_eq!(g.width(), 3);
        assert_eq!(g.get(Coord::new(0, 2)), Some(&Seen::Known(Terrain::Water)));
        assert_eq!(g.get(Coord::new(1, 1)), Some(&Seen::Fog));
    }

    #[test]
    fn parses_multibyte_objects() {
        let g: Grid<Seen<Object>> = parse_grid("&‖↑\n✞|4").unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.get(Coord::new(0, 1)), Some(&Seen::Known(Object::Tower2)));
        assert_eq!(g.get(Coord::new(1, 0)), Some(&Seen::Known(Object::Grave)));
        assert_eq!(encode_grid(&g), "&‖↑\n✞|4");
    }

    #[test]
    fn parses_owners() {
        let g: Grid<Seen<Owner>> = parse_grid("01\nF0").unwrap();
        let f = PlayerId::from_symbol('F').unwrap();
        assert_eq!(g.get(Coord::new(1, 0)), Some(&Seen::Known(Owner::Player(f))));
        assert_eq!(g.get(Coord::new(0, 0)), Some(&Seen::Known(Owner::Nobody)));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = parse_grid::<Terrain>("###\n##").unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_symbols() {
        let err = parse_grid::<Owner>("0X").unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::UnknownSymbol {
                layer: "team",
                symbol: 'X'
            }
        ));
        assert!(err.to_string().contains("team"));
    }

    #[test]
    fn empty_layer_is_empty_grid() {
        let g = parse_grid::<Terrain>("  ").unwrap();
        assert!(g.is_empty());
        assert_eq!(encode_grid(&g), "");
    }

    #[test]
    fn player_symbols() {
        assert_eq!(parse_player("3").unwrap().index(), 2);
        assert_eq!(parse_player("A").unwrap().index(), 9);
        assert!(parse_player("0").is_err());
        assert!(parse_player("12").is_err());
    }
}
