//! Cell alphabets for the three map layers.
//!
//! The authority encodes every layer with single-character symbols. Each
//! layer gets its own closed enum here; `Seen<T>` adds the fog marker only
//! where the authority may redact a cell.

/// Symbol the authority uses for a redacted cell on any layer.
pub const FOG_SYMBOL: char = '*';

/// A cell that may be hidden by fog of war.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seen<T> {
    Fog,
    Known(T),
}

impl<T> Seen<T> {
    /// Returns the known value, or `None` under fog.
    pub fn known(self) -> Option<T> {
        match self {
            Seen::Fog => None,
            Seen::Known(v) => Some(v),
        }
    }

    pub fn is_fog(&self) -> bool {
        matches!(self, Seen::Fog)
    }
}

impl<T: PartialEq> Seen<T> {
    /// Returns true if the cell is visible and holds `value`.
    pub fn is(&self, value: T) -> bool {
        matches!(self, Seen::Known(v) if *v == value)
    }
}

/// Terrain layer: passable ground or the impassable void around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    Land,
    Water,
}

impl Terrain {
    pub const fn symbol(self) -> char {
        match self {
            Terrain::Land => '#',
            Terrain::Water => '.',
        }
    }

    pub fn from_symbol(c: char) -> Option<Terrain> {
        match c {
            '#' => Some(Terrain::Land),
            '.' => Some(Terrain::Water),
            _ => None,
        }
    }

    /// Soldiers and fog expansion only travel across land.
    pub const fn is_passable(self) -> bool {
        matches!(self, Terrain::Land)
    }
}

/// Number of distinct player identifiers the authority can assign.
pub const PLAYER_COUNT: usize = 15;

/// Player identifier symbols in seat order.
pub const PLAYER_SYMBOLS: [char; PLAYER_COUNT] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// A seat at the table, stored as its index into `PLAYER_SYMBOLS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Returns the id for a seat index, or `None` past the last seat.
    pub fn from_index(index: usize) -> Option<PlayerId> {
        if index < PLAYER_COUNT {
            Some(PlayerId(index as u8))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn symbol(self) -> char {
        PLAYER_SYMBOLS[self.0 as usize]
    }

    pub fn from_symbol(c: char) -> Option<PlayerId> {
        PLAYER_SYMBOLS
            .iter()
            .position(|&s| s == c)
            .map(|i| PlayerId(i as u8))
    }
}

/// Ownership layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    Nobody,
    Player(PlayerId),
}

impl Owner {
    pub const fn symbol(self) -> char {
        match self {
            Owner::Nobody => '0',
            Owner::Player(p) => p.symbol(),
        }
    }

    pub fn from_symbol(c: char) -> Option<Owner> {
        if c == '0' {
            return Some(Owner::Nobody);
        }
        PlayerId::from_symbol(c).map(Owner::Player)
    }
}

/// Object layer: buildings, units and natural debris.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Object {
    Empty,
    TownHall,
    Farm,
    Tower1,
    Tower2,
    Soldier1,
    Soldier2,
    Soldier3,
    Soldier4,
    Tree,
    Grave,
}

impl Object {
    pub const fn symbol(self) -> char {
        match self {
            Object::Empty => '.',
            Object::TownHall => '&',
            Object::Farm => '$',
            Object::Tower1 => '|',
            Object::Tower2 => '\u{2016}',
            Object::Soldier1 => '1',
            Object::Soldier2 => '2',
            Object::Soldier3 => '3',
            Object::Soldier4 => '4',
            Object::Tree => '\u{2191}',
            Object::Grave => '\u{271E}',
        }
    }

    pub fn from_symbol(c: char) -> Option<Object> {
        match c {
            '.' => Some(Object::Empty),
            '&' => Some(Object::TownHall),
            '$' => Some(Object::Farm),
            '|' => Some(Object::Tower1),
            '\u{2016}' => Some(Object::Tower2),
            '1' => Some(Object::Soldier1),
            '2' => Some(Object::Soldier2),
            '3' => Some(Object::Soldier3),
            '4' => Some(Object::Soldier4),
            '\u{2191}' => Some(Object::Tree),
            '\u{271E}' => Some(Object::Grave),
            _ => None,
        }
    }

    /// Strength level used by combat and by the scoring model.
    pub const fn level(self) -> u32 {
        match self {
            Object::TownHall | Object::Soldier1 => 1,
            Object::Soldier2 | Object::Tower1 => 2,
            Object::Soldier3 | Object::Tower2 => 3,
            Object::Soldier4 => 4,
            _ => 0,
        }
    }

    pub const fn is_soldier(self) -> bool {
        matches!(
            self,
            Object::Soldier1 | Object::Soldier2 | Object::Soldier3 | Object::Soldier4
        )
    }

    pub const fn is_tower(self) -> bool {
        matches!(self, Object::Tower1 | Object::Tower2)
    }
}
