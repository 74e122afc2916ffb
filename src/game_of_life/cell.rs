//! The two-valued cell state

/// A single cell of the automaton, either dead or alive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub const ALIVE_CHAR: char = '#';
    pub const DEAD_CHAR: char = ' ';

    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Character used by the text format and the bordered rendering
    pub const fn as_char(self) -> char {
        match self {
            Cell::Alive => Self::ALIVE_CHAR,
            Cell::Dead => Self::DEAD_CHAR,
        }
    }

    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            Self::ALIVE_CHAR => Some(Cell::Alive),
            Self::DEAD_CHAR => Some(Cell::Dead),
            _ => None,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}
