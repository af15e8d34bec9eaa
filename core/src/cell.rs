use core::fmt;

use serde::{Deserialize, Serialize};

/// Content of a single position in a generated field.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mine here and none around it.
    #[default]
    Empty,
    /// No mine here, `1..=8` mines around it. Labeled fields never hold any other value.
    Count(u8),
    Mine,
}

impl Cell {
    /// Label for a safe cell with `adjacent` mines around it, a cell has at most 8 neighbors.
    pub const fn from_count(adjacent: u8) -> Self {
        debug_assert!(adjacent <= 8, "a cell has at most 8 neighbors");
        match adjacent {
            0 => Self::Empty,
            n => Self::Count(n),
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Number of adjacent mines, `None` for a mine.
    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Empty => Some(0),
            Self::Count(n) => Some(n),
            Self::Mine => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Mine => 'M',
            Self::Count(n) => match char::from_digit(n as u32, 10) {
                Some(digit) => digit,
                None => '?',
            },
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        f.write_char(self.symbol())
    }
}
