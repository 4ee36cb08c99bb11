//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board as (row, column).
///
/// Row 0 is rank 8 and row 7 is rank 1; column 0 is file a. Only
/// in-bounds positions can be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Create a position with bounds checking
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if Self::is_valid(row as isize, col as isize) {
            Some(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Caller guarantees `row < 8 && col < 8`.
    #[inline]
    pub(crate) const fn new_unchecked(row: usize, col: usize) -> Self {
        debug_assert!(row < 8 && col < 8);
        Position {
            row: row as u8,
            col: col as u8,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(row: isize, col: isize) -> bool {
        row >= 0 && row < 8 && col >= 0 && col < 8
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// The square `(dr, dc)` away, if it is still on the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, dr: isize, dc: isize) -> Option<Position> {
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if Self::is_valid(row, col) {
            Some(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Square index 0-63 (a8=0, h8=7, ..., h1=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..64).map(|idx| Position::new_unchecked(idx / 8, idx % 8))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, 8 - self.row)
    }
}

impl FromStr for Position {
    type Err = SquareError;

    /// Parse algebraic notation such as `e4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) {
            return Err(SquareError::FileOutOfBounds {
                file: file as char,
            });
        }
        if !(b'1'..=b'8').contains(&rank) {
            return Err(SquareError::RankOutOfBounds {
                rank: rank as char,
            });
        }
        Ok(Position::new_unchecked(
            (b'8' - rank) as usize,
            (file - b'a') as usize,
        ))
    }
}
