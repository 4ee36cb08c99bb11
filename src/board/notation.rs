//! Move text: parsing coordinate moves and formatting history entries.
//!
//! Accepted input is `e2e4`, `e2-e4`, and for promotions an optional
//! `=` followed by the piece letter (`e7e8q`, `e7-e8=N`).

use std::str::FromStr;

use super::error::SquareError;
use super::{Move, PieceKind, Position};

/// Parse coordinate move text into a move and an optional promotion letter.
pub fn parse_move(text: &str) -> Result<(Move, Option<char>), SquareError> {
    let invalid = || SquareError::InvalidNotation {
        notation: text.to_string(),
    };
    let trimmed = text.trim();
    if !trimmed.is_ascii() || trimmed.len() < 4 {
        return Err(invalid());
    }

    let from: Position = trimmed[..2].parse()?;
    let rest = trimmed[2..].strip_prefix('-').unwrap_or(&trimmed[2..]);
    if rest.len() < 2 {
        return Err(invalid());
    }
    let to: Position = rest[..2].parse()?;

    let suffix = &rest[2..];
    let suffix = suffix.strip_prefix('=').unwrap_or(suffix);
    let mut letters = suffix.chars();
    let promotion = match (letters.next(), letters.next()) {
        (None, _) => None,
        (Some(c), None) if PieceKind::from_char(c).is_some() => Some(c),
        _ => return Err(invalid()),
    };

    Ok((Move::new(from, to), promotion))
}

impl FromStr for Move {
    type Err = SquareError;

    /// Parse `e2e4` or `e2-e4`; a promotion suffix is accepted and dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s).map(|(mv, _)| mv)
    }
}

/// History text for a played move, before any check or mate marker.
pub(crate) fn history_entry(from: Position, to: Position, promotion: Option<PieceKind>) -> String {
    match promotion {
        Some(kind) => format!("{from}-{to}={}", kind.letter()),
        None => format!("{from}-{to}"),
    }
}
