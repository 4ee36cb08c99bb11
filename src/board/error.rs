//! Error types for board operations.

use std::fmt;

use super::{Color, Position};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank character outside 1-8
    RankOutOfBounds { rank: char },
    /// File character outside a-h
    FileOutOfBounds { file: char },
    /// Not a two-character square name
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank '{rank}' out of bounds (must be 1-8)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File '{file}' out of bounds (must be a-h)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Placement does not describe exactly 8 ranks
    InvalidRankCount { found: usize },
    /// A rank describes more or fewer than 8 files
    InvalidRankLength { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidRankLength { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Why a requested move was not played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already ended
    GameOver,
    /// No piece on the origin square
    EmptySquare { square: Position },
    /// The piece on the origin square belongs to the side not on move
    WrongSide { square: Position, to_move: Color },
    /// The destination is not among the legal moves of the piece
    IllegalMove { from: Position, to: Position },
    /// Move text could not be parsed
    Notation(SquareError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "The game is over"),
            MoveError::EmptySquare { square } => write!(f, "No piece on {square}"),
            MoveError::WrongSide { square, to_move } => {
                write!(f, "Piece on {square} does not belong to {to_move}, who is to move")
            }
            MoveError::IllegalMove { from, to } => write!(f, "Illegal move {from}-{to}"),
            MoveError::Notation(err) => write!(f, "Unreadable move: {err}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Notation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveError {
    fn from(err: SquareError) -> Self {
        MoveError::Notation(err)
    }
}
