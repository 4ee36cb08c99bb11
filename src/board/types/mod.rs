//! Core chess types.
//!
//! - `PieceKind`, `Color` and `Piece` - what sits on a square
//! - `Position` - a bounds-checked (row, column) coordinate
//! - `Move` - a (from, to) pair

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, Piece, PieceKind};
pub use square::Position;
