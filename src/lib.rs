//! Two-player chess rules with a minimax opponent.
//!
//! [`board`] holds the rules (legal moves, check, mate, stalemate,
//! castling, en passant, promotion) and the search; [`engine`] runs that
//! search on a worker thread for front ends that must stay responsive.

pub mod board;
pub mod engine;
pub mod tt;
mod zobrist;

pub use board::{Color, Game, GameStatus, Move, Piece, PieceKind, Position};
pub use board::{SearchConfig, SearchEngine};
pub use tt::TranspositionTable;
