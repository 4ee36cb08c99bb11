//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation counts against known positions
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `special_moves.rs` - Castling, en passant and promotion through the game API
//! - `terminal.rs` - Check, checkmate, stalemate and the game-over flag
//! - `search.rs` - Engine behaviour and agreement with plain minimax
//! - `proptest.rs` - Property-based tests

mod special_moves;

use crate::board::{Game, Position};

pub(super) fn sq(name: &str) -> Position {
    name.parse().expect("valid square")
}

/// Play a sequence of coordinate moves, panicking on the first rejection.
pub(super) fn play(game: &mut Game, moves: &[&str]) {
    for text in moves {
        game.try_move_text(text)
            .unwrap_or_else(|err| panic!("{text} rejected: {err}"));
    }
}
