//! Zobrist hashing for chess positions.
//!
//! One random 64-bit key per (piece type, color, square) plus a key for
//! black to move. Keys are drawn once per process and never change, so the
//! table is safe to read from any thread.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, Color, Piece, Position};

pub(crate) struct ZobristKeys {
    // piece_keys[piece_type][color][square_index]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 6],
    pub(crate) black_to_move_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::from_entropy();
        let mut piece_keys = [[[0; 64]; 2]; 6];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key: rng.gen(),
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[inline]
pub(crate) fn piece_key(piece: Piece, pos: Position) -> u64 {
    ZOBRIST.piece_keys[piece.kind.index()][piece.color.index()][pos.index()]
}

#[inline]
pub(crate) fn side_key() -> u64 {
    ZOBRIST.black_to_move_key
}

/// Hash a position from scratch.
pub(crate) fn hash_position(board: &Board, side_to_move: Color) -> u64 {
    let mut hash = board
        .occupied()
        .fold(0, |acc, (pos, piece)| acc ^ piece_key(piece, pos));
    if side_to_move == Color::Black {
        hash ^= side_key();
    }
    hash
}
