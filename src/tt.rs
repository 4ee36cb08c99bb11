//! Transposition table for caching search results.
//!
//! Maps a Zobrist hash to the score, depth and bound type of a previous
//! search of that position. Always-replace: a store overwrites whatever
//! the slot held. Entries are advisory; a miss only costs time.

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TTEntry {
    pub score: f64,
    pub depth: u32,
    pub bound_type: BoundType,
}

#[derive(Clone, Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, TTEntry>,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn probe(&self, hash: u64) -> Option<TTEntry> {
        self.entries.get(&hash).copied()
    }

    pub fn store(&mut self, hash: u64, depth: u32, score: f64, bound_type: BoundType) {
        self.entries.insert(
            hash,
            TTEntry {
                score,
                depth,
                bound_type,
            },
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
