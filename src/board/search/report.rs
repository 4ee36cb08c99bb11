use std::fmt;

use crate::board::Move;

/// Statistics tracked during search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub quiescence_nodes: u64,
    pub tt_hits: u64,
    pub tt_cutoffs: u64,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes {} qnodes {} tt_hits {} tt_cutoffs {}",
            self.nodes, self.quiescence_nodes, self.tt_hits, self.tt_cutoffs
        )
    }
}

/// Outcome of a root search.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// The chosen move, `None` when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Score of the best move (White-positive); the terminal score when there is none
    pub score: f64,
    /// Every root move that reached `score`, in search order
    pub candidates: Vec<Move>,
    pub stats: SearchStats,
}

impl SearchResult {
    /// More than one root move shared the best score.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.candidates.len() > 1
    }
}
