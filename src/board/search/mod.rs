//! Search module implementing depth-limited minimax with alpha-beta.
//!
//! Features:
//! - Same-sign minimax: White maximizes, Black minimizes
//! - Alpha-beta pruning with captures-first (MVV-LVA) ordering
//! - Quiescence search over captures at the horizon
//! - Transposition table keyed by the Zobrist hash, cleared per decision
//! - Random choice among equally scored root moves

mod move_order;
mod params;
mod quiescence;
mod report;

use std::time::Instant;

use log::{debug, trace};
use rand::prelude::*;

use crate::tt::{BoundType, TranspositionTable};

use super::eval::{terminal_score, Evaluator, MaterialEvaluator};
use super::{Game, Move, PieceKind};
pub use move_order::{mvv_lva_score, order_moves};
pub use params::{SearchConfig, DEFAULT_DEPTH};
pub use report::{SearchResult, SearchStats};

/// Picks a move for the side to move of a [`Game`].
///
/// The engine owns its configuration, evaluator and transposition table;
/// the game is borrowed mutably only for the duration of a search and is
/// returned to its exact prior state.
pub struct SearchEngine<E: Evaluator = MaterialEvaluator> {
    config: SearchConfig,
    evaluator: E,
    tt: TranspositionTable,
    rng: StdRng,
    stats: SearchStats,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl SearchEngine {
    /// An engine with the material evaluator.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self::with_evaluator(config, MaterialEvaluator::default())
    }
}

impl<E: Evaluator> SearchEngine<E> {
    #[must_use]
    pub fn with_evaluator(mut config: SearchConfig, evaluator: E) -> Self {
        config.depth = config.depth.max(1);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        SearchEngine {
            config,
            evaluator,
            tt: TranspositionTable::new(),
            rng,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.config.depth
    }

    /// Set the search depth; values below 1 are raised to 1.
    pub fn set_depth(&mut self, depth: u32) {
        self.config.depth = depth.max(1);
    }

    #[must_use]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[must_use]
    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Clear the transposition table and pick a move for the side to move.
    ///
    /// Returns `None` when there is no legal move; whether that is mate or
    /// stalemate is for the caller to ask the game.
    pub fn find_best_move(&mut self, game: &mut Game) -> Option<Move> {
        self.tt.clear();
        self.analyze(game).best_move
    }

    /// Root search at the configured depth, keeping whatever the
    /// transposition table already holds.
    ///
    /// Each root move is searched with a full window so that every score is
    /// exact and ties are real ties.
    pub fn analyze(&mut self, game: &mut Game) -> SearchResult {
        let start = Instant::now();
        self.stats = SearchStats::default();

        let depth = self.config.depth;
        let maximizing = game.white_to_move();
        let mut moves = game.all_legal_moves();
        order_moves(game, &mut moves);

        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut candidates: Vec<Move> = Vec::new();

        for mv in moves {
            let record = game.make(mv.from, mv.to, PieceKind::Queen);
            let score = self.search(game, depth - 1, f64::NEG_INFINITY, f64::INFINITY);
            game.unmake(record);
            trace!("root {mv}: {score}");

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                candidates.clear();
                candidates.push(mv);
            } else if score == best_score {
                candidates.push(mv);
            }
        }

        if candidates.is_empty() {
            best_score = terminal_score(game, depth);
        }
        let best_move = candidates.choose(&mut self.rng).copied();

        debug!(
            "depth {} {} score {} candidates {} time {}ms",
            depth,
            self.stats,
            best_score,
            candidates.len(),
            start.elapsed().as_millis()
        );

        SearchResult {
            best_move,
            score: best_score,
            candidates,
            stats: self.stats,
        }
    }

    /// Alpha-beta minimax below the root. Scores are White-positive.
    fn search(&mut self, game: &mut Game, depth: u32, mut alpha: f64, mut beta: f64) -> f64 {
        self.stats.nodes += 1;
        let hash = game.hash();
        let (original_alpha, original_beta) = (alpha, beta);

        if self.config.use_transposition_table {
            if let Some(entry) = self.tt.probe(hash) {
                if entry.depth >= depth {
                    self.stats.tt_hits += 1;
                    match entry.bound_type {
                        BoundType::Exact => {
                            self.stats.tt_cutoffs += 1;
                            return entry.score;
                        }
                        BoundType::LowerBound => alpha = alpha.max(entry.score),
                        BoundType::UpperBound => beta = beta.min(entry.score),
                    }
                    if alpha >= beta {
                        self.stats.tt_cutoffs += 1;
                        return entry.score;
                    }
                }
            }
        }

        if depth == 0 {
            return self.quiesce(game, alpha, beta);
        }

        let mut moves = game.all_legal_moves();
        if moves.is_empty() {
            return terminal_score(game, depth);
        }
        order_moves(game, &mut moves);

        let best = if game.white_to_move() {
            let mut best = f64::NEG_INFINITY;
            for mv in moves {
                let record = game.make(mv.from, mv.to, PieceKind::Queen);
                let score = self.search(game, depth - 1, alpha, beta);
                game.unmake(record);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for mv in moves {
                let record = game.make(mv.from, mv.to, PieceKind::Queen);
                let score = self.search(game, depth - 1, alpha, beta);
                game.unmake(record);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        };

        if self.config.use_transposition_table {
            let bound = if best <= original_alpha {
                BoundType::UpperBound
            } else if best >= original_beta {
                BoundType::LowerBound
            } else {
                BoundType::Exact
            };
            self.tt.store(hash, depth, best, bound);
        }

        best
    }
}
