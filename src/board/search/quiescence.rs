use super::move_order::ordered_captures;
use super::SearchEngine;
use crate::board::eval::{terminal_score, Evaluator};
use crate::board::{Game, PieceKind};

impl<E: Evaluator> SearchEngine<E> {
    /// Capture-only search past the horizon.
    ///
    /// Same-sign minimax, fail-hard: White raises `alpha` from the stand-pat
    /// score and fails high at `beta`; Black lowers `beta` and fails low at
    /// `alpha`. Terminates because every step removes a piece.
    pub(super) fn quiesce(&mut self, game: &mut Game, mut alpha: f64, mut beta: f64) -> f64 {
        self.stats.quiescence_nodes += 1;

        let moves = game.all_legal_moves();
        if moves.is_empty() {
            return terminal_score(game, 0);
        }

        let stand_pat = self.evaluator.evaluate(game);
        let captures = ordered_captures(game, moves);

        if game.white_to_move() {
            if stand_pat >= beta {
                return beta;
            }
            alpha = alpha.max(stand_pat);
            for mv in captures {
                let record = game.make(mv.from, mv.to, PieceKind::Queen);
                let score = self.quiesce(game, alpha, beta);
                game.unmake(record);
                if score >= beta {
                    return beta;
                }
                alpha = alpha.max(score);
            }
            alpha
        } else {
            if stand_pat <= alpha {
                return alpha;
            }
            beta = beta.min(stand_pat);
            for mv in captures {
                let record = game.make(mv.from, mv.to, PieceKind::Queen);
                let score = self.quiesce(game, alpha, beta);
                game.unmake(record);
                if score <= alpha {
                    return alpha;
                }
                beta = beta.min(score);
            }
            beta
        }
    }
}
