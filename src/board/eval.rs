//! Static evaluation.
//!
//! Scores are in pawn-tenths from White's point of view: positive favours
//! White, negative favours Black. The search maximizes for White and
//! minimizes for Black, so evaluators must never flip the sign by side to move.

use super::{Color, Game};

/// Magnitude of a checkmate score. Large enough that no material sum reaches it.
pub const MATE_SCORE: f64 = 1.0e9;

/// Default bonus for giving check, half a pawn.
pub const DEFAULT_CHECK_BONUS: f64 = 5.0;

/// A static evaluation of a position, White-positive.
pub trait Evaluator {
    fn evaluate(&self, game: &Game) -> f64;
}

/// Material balance plus a bonus for the side giving check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialEvaluator {
    pub check_bonus: f64,
}

impl Default for MaterialEvaluator {
    fn default() -> Self {
        MaterialEvaluator {
            check_bonus: DEFAULT_CHECK_BONUS,
        }
    }
}

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, game: &Game) -> f64 {
        let mut score = material_balance(game);
        if game.in_check(Color::Black) {
            score += self.check_bonus;
        }
        if game.in_check(Color::White) {
            score -= self.check_bonus;
        }
        score
    }
}

/// White material minus black material.
#[must_use]
pub fn material_balance(game: &Game) -> f64 {
    game.board()
        .occupied()
        .map(|(_, piece)| {
            let value = f64::from(piece.kind.value());
            match piece.color {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

/// Score of a position where the side to move has no legal move.
///
/// Checkmate is worth `MATE_SCORE` plus the remaining depth, so a mate
/// found closer to the root outranks a later one. Stalemate is a draw.
#[must_use]
pub fn terminal_score(game: &Game, remaining_depth: u32) -> f64 {
    let side = game.side_to_move();
    if !game.in_check(side) {
        return 0.0;
    }
    let magnitude = MATE_SCORE + f64::from(remaining_depth);
    match side {
        Color::White => -magnitude,
        Color::Black => magnitude,
    }
}
