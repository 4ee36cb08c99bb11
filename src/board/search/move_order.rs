//! Move ordering utilities for search.
//!
//! Captures come first, most valuable victim / least valuable attacker
//! before the rest; quiet moves keep generation order. Ordering only
//! affects how much gets pruned, never the score.

use crate::board::{Game, Move};

/// Base added to every capture so it sorts ahead of quiet moves.
const CAPTURE_BASE: i32 = 1 << 20;

/// MVV-LVA score of `mv`, or `None` for a quiet move.
pub fn mvv_lva_score(game: &Game, mv: Move) -> Option<i32> {
    let victim = game.captured_kind(mv)?;
    let attacker = game.piece_at(mv.from)?;
    // Kings are never captured in legal play; cap the value so the sum stays small.
    let victim_value = victim.value().min(1000);
    Some(CAPTURE_BASE + victim_value * 100 - attacker.kind.value().min(1000))
}

/// Sort `moves` so that captures come first, best MVV-LVA score first.
/// The sort is stable, so equal scores keep generation order.
pub fn order_moves(game: &Game, moves: &mut [Move]) {
    moves.sort_by_cached_key(|&mv| std::cmp::Reverse(mvv_lva_score(game, mv).unwrap_or(0)));
}

/// Only the captures among `moves`, best MVV-LVA score first.
pub fn ordered_captures(game: &Game, moves: Vec<Move>) -> Vec<Move> {
    let mut scored: Vec<(Move, i32)> = moves
        .into_iter()
        .filter_map(|mv| mvv_lva_score(game, mv).map(|score| (mv, score)))
        .collect();
    scored.sort_by_key(|&(_, score)| std::cmp::Reverse(score));
    scored.into_iter().map(|(mv, _)| mv).collect()
}
