//! Chess rules and game state.
//!
//! An 8×8 mailbox board indexed by (row, col) with row 0 as rank 8. Every
//! piece carries a `moved` flag, which is all castling legality needs.
//! Moves are generated pseudo-legally and filtered by playing them on the
//! live game and taking them back.
//!
//! # Example
//! ```
//! use chess_rules_ai::board::{Game, SearchConfig, SearchEngine};
//!
//! let mut game = Game::new();
//! println!("Starting position has {} legal moves", game.all_legal_moves().len());
//!
//! let mut engine = SearchEngine::new(SearchConfig::with_depth(2));
//! let best = engine.find_best_move(&mut game).expect("a legal move");
//! game.move_piece(best.from, best.to, None);
//! assert_eq!(game.history().len(), 1);
//! ```

mod attacks;
mod error;
mod eval;
mod fen;
mod game;
mod grid;
mod make_unmake;
mod movegen;
mod notation;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveError, SquareError};
pub use eval::{
    material_balance, terminal_score, Evaluator, MaterialEvaluator, DEFAULT_CHECK_BONUS,
    MATE_SCORE,
};
pub use game::GameStatus;
pub use grid::Board;
pub use notation::parse_move;
pub use search::{SearchConfig, SearchEngine, SearchResult, SearchStats};
pub use state::{Game, MoveRecord};
pub use types::{Color, Move, Piece, PieceKind, Position};
