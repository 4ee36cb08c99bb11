//! Front-end operations: validated moves, history, and game status.

use log::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::MoveError;
use super::notation::{history_entry, parse_move};
use super::{Color, Game, PieceKind, Position};

/// Outcome of the position from the side to move's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

impl Game {
    /// Reset to the standard starting position with an empty history.
    pub fn new_game(&mut self) {
        *self = Game::new();
    }

    /// Play a move for the side to move, silently ignoring it if it is not legal.
    ///
    /// Use [`Game::try_move`] to learn why a move was refused.
    pub fn move_piece(&mut self, from: Position, to: Position, promotion: Option<char>) {
        if let Err(err) = self.try_move(from, to, promotion) {
            debug!("move {from}-{to} rejected: {err}");
        }
    }

    /// Validate and play a move, append its notation to the history, and
    /// update the game-over flag.
    ///
    /// An unrecognised promotion letter promotes to a queen. On error the
    /// game is unchanged.
    pub fn try_move(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<char>,
    ) -> Result<(), MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        let piece = self
            .board
            .get(from)
            .ok_or(MoveError::EmptySquare { square: from })?;
        if piece.color != self.side_to_move {
            return Err(MoveError::WrongSide {
                square: from,
                to_move: self.side_to_move,
            });
        }
        if !self.legal_moves_from(from).contains(&to) {
            return Err(MoveError::IllegalMove { from, to });
        }

        let choice = PieceKind::from_promotion_char(promotion);
        let record = self.make(from, to, choice);

        let mut notation = history_entry(from, to, record.promotion());

        let defender = self.side_to_move;
        if self.in_check(defender) {
            if self.has_legal_move(defender) {
                notation.push('+');
            } else {
                notation.push('#');
                self.game_over = true;
                info!("checkmate, {} wins", defender.opposite());
            }
        } else if !self.has_legal_move(defender) {
            self.game_over = true;
            info!("stalemate, {defender} has no legal move");
        }

        self.history.push(notation);
        Ok(())
    }

    /// Parse coordinate text such as `e2e4` or `e7-e8=N` and play it.
    pub fn try_move_text(&mut self, text: &str) -> Result<(), MoveError> {
        let (mv, promotion) = parse_move(text)?;
        self.try_move(mv.from, mv.to, promotion)
    }

    /// Notated moves played through [`Game::try_move`], oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Set once a move leaves the side to move without a legal reply.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// `color` is in check and has no legal move.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.in_check(color) && !self.has_legal_move(color)
    }

    /// `color` is not in check and has no legal move.
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.in_check(color) && !self.has_legal_move(color)
    }

    /// Status of the side to move, computed from the board.
    pub fn status(&mut self) -> GameStatus {
        let side = self.side_to_move;
        if self.has_legal_move(side) {
            GameStatus::Ongoing
        } else if self.in_check(side) {
            GameStatus::Checkmate {
                winner: side.opposite(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    /// Promotions are counted once (as queen promotions).
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.all_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in moves {
            let record = self.make(mv.from, mv.to, PieceKind::Queen);
            nodes += self.perft(depth - 1);
            self.unmake(record);
        }
        nodes
    }
}
