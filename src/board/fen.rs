//! Position setup from FEN text.
//!
//! The castling field maps onto moved flags: a king or rook on its home
//! square counts as unmoved only when a castling letter vouches for it.
//! Pawns are unmoved exactly when they stand on their starting row.

use std::str::FromStr;

use super::error::FenError;
use super::{Board, Color, Game, Piece, PieceKind, Position};

/// (castling letter, color, rook column)
const CASTLING_LETTERS: [(char, Color, usize); 4] = [
    ('K', Color::White, 7),
    ('Q', Color::White, 0),
    ('k', Color::Black, 7),
    ('q', Color::Black, 0),
];

const KING_COL: usize = 4;

impl Game {
    /// Parse a game position from FEN notation.
    ///
    /// Returns an error if the FEN string is invalid, including an
    /// en-passant square no double push could have left. Move counters,
    /// when present, are ignored. A position where the side to move has no
    /// legal move starts out game over.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut board = parse_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts[2].chars() {
            if c == '-' {
                continue;
            }
            let (_, color, rook_col) = CASTLING_LETTERS
                .iter()
                .copied()
                .find(|(letter, _, _)| *letter == c)
                .ok_or(FenError::InvalidCastling { char: c })?;
            let row = color.back_row();
            let king_sq = Position::new_unchecked(row, KING_COL);
            let rook_sq = Position::new_unchecked(row, rook_col);
            if let (Some(king), Some(rook)) = (board.get(king_sq), board.get(rook_sq)) {
                if king.is(PieceKind::King, color) && rook.is(PieceKind::Rook, color) {
                    board.place(king_sq, Piece::new(PieceKind::King, color));
                    board.place(rook_sq, Piece::new(PieceKind::Rook, color));
                }
            }
        }

        let en_passant = match parts[3] {
            "-" => None,
            text => {
                let invalid = || FenError::InvalidEnPassant {
                    found: text.to_string(),
                };
                let target = text.parse::<Position>().map_err(|_| invalid())?;
                if !double_push_left(&board, target, side_to_move.opposite()) {
                    return Err(invalid());
                }
                Some(target)
            }
        };

        let mut game = Game::from_parts(board, side_to_move, en_passant);
        game.game_over = !game.has_legal_move(side_to_move);
        Ok(game)
    }

    /// Parse a game position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation. Move counters are written as `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8 {
                match self.board.get(Position::new_unchecked(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            text.push_str(&empty.to_string());
                            empty = 0;
                        }
                        text.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let active = if self.white_to_move() { "w" } else { "b" };

        let castling: String = CASTLING_LETTERS
            .iter()
            .filter(|(_, color, rook_col)| self.castling_available(*color, *rook_col))
            .map(|(letter, _, _)| *letter)
            .collect();
        let castling = if castling.is_empty() {
            "-".to_string()
        } else {
            castling
        };

        let en_passant = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{} {active} {castling} {en_passant} 0 1", rows.join("/"))
    }

    /// King and rook both unmoved on their home squares.
    fn castling_available(&self, color: Color, rook_col: usize) -> bool {
        let row = color.back_row();
        let unmoved = |col: usize, kind: PieceKind| {
            self.board
                .get(Position::new_unchecked(row, col))
                .is_some_and(|p| p.is(kind, color) && !p.moved)
        };
        unmoved(KING_COL, PieceKind::King) && unmoved(rook_col, PieceKind::Rook)
    }
}

/// Whether a pawn of `pusher` could just have double-stepped over `target`:
/// the square is on the skipped row, empty, and the pawn stands beyond it.
fn double_push_left(board: &Board, target: Position, pusher: Color) -> bool {
    let dir = pusher.pawn_direction();
    let skipped_row = pusher.pawn_row() as isize + dir;
    target.row() as isize == skipped_row
        && board.is_empty_at(target)
        && target
            .offset(dir, 0)
            .and_then(|pos| board.get(pos))
            .is_some_and(|piece| piece.is(PieceKind::Pawn, pusher))
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (row, rank) in ranks.iter().enumerate() {
        let mut col = 0;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as usize;
                continue;
            }
            let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let Some(pos) = Position::new(row, col) else {
                return Err(FenError::InvalidRankLength {
                    rank: 8 - row,
                    files: col + 1,
                });
            };
            let moved = match kind {
                PieceKind::Pawn => row != color.pawn_row(),
                // Unmoved only if the castling field says so.
                PieceKind::King | PieceKind::Rook => true,
                _ => false,
            };
            board.place(pos, Piece { kind, color, moved });
            col += 1;
        }
        if col != 8 {
            return Err(FenError::InvalidRankLength {
                rank: 8 - row,
                files: col,
            });
        }
    }
    Ok(board)
}

impl FromStr for Game {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::try_from_fen(s)
    }
}
