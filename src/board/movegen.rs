//! Move generation.
//!
//! `Board::pseudo_legal_destinations` follows each piece's movement
//! pattern and ignores checks. `Game::legal_moves_from` adds castling and
//! en passant and then drops every destination that leaves the mover's
//! king attacked, by making the move, testing, and unmaking it.

use super::attacks::{DIAGONAL_RAYS, KING_STEPS, KNIGHT_JUMPS, STRAIGHT_RAYS};
use super::{Board, Color, Game, Move, Piece, PieceKind, Position};

const KINGSIDE_ROOK_COL: usize = 7;
const QUEENSIDE_ROOK_COL: usize = 0;
const KING_START_COL: usize = 4;

/// Squares between king and rook that must be empty for castling.
/// The first two entries are also the squares the king crosses.
const KINGSIDE_EMPTY: [usize; 2] = [5, 6];
const QUEENSIDE_EMPTY: [usize; 3] = [3, 2, 1];

impl Board {
    /// Destinations reachable by the piece on `from` following its movement
    /// pattern, without regard to checks, castling or en passant.
    #[must_use]
    pub fn pseudo_legal_destinations(&self, from: Position) -> Vec<Position> {
        let mut out = Vec::new();
        if let Some(piece) = self.get(from) {
            match piece.kind {
                PieceKind::Pawn => self.pawn_destinations(from, piece.color, &mut out),
                PieceKind::Knight => self.step_destinations(from, piece.color, &KNIGHT_JUMPS, &mut out),
                PieceKind::King => self.step_destinations(from, piece.color, &KING_STEPS, &mut out),
                PieceKind::Bishop => self.ray_destinations(from, piece.color, &DIAGONAL_RAYS, &mut out),
                PieceKind::Rook => self.ray_destinations(from, piece.color, &STRAIGHT_RAYS, &mut out),
                PieceKind::Queen => {
                    self.ray_destinations(from, piece.color, &STRAIGHT_RAYS, &mut out);
                    self.ray_destinations(from, piece.color, &DIAGONAL_RAYS, &mut out);
                }
            }
        }
        out
    }

    fn pawn_destinations(&self, from: Position, color: Color, out: &mut Vec<Position>) {
        let dir = color.pawn_direction();
        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty_at(one) {
                out.push(one);
                if from.row() == color.pawn_row() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty_at(two) {
                            out.push(two);
                        }
                    }
                }
            }
        }
        for dc in [-1, 1] {
            if let Some(target) = from.offset(dir, dc) {
                if self.get(target).is_some_and(|p| p.color != color) {
                    out.push(target);
                }
            }
        }
    }

    fn step_destinations(
        &self,
        from: Position,
        color: Color,
        steps: &[(isize, isize)],
        out: &mut Vec<Position>,
    ) {
        for &(dr, dc) in steps {
            if let Some(target) = from.offset(dr, dc) {
                if self.get(target).map_or(true, |p| p.color != color) {
                    out.push(target);
                }
            }
        }
    }

    fn ray_destinations(
        &self,
        from: Position,
        color: Color,
        rays: &[(isize, isize)],
        out: &mut Vec<Position>,
    ) {
        for &(dr, dc) in rays {
            let mut cursor = from.offset(dr, dc);
            while let Some(target) = cursor {
                match self.get(target) {
                    None => out.push(target),
                    Some(p) => {
                        if p.color != color {
                            out.push(target);
                        }
                        break;
                    }
                }
                cursor = target.offset(dr, dc);
            }
        }
    }
}

impl Game {
    /// Legal destinations for the piece on `from`.
    ///
    /// Empty when the square is empty or holds a piece of the side not on move.
    pub fn legal_moves_from(&mut self, from: Position) -> Vec<Position> {
        match self.board.get(from) {
            Some(piece) if piece.color == self.side_to_move => self.legal_destinations(from, piece),
            _ => Vec::new(),
        }
    }

    /// All legal moves for the side to move, in square order.
    pub fn all_legal_moves(&mut self) -> Vec<Move> {
        self.legal_moves_for(self.side_to_move)
    }

    /// Whether `color` has at least one legal move.
    pub fn has_legal_move(&mut self, color: Color) -> bool {
        let origins: Vec<(Position, Piece)> = self.board.pieces(color).collect();
        origins
            .into_iter()
            .any(|(from, piece)| !self.legal_destinations(from, piece).is_empty())
    }

    pub(crate) fn legal_moves_for(&mut self, color: Color) -> Vec<Move> {
        let origins: Vec<(Position, Piece)> = self.board.pieces(color).collect();
        let mut moves = Vec::with_capacity(48);
        for (from, piece) in origins {
            moves.extend(
                self.legal_destinations(from, piece)
                    .into_iter()
                    .map(|to| Move::new(from, to)),
            );
        }
        moves
    }

    fn legal_destinations(&mut self, from: Position, piece: Piece) -> Vec<Position> {
        let mut moves = self.board.pseudo_legal_destinations(from);
        self.add_special_moves(from, piece, &mut moves);
        moves.retain(|&to| !self.leaves_king_in_check(from, to));
        moves
    }

    fn add_special_moves(&self, from: Position, piece: Piece, moves: &mut Vec<Position>) {
        match piece.kind {
            PieceKind::Pawn => {
                if let Some(ep) = self.en_passant {
                    let dir = piece.color.pawn_direction();
                    if from.row() as isize + dir == ep.row() as isize
                        && from.col().abs_diff(ep.col()) == 1
                        && self.is_en_passant(piece, from, ep)
                    {
                        moves.push(ep);
                    }
                }
            }
            PieceKind::King => {
                let row = piece.color.back_row();
                if piece.moved
                    || from != Position::new_unchecked(row, KING_START_COL)
                    || self.in_check(piece.color)
                {
                    return;
                }
                if self.can_castle(piece.color, KINGSIDE_ROOK_COL, &KINGSIDE_EMPTY) {
                    moves.push(Position::new_unchecked(row, 6));
                }
                if self.can_castle(piece.color, QUEENSIDE_ROOK_COL, &QUEENSIDE_EMPTY) {
                    moves.push(Position::new_unchecked(row, 2));
                }
            }
            _ => {}
        }
    }

    /// Castling precondition for `color` with the rook on `rook_col`.
    ///
    /// The rook must be unmoved, every column in `must_be_empty` empty, and
    /// neither the king's square nor the two squares it crosses attacked.
    /// The king's own eligibility (unmoved, not in check) is checked by the caller.
    pub(crate) fn can_castle(&self, color: Color, rook_col: usize, must_be_empty: &[usize]) -> bool {
        let row = color.back_row();
        let rook_ok = self
            .board
            .get(Position::new_unchecked(row, rook_col))
            .is_some_and(|rook| rook.is(PieceKind::Rook, color) && !rook.moved);
        if !rook_ok {
            return false;
        }
        if must_be_empty
            .iter()
            .any(|&col| !self.board.is_empty_at(Position::new_unchecked(row, col)))
        {
            return false;
        }
        let enemy = color.opposite();
        std::iter::once(KING_START_COL)
            .chain(must_be_empty.iter().copied().take(2))
            .all(|col| !self.board.is_square_attacked(Position::new_unchecked(row, col), enemy))
    }

    fn leaves_king_in_check(&mut self, from: Position, to: Position) -> bool {
        let record = self.make(from, to, PieceKind::Queen);
        let exposed = self.in_check(record.mover.color);
        self.unmake(record);
        exposed
    }

    /// Whether `mv` captures something, en passant included.
    #[must_use]
    pub fn is_capture(&self, mv: Move) -> bool {
        self.captured_kind(mv).is_some()
    }

    /// The kind of piece `mv` would capture.
    #[must_use]
    pub(crate) fn captured_kind(&self, mv: Move) -> Option<PieceKind> {
        let mover = self.board.get(mv.from)?;
        match self.board.get(mv.to) {
            Some(target) if target.color != mover.color => Some(target.kind),
            Some(_) => None,
            None if self.is_en_passant(mover, mv.from, mv.to) => Some(PieceKind::Pawn),
            None => None,
        }
    }

    /// A pawn moving diagonally onto the empty en-passant target, with an
    /// enemy pawn beside it to capture.
    pub(crate) fn is_en_passant(&self, mover: Piece, from: Position, to: Position) -> bool {
        mover.kind == PieceKind::Pawn
            && from.col() != to.col()
            && self.en_passant == Some(to)
            && self.board.is_empty_at(to)
            && self
                .board
                .get(Position::new_unchecked(from.row(), to.col()))
                .is_some_and(|victim| victim.is(PieceKind::Pawn, mover.color.opposite()))
    }

    /// Whether moving the piece on `from` to `to` is a pawn promotion.
    #[must_use]
    pub fn is_promotion(&self, from: Position, to: Position) -> bool {
        self.board
            .get(from)
            .is_some_and(|p| p.kind == PieceKind::Pawn && to.row() == p.color.promotion_row())
    }
}
