//! Square attack detection.
//!
//! `is_square_attacked` scans outward from the target square and never
//! generates moves, so check detection cannot recurse into legality
//! filtering.

use super::{Board, Color, Game, PieceKind, Position};

pub(crate) const KNIGHT_JUMPS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_STEPS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const STRAIGHT_RAYS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub(crate) const DIAGONAL_RAYS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Board {
    /// Whether any piece of `by` attacks `sq`.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Position, by: Color) -> bool {
        let holds = |pos: Option<Position>, kind: PieceKind| {
            pos.and_then(|p| self.get(p))
                .is_some_and(|piece| piece.is(kind, by))
        };

        // An attacking pawn sits one step behind `sq` from its own point of view.
        let pawn_row = -by.pawn_direction();
        if holds(sq.offset(pawn_row, -1), PieceKind::Pawn)
            || holds(sq.offset(pawn_row, 1), PieceKind::Pawn)
        {
            return true;
        }

        if KNIGHT_JUMPS
            .iter()
            .any(|&(dr, dc)| holds(sq.offset(dr, dc), PieceKind::Knight))
        {
            return true;
        }

        if KING_STEPS
            .iter()
            .any(|&(dr, dc)| holds(sq.offset(dr, dc), PieceKind::King))
        {
            return true;
        }

        self.ray_attack(sq, by, &STRAIGHT_RAYS, PieceKind::attacks_straight)
            || self.ray_attack(sq, by, &DIAGONAL_RAYS, PieceKind::attacks_diagonally)
    }

    fn ray_attack(
        &self,
        sq: Position,
        by: Color,
        rays: &[(isize, isize)],
        slides: fn(PieceKind) -> bool,
    ) -> bool {
        for &(dr, dc) in rays {
            let mut cursor = sq.offset(dr, dc);
            while let Some(pos) = cursor {
                if let Some(piece) = self.get(pos) {
                    if piece.color == by && slides(piece.kind) {
                        return true;
                    }
                    break;
                }
                cursor = pos.offset(dr, dc);
            }
        }
        false
    }
}

impl Game {
    /// Whether `color`'s king is attacked. A side without a king is never in check.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.board
            .find_king(color)
            .is_some_and(|king| self.board.is_square_attacked(king, color.opposite()))
    }

    #[must_use]
    pub fn is_square_attacked(&self, sq: Position, by: Color) -> bool {
        self.board.is_square_attacked(sq, by)
    }
}
