//! 8x8 piece storage with no rule knowledge.

use super::{Color, Piece, PieceKind, Position};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting placement, every piece unmoved.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            for color in Color::BOTH {
                board.place(
                    Position::new_unchecked(color.back_row(), col),
                    Piece::new(*kind, color),
                );
                board.place(
                    Position::new_unchecked(color.pawn_row(), col),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.row()][pos.col()]
    }

    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        self.squares[pos.row()][pos.col()] = piece;
    }

    #[inline]
    pub fn place(&mut self, pos: Position, piece: Piece) {
        self.set(pos, Some(piece));
    }

    /// Remove and return whatever stands on `pos`.
    #[inline]
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        self.squares[pos.row()][pos.col()].take()
    }

    #[inline]
    #[must_use]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Every occupied square with its piece, in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.get(pos).map(|piece| (pos, piece)))
    }

    /// Every square holding a piece of `color`.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.occupied()
            .find(|(_, piece)| piece.is(PieceKind::King, color))
            .map(|(pos, _)| pos)
    }
}
