use crate::zobrist::{piece_key, side_key};

use super::{Game, MoveRecord, Piece, PieceKind, Position};

impl Game {
    /// Play `from -> to` on the board without any legality check and return
    /// the record that undoes it.
    ///
    /// Handles castling (king moves two files, the rook follows), en passant
    /// (the captured pawn stands beside the origin, not on `to`) and promotion
    /// (`promotion` replaces a pawn reaching its last row; anything other than
    /// Rook, Bishop or Knight becomes a Queen). The hash is updated
    /// incrementally. History and the game-over flag are left alone.
    ///
    /// # Panics
    /// Panics if `from` is empty.
    pub fn make(&mut self, from: Position, to: Position, promotion: PieceKind) -> MoveRecord {
        let mover = self
            .board
            .get(from)
            .expect("make: no piece on the origin square");
        let previous_hash = self.hash;
        let previous_en_passant = self.en_passant;
        let mut hash = self.hash;

        let captured = if self.is_en_passant(mover, from, to) {
            let square = Position::new_unchecked(from.row(), to.col());
            self.board.take(square).map(|piece| (square, piece))
        } else {
            self.board.take(to).map(|piece| (to, piece))
        };
        if let Some((square, piece)) = captured {
            hash ^= piece_key(piece, square);
        }

        self.board.set(from, None);
        hash ^= piece_key(mover, from);

        let promotion = (mover.kind == PieceKind::Pawn && to.row() == mover.color.promotion_row())
            .then(|| match promotion {
                PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight => promotion,
                _ => PieceKind::Queen,
            });
        let placed = Piece {
            kind: promotion.unwrap_or(mover.kind),
            color: mover.color,
            moved: true,
        };
        self.board.place(to, placed);
        hash ^= piece_key(placed, to);

        let mut castle = None;
        if mover.kind == PieceKind::King && from.col().abs_diff(to.col()) == 2 {
            let (rook_col, rook_dest_col) = if to.col() > from.col() { (7, 5) } else { (0, 3) };
            let rook_from = Position::new_unchecked(from.row(), rook_col);
            let rook_to = Position::new_unchecked(from.row(), rook_dest_col);
            if let Some(rook) = self.board.take(rook_from) {
                let moved_rook = Piece { moved: true, ..rook };
                self.board.place(rook_to, moved_rook);
                hash ^= piece_key(rook, rook_from);
                hash ^= piece_key(moved_rook, rook_to);
                castle = Some((rook_from, rook_to, rook));
            }
        }

        self.en_passant = None;
        if mover.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
            let skipped_row = (from.row() + to.row()) / 2;
            self.en_passant = Some(Position::new_unchecked(skipped_row, from.col()));
        }

        self.side_to_move = self.side_to_move.opposite();
        hash ^= side_key();
        self.hash = hash;

        MoveRecord {
            mover,
            from,
            to,
            captured,
            previous_en_passant,
            castle,
            promotion,
            previous_hash,
        }
    }

    /// Undo a move produced by [`Game::make`]. Records must be unmade in
    /// reverse order of making.
    pub fn unmake(&mut self, record: MoveRecord) {
        let mut hash = self.hash ^ side_key();
        self.side_to_move = self.side_to_move.opposite();
        self.en_passant = record.previous_en_passant;

        if let Some((rook_from, rook_to, rook)) = record.castle {
            if let Some(moved_rook) = self.board.take(rook_to) {
                hash ^= piece_key(moved_rook, rook_to);
            }
            self.board.place(rook_from, rook);
            hash ^= piece_key(rook, rook_from);
        }

        if let Some(placed) = self.board.take(record.to) {
            hash ^= piece_key(placed, record.to);
        }
        self.board.place(record.from, record.mover);
        hash ^= piece_key(record.mover, record.from);

        if let Some((square, piece)) = record.captured {
            self.board.place(square, piece);
            hash ^= piece_key(piece, square);
        }

        debug_assert_eq!(hash, record.previous_hash, "unmake: hash drifted");
        self.hash = hash;
    }
}
