use super::{Board, Color, Piece, PieceKind, Position};
use crate::zobrist::hash_position;

/// Everything needed to take back one ply.
///
/// Produced by [`Game::make`] and consumed by [`Game::unmake`].
#[derive(Clone, Debug)]
pub struct MoveRecord {
    /// The moving piece as it was before the move (prior moved flag included)
    pub(crate) mover: Piece,
    pub(crate) from: Position,
    pub(crate) to: Position,
    /// Captured piece and the square it stood on (differs from `to` for en passant)
    pub(crate) captured: Option<(Position, Piece)>,
    pub(crate) previous_en_passant: Option<Position>,
    /// Rook origin, rook destination, and the rook as it stood before castling
    pub(crate) castle: Option<(Position, Position, Piece)>,
    pub(crate) promotion: Option<PieceKind>,
    pub(crate) previous_hash: u64,
}

impl MoveRecord {
    #[must_use]
    pub fn from(&self) -> Position {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> Position {
        self.to
    }

    #[must_use]
    pub fn captured(&self) -> Option<Piece> {
        self.captured.map(|(_, piece)| piece)
    }

    #[must_use]
    pub fn is_castle(&self) -> bool {
        self.castle.is_some()
    }

    #[must_use]
    pub fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }
}

/// The authoritative game state: board, turn, en passant target,
/// game-over flag, move history and the running Zobrist hash.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) en_passant: Option<Position>,
    pub(crate) game_over: bool,
    pub(crate) history: Vec<String>,
    pub(crate) hash: u64,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game at the standard starting position, white to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(Board::standard(), Color::White, None)
    }

    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        en_passant: Option<Position>,
    ) -> Self {
        let hash = hash_position(&board, side_to_move);
        Game {
            board,
            side_to_move,
            en_passant,
            game_over: false,
            history: Vec::new(),
            hash,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Position> {
        self.en_passant
    }

    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.board.get(pos)
    }

    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Hash recomputed from the board and turn, ignoring the running value.
    #[must_use]
    pub fn compute_hash(&self) -> u64 {
        hash_position(&self.board, self.side_to_move)
    }
}
