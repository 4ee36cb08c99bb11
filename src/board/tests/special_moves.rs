//! Castling, en passant and promotion through the validated game API.

use super::{play, sq};
use crate::board::{Color, Game, MoveError, PieceKind, Position};

fn king_targets(game: &mut Game, from: &str) -> Vec<Position> {
    game.legal_moves_from(sq(from))
}

// ============================================================================
// Castling
// ============================================================================

#[test]
fn castling_both_sides_available() {
    let mut game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let targets = king_targets(&mut game, "e1");
    assert!(targets.contains(&sq("g1")));
    assert!(targets.contains(&sq("c1")));

    game.move_piece(sq("e1"), sq("g1"), None);
    assert!(game.piece_at(sq("g1")).is_some_and(|p| p.is(PieceKind::King, Color::White)));
    assert!(game.piece_at(sq("f1")).is_some_and(|p| p.is(PieceKind::Rook, Color::White)));
    assert!(game.piece_at(sq("h1")).is_none());
    assert_eq!(game.history(), ["e1-g1"]);

    let targets = king_targets(&mut game, "e8");
    assert!(targets.contains(&sq("c8")));
    game.move_piece(sq("e8"), sq("c8"), None);
    assert!(game.piece_at(sq("d8")).is_some_and(|p| p.is(PieceKind::Rook, Color::Black)));
    assert!(game.piece_at(sq("a8")).is_none());
}

#[test]
fn castling_not_through_attacked_square() {
    // The f2 rook covers f1 but not the queenside path.
    let mut game = Game::from_fen("r3k2r/8/8/8/8/8/5r2/R3K2R w KQ - 0 1");
    let targets = king_targets(&mut game, "e1");
    assert!(!targets.contains(&sq("g1")));
    assert!(targets.contains(&sq("c1")));
}

#[test]
fn castling_not_out_of_check() {
    let mut game = Game::from_fen("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let targets = king_targets(&mut game, "e1");
    assert!(!targets.contains(&sq("g1")));
    assert!(!targets.contains(&sq("c1")));
}

#[test]
fn queenside_castling_needs_b_file_empty_but_not_safe() {
    let mut game = Game::from_fen("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1");
    assert!(!king_targets(&mut game, "e1").contains(&sq("c1")));

    // b1 attacked does not matter, the king never crosses it.
    let mut game = Game::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert!(king_targets(&mut game, "e1").contains(&sq("c1")));
}

#[test]
fn castling_lost_after_rook_moves_and_returns() {
    let mut game = Game::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    assert!(king_targets(&mut game, "e1").contains(&sq("g1")));
    play(&mut game, &["h1h2", "e8d8", "h2h1", "d8e8"]);
    assert!(!king_targets(&mut game, "e1").contains(&sq("g1")));
}

#[test]
fn castling_lost_after_king_moves_and_returns() {
    let mut game = Game::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    play(&mut game, &["e1f1", "e8d8", "f1e1", "d8e8"]);
    let targets = king_targets(&mut game, "e1");
    assert!(!targets.contains(&sq("g1")));
    assert!(!targets.contains(&sq("c1")));
}

// ============================================================================
// En passant
// ============================================================================

#[test]
fn en_passant_immediately_after_double_push() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert_eq!(game.en_passant_target(), Some(sq("d6")));
    assert!(game.legal_moves_from(sq("e5")).contains(&sq("d6")));

    game.move_piece(sq("e5"), sq("d6"), None);
    assert!(game.piece_at(sq("d5")).is_none());
    assert!(game.piece_at(sq("d6")).is_some_and(|p| p.is(PieceKind::Pawn, Color::White)));
    assert_eq!(game.history().last().map(String::as_str), Some("e5-d6"));
    assert_eq!(game.en_passant_target(), None);
}

#[test]
fn en_passant_expires_after_one_ply() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5", "a2a3", "a6a5"]);
    assert_eq!(game.en_passant_target(), None);
    assert!(!game.legal_moves_from(sq("e5")).contains(&sq("d6")));
    assert_eq!(
        game.try_move(sq("e5"), sq("d6"), None),
        Err(MoveError::IllegalMove {
            from: sq("e5"),
            to: sq("d6")
        })
    );
}

#[test]
fn en_passant_that_exposes_king_is_illegal() {
    // Removing both pawns from the fifth rank opens the h5 rook onto a5.
    let mut game = Game::from_fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1");
    assert_eq!(game.legal_moves_from(sq("e5")), vec![sq("e6")]);
}

// ============================================================================
// Promotion
// ============================================================================

#[test]
fn promotion_honours_choice() {
    let mut game = Game::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    game.move_piece(sq("a7"), sq("a8"), Some('n'));
    assert!(game.piece_at(sq("a8")).is_some_and(|p| p.is(PieceKind::Knight, Color::White)));
    assert_eq!(game.history(), ["a7-a8=N"]);
}

#[test]
fn promotion_defaults_to_queen() {
    for choice in [None, Some('q'), Some('k'), Some('x')] {
        let mut game = Game::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
        game.move_piece(sq("a7"), sq("a8"), choice);
        assert!(
            game.piece_at(sq("a8")).is_some_and(|p| p.is(PieceKind::Queen, Color::White)),
            "choice {choice:?}"
        );
    }
}

#[test]
fn black_promotion_with_check() {
    let mut game = Game::from_fen("k7/8/8/8/8/8/p7/7K b - - 0 1");
    game.move_piece(sq("a2"), sq("a1"), None);
    assert_eq!(game.history(), ["a2-a1=Q+"]);
    assert!(game.in_check(Color::White));
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
fn rejected_moves_leave_game_unchanged() {
    let mut game = Game::new();
    let fen = game.to_fen();

    assert_eq!(
        game.try_move(sq("e4"), sq("e5"), None),
        Err(MoveError::EmptySquare { square: sq("e4") })
    );
    assert_eq!(
        game.try_move(sq("e7"), sq("e5"), None),
        Err(MoveError::WrongSide {
            square: sq("e7"),
            to_move: Color::White
        })
    );
    assert_eq!(
        game.try_move(sq("e2"), sq("e5"), None),
        Err(MoveError::IllegalMove {
            from: sq("e2"),
            to: sq("e5")
        })
    );
    assert!(matches!(
        game.try_move_text("e2e9"),
        Err(MoveError::Notation(_))
    ));

    game.move_piece(sq("g1"), sq("g3"), None);
    assert_eq!(game.to_fen(), fen);
    assert!(game.history().is_empty());
    assert!(game.white_to_move());
}
