//! Front-end flows through the public game API.

use chess_rules_ai::board::{parse_move, FenError, MoveError, SquareError};
use chess_rules_ai::{Color, Game, GameStatus, PieceKind, Position};

fn sq(name: &str) -> Position {
    name.parse().expect("valid square")
}

#[test]
fn squares_parse_and_print() {
    let e4 = sq("e4");
    assert_eq!((e4.row(), e4.col()), (4, 4));
    assert_eq!(e4.to_string(), "e4");
    assert_eq!(sq("a8"), Position::new(0, 0).expect("on board"));
    assert_eq!(sq("h1"), Position::new(7, 7).expect("on board"));
    assert!(Position::new(8, 0).is_none());

    assert_eq!(
        "i4".parse::<Position>(),
        Err(SquareError::FileOutOfBounds { file: 'i' })
    );
    assert_eq!(
        "a0".parse::<Position>(),
        Err(SquareError::RankOutOfBounds { rank: '0' })
    );
    assert!("e44".parse::<Position>().is_err());
}

#[test]
fn starting_position() {
    let mut game = Game::new();
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.all_legal_moves().len(), 20);
    assert_eq!(
        game.to_fen(),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    );
    let king = game.piece_at(sq("e1")).expect("white king");
    assert!(king.is(PieceKind::King, Color::White));
    assert!(!king.moved);
    assert_eq!(game.status(), GameStatus::Ongoing);
}

#[test]
fn pawn_targets_from_start() {
    let mut game = Game::new();
    assert_eq!(game.legal_moves_from(sq("e2")), vec![sq("e3"), sq("e4")]);
    assert_eq!(game.legal_moves_from(sq("g1")).len(), 2);
    // Black pieces have no moves while White is to move.
    assert!(game.legal_moves_from(sq("e7")).is_empty());
    assert!(game.legal_moves_from(sq("e4")).is_empty());
}

#[test]
fn moves_alternate_and_record_history() {
    let mut game = Game::new();
    game.move_piece(sq("e2"), sq("e4"), None);
    game.move_piece(sq("e2"), sq("e3"), None); // empty square, ignored
    game.move_piece(sq("e7"), sq("e5"), None);
    game.move_piece(sq("g1"), sq("f3"), None);

    assert_eq!(game.history(), ["e2-e4", "e7-e5", "g1-f3"]);
    assert_eq!(game.side_to_move(), Color::Black);
    assert!(game.piece_at(sq("f3")).is_some_and(|p| p.moved));
}

#[test]
fn move_text_is_accepted() {
    let mut game = Game::new();
    assert_eq!(game.try_move_text("e2e4"), Ok(()));
    assert_eq!(game.try_move_text("e7-e5"), Ok(()));
    assert_eq!(
        game.try_move_text("e4e5"),
        Err(MoveError::IllegalMove {
            from: sq("e4"),
            to: sq("e5")
        })
    );
    let (mv, promotion) = parse_move("b7-b8=R").expect("parse");
    assert_eq!((mv.from, mv.to, promotion), (sq("b7"), sq("b8"), Some('R')));
}

#[test]
fn errors_display_readably() {
    let err = MoveError::WrongSide {
        square: sq("e7"),
        to_move: Color::White,
    };
    assert_eq!(
        err.to_string(),
        "Piece on e7 does not belong to white, who is to move"
    );
    assert_eq!(MoveError::GameOver.to_string(), "The game is over");
    let err: Box<dyn std::error::Error> = Box::new(FenError::TooFewParts { found: 1 });
    assert!(err.to_string().contains("found 1"));
}

#[test]
fn fen_round_trip_and_errors() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let game: Game = fen.parse().expect("valid FEN");
    assert_eq!(game.to_fen(), fen);

    let ep = Game::try_from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
        .expect("valid FEN");
    assert_eq!(ep.en_passant_target(), Some(sq("f6")));

    assert_eq!(
        Game::try_from_fen("8/8/8 w").err(),
        Some(FenError::TooFewParts { found: 2 })
    );
    assert_eq!(
        Game::try_from_fen("8/8/8/8/8/8/8 w - - 0 1").err(),
        Some(FenError::InvalidRankCount { found: 7 })
    );
    assert_eq!(
        Game::try_from_fen("8/8/8/8/8/8/8/7 w - - 0 1").err(),
        Some(FenError::InvalidRankLength { rank: 1, files: 7 })
    );
    assert_eq!(
        Game::try_from_fen("8/8/8/8/8/8/8/7x w - - 0 1").err(),
        Some(FenError::InvalidPiece { char: 'x' })
    );
    assert_eq!(
        Game::try_from_fen("8/8/8/8/8/8/8/8 x - - 0 1").err(),
        Some(FenError::InvalidSideToMove {
            found: "x".to_string()
        })
    );
    assert_eq!(
        Game::try_from_fen("8/8/8/8/8/8/8/8 w Z - 0 1").err(),
        Some(FenError::InvalidCastling { char: 'Z' })
    );
    assert_eq!(
        Game::try_from_fen("8/8/8/8/8/8/8/8 w - z9 0 1").err(),
        Some(FenError::InvalidEnPassant {
            found: "z9".to_string()
        })
    );
}

#[test]
fn castling_field_controls_castling() {
    let mut with_rights = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let mut without = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1");
    assert_eq!(with_rights.legal_moves_from(sq("e1")).len(), 7);
    assert_eq!(without.legal_moves_from(sq("e1")).len(), 5);
    assert_eq!(without.to_fen(), "r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1");
}

#[test]
fn hash_tracks_position_not_history() {
    let mut a = Game::new();
    let mut b = Game::new();
    for text in ["g1f3", "g8f6", "b1c3"] {
        a.try_move_text(text).expect("legal");
    }
    for text in ["b1c3", "g8f6", "g1f3"] {
        b.try_move_text(text).expect("legal");
    }
    assert_eq!(a.hash(), b.hash());
    assert_ne!(a.hash(), Game::new().hash());
    assert_ne!(a.history(), b.history());
}

#[test]
fn game_over_blocks_further_moves() {
    let mut game = Game::new();
    for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        game.try_move_text(text).expect("legal");
    }
    assert_eq!(
        game.status(),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    let fen = game.to_fen();
    game.move_piece(sq("a2"), sq("a3"), None);
    assert_eq!(game.to_fen(), fen);

    game.new_game();
    assert_eq!(game.try_move_text("a2a3"), Ok(()));
}
