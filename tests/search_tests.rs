//! Search tests to verify the engine finds correct moves in various positions.

use chess_rules_ai::board::{Evaluator, MaterialEvaluator, MATE_SCORE};
use chess_rules_ai::{Color, Game, SearchConfig, SearchEngine};

fn engine(depth: u32) -> SearchEngine {
    SearchEngine::new(SearchConfig {
        seed: Some(1),
        ..SearchConfig::with_depth(depth)
    })
}

/// Test that the engine finds a simple mate in 1
#[test]
fn finds_mate_in_one_back_rank() {
    // White to move, Qe8# is mate
    let mut game = Game::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
    let best = engine(3).find_best_move(&mut game);
    let mv = best.expect("Should find a move");
    assert_eq!(mv.to_string(), "e1-e8", "Should find Qe8# (back rank mate)");
}

/// Test that the engine finds a simple mate in 1 with queen
#[test]
fn finds_mate_in_one_queen() {
    // White to move, Qxf7# is mate
    let mut game =
        Game::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4");
    let mv = engine(2).find_best_move(&mut game).expect("Should find a move");
    assert_eq!(mv.to_string(), "h5-f7", "Should find Qxf7# (scholar's mate)");

    game.move_piece(mv.from, mv.to, None);
    assert!(game.is_checkmate(Color::Black));
}

/// Test that the engine sees a mate in two through quiescence
#[test]
fn finds_forced_mate_in_two() {
    // Rook ladder: Ra7 (or Rb7) then mate on the back rank
    let mut game = Game::from_fen("7k/8/8/8/8/8/R7/1R4K1 w - - 0 1");
    let result = engine(3).analyze(&mut game);
    assert_eq!(result.score, MATE_SCORE);
    let mv = result.best_move.expect("Should find a move");
    assert!(
        ["a2-a7", "b1-b7"].contains(&mv.to_string().as_str()),
        "unexpected move {mv}"
    );
}

/// Test that the engine avoids giving away material
#[test]
fn avoids_hanging_queen() {
    // White to move, should not hang the queen
    let mut game =
        Game::from_fen("r1bqkbnr/pppppppp/2n5/8/4P3/5Q2/PPPP1PPP/RNB1KBNR w KQkq - 0 3");
    let mv = engine(2).find_best_move(&mut game).expect("Should find a move");
    // Qxf7+ wins a pawn and loses the queen to Kxf7
    assert_ne!(mv.to_string(), "f3-f7", "Should not give the queen for a pawn");
}

/// Test that search handles single legal move positions
#[test]
fn single_legal_move() {
    // White king on a1 must take the rook on a2
    let mut game = Game::from_fen("7k/8/8/8/8/8/r7/K1r5 w - - 0 1");
    assert_eq!(game.all_legal_moves().len(), 1);
    let mv = engine(3).find_best_move(&mut game).expect("Should find a move");
    assert_eq!(mv.to_string(), "a1-a2", "Only legal move should be Kxa2");
}

/// Test that search returns None for checkmate position
#[test]
fn no_move_in_checkmate() {
    // White is checkmated
    let mut game =
        Game::from_fen("rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1");
    assert!(game.is_checkmate(Color::White), "Position should be checkmate");
    assert!(engine(3).find_best_move(&mut game).is_none());
}

/// Test that stalemate is correctly identified
#[test]
fn identifies_stalemate() {
    // Black king on a8, white queen on b6, white king on c6
    let mut game = Game::from_fen("k7/8/1QK5/8/8/8/8/8 b - - 0 1");
    assert!(game.is_stalemate(Color::Black), "Position should be stalemate");
    assert!(!game.is_checkmate(Color::Black), "Position should not be checkmate");
    assert!(engine(2).find_best_move(&mut game).is_none());
}

/// Test evaluation is symmetric
#[test]
fn evaluation_symmetry() {
    let game = Game::new();
    assert_eq!(MaterialEvaluator::default().evaluate(&game), 0.0);
}

/// Test that positions with material advantage evaluate correctly
#[test]
fn evaluation_material_advantage() {
    let eval = MaterialEvaluator::default();
    // White up a queen
    let white_up = Game::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    // Black up a queen
    let black_up = Game::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq - 0 1");

    assert_eq!(eval.evaluate(&white_up), 90.0);
    assert_eq!(eval.evaluate(&black_up), -90.0);
}

/// Test that a default-depth search from the start completes
#[test]
fn search_completes_at_default_depth() {
    use std::time::Instant;

    let mut game = Game::new();
    let start = Instant::now();
    let best = SearchEngine::default().find_best_move(&mut game);
    let elapsed = start.elapsed();

    let mv = best.expect("Should find a move at the default depth");
    assert!(game.all_legal_moves().contains(&mv));
    assert!(elapsed.as_secs() < 60, "Search took too long: {elapsed:?}");
}

/// Both sides searching alternately keep producing legal moves
#[test]
fn engine_plays_both_sides() {
    let mut game = Game::new();
    let mut engine = engine(2);
    for _ in 0..8 {
        let Some(mv) = engine.find_best_move(&mut game) else {
            break;
        };
        assert!(game.try_move(mv.from, mv.to, None).is_ok(), "{mv} was refused");
    }
    assert!(game.history().len() == 8 || game.is_game_over());
}
