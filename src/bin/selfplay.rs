use std::error::Error;
use std::time::Instant;

use clap::Parser;
use log::info;

use chess_rules_ai::board::search::DEFAULT_DEPTH;
use chess_rules_ai::engine::EngineController;
use chess_rules_ai::{Game, GameStatus, SearchConfig};

#[derive(Parser, Debug)]
#[command(name = "selfplay", about = "Let the engine play a game against itself")]
struct Args {
    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Max plies before stopping the game unfinished
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Random seed for choosing among equal moves
    #[arg(long)]
    seed: Option<u64>,

    /// Optional: start from this FEN instead of the initial position
    #[arg(long)]
    fen: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let game = match &args.fen {
        Some(fen) => Game::try_from_fen(fen)?,
        None => Game::new(),
    };
    let config = SearchConfig {
        seed: args.seed,
        ..SearchConfig::with_depth(args.depth)
    };
    let controller = EngineController::with_game(game, config);
    info!(
        "selfplay depth {} max plies {} from {}",
        controller.config().depth,
        args.max_plies,
        controller.snapshot().to_fen()
    );

    let start = Instant::now();
    let mut plies = 0;
    while plies < args.max_plies {
        if controller.play_best_move()?.is_none() {
            break;
        }
        plies += 1;
        let game = controller.snapshot();
        if let Some(last) = game.history().last() {
            println!("{plies:>3}. {last}");
        }
        if game.is_game_over() {
            break;
        }
    }

    let mut game = controller.snapshot();
    let result = match game.status() {
        GameStatus::Checkmate { winner } => format!("checkmate, {winner} wins"),
        GameStatus::Stalemate => "stalemate".to_string(),
        GameStatus::Ongoing => format!("unfinished after {plies} plies"),
    };
    println!("{}", game.history().join(" "));
    println!("result: {result}");
    println!("final position: {}", game.to_fen());
    println!("time: {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}
