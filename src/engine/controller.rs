//! Engine controller implementation.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::debug;
use parking_lot::Mutex;

use crate::board::{Game, Move, MoveError, Position, SearchConfig, SearchEngine, SearchResult};

/// Search thread stack size (32 MB)
const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;

/// A search running on its own thread.
pub struct SearchJob {
    /// Set by the search thread once its result is ready
    finished: Arc<AtomicBool>,
    /// Hash of the position the search started from
    position_hash: u64,
    handle: JoinHandle<SearchResult>,
}

impl SearchJob {
    /// Whether the result is ready; never blocks.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn position_hash(&self) -> u64 {
        self.position_hash
    }

    /// Block until the search completes. A panic on the search thread is
    /// resumed on the caller.
    pub fn wait(self) -> SearchResult {
        match self.handle.join() {
            Ok(result) => result,
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }
}

/// Owns the live game and hands searches to worker threads.
///
/// Searches run on a clone of the game, so the shared game stays readable
/// (and lockable) while the engine thinks.
pub struct EngineController {
    game: Arc<Mutex<Game>>,
    config: SearchConfig,
}

impl Default for EngineController {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl EngineController {
    /// Controller over a fresh game.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self::with_game(Game::new(), config)
    }

    #[must_use]
    pub fn with_game(game: Game, mut config: SearchConfig) -> Self {
        config.depth = config.depth.max(1);
        EngineController {
            game: Arc::new(Mutex::new(game)),
            config,
        }
    }

    /// Handle to the shared game.
    #[must_use]
    pub fn game(&self) -> Arc<Mutex<Game>> {
        Arc::clone(&self.game)
    }

    /// A copy of the current game.
    #[must_use]
    pub fn snapshot(&self) -> Game {
        self.game.lock().clone()
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.config.depth = depth.max(1);
    }

    /// Reset the shared game to the starting position.
    pub fn new_game(&self) {
        self.game.lock().new_game();
    }

    /// Replace the shared game.
    pub fn set_game(&self, game: Game) {
        *self.game.lock() = game;
    }

    /// Play a move on the shared game.
    pub fn try_move(
        &self,
        from: Position,
        to: Position,
        promotion: Option<char>,
    ) -> Result<(), MoveError> {
        self.game.lock().try_move(from, to, promotion)
    }

    /// Start searching the current position on a new thread.
    ///
    /// Returns an error only if the thread could not be spawned.
    pub fn start_search(&self) -> io::Result<SearchJob> {
        let mut snapshot = self.snapshot();
        let position_hash = snapshot.hash();
        let config = self.config.clone();
        let finished = Arc::new(AtomicBool::new(false));
        let finished_clone = Arc::clone(&finished);

        let handle = thread::Builder::new()
            .name("search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let mut engine = SearchEngine::new(config);
                let result = engine.analyze(&mut snapshot);
                finished_clone.store(true, Ordering::Release);
                result
            })?;

        Ok(SearchJob {
            finished,
            position_hash,
            handle,
        })
    }

    /// Search the current position and play the chosen move.
    ///
    /// Returns the move played, or `None` when there was no legal move or
    /// the shared game changed while the search ran.
    pub fn play_best_move(&self) -> io::Result<Option<Move>> {
        let job = self.start_search()?;
        let expected_hash = job.position_hash();
        let result = job.wait();

        let Some(mv) = result.best_move else {
            return Ok(None);
        };
        let mut game = self.game.lock();
        if game.hash() != expected_hash {
            debug!("position changed during search, discarding {mv}");
            return Ok(None);
        }
        match game.try_move(mv.from, mv.to, None) {
            Ok(()) => Ok(Some(mv)),
            Err(err) => {
                debug!("engine move {mv} rejected: {err}");
                Ok(None)
            }
        }
    }
}
