#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 3;

/// Search configuration, independent of any game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Plies searched before quiescence takes over (at least 1)
    pub depth: u32,
    /// Probe and store the transposition table
    pub use_transposition_table: bool,
    /// Seed for choosing among equally scored moves; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            use_transposition_table: true,
            seed: None,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        SearchConfig {
            depth: depth.max(1),
            ..Self::default()
        }
    }
}
