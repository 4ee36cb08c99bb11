//! Engine controller for running searches off the caller's thread.
//!
//! Front ends (a terminal driver, a GUI event loop) keep the live game in
//! an [`EngineController`] and receive a [`SearchJob`] they can poll or
//! wait on while the search runs on a dedicated thread.

mod controller;

pub use controller::{EngineController, SearchJob};
