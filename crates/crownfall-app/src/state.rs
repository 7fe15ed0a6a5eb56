//! Types shared between the host thread and the game loop thread.

use std::sync::{Arc, Mutex};

use crownfall_core::commands::PlayerCommand;
use crownfall_core::state::MatchSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A control command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Stop the game loop thread.
    Shutdown,
}

/// Latest snapshot, updated by the game loop after every frame.
pub type SharedSnapshot = Arc<Mutex<Option<MatchSnapshot>>>;

pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}
