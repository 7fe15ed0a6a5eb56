//! Commands and per-frame input sent from the host to the simulation.
//!
//! Commands are queued and processed at the next frame boundary.
//! Input is sampled fresh every frame.

use serde::{Deserialize, Serialize};

use crate::enums::FighterClass;
use crate::types::Position;

/// Control surface actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Build a fresh match with the selected class and begin ticking.
    StartMatch { class: FighterClass },
    Pause,
    Resume,
    /// Pause when running, resume when paused.
    TogglePause,
    /// Discard the current match and rebuild it with the last selected class.
    Restart,
}

/// Snapshot of the host's input devices for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire key currently held. Only the press edge shoots.
    pub fire: bool,
    /// Pointer clicked since the previous frame. Always shoots.
    pub click: bool,
    /// Melee key currently held. Only the press edge strikes.
    pub melee: bool,
    /// Pointer location in field coordinates.
    pub aim: Position,
}

impl InputState {
    /// Directional input as a (-1..=1, -1..=1) axis pair.
    pub fn axes(&self) -> (f64, f64) {
        let mut x = 0.0;
        let mut y = 0.0;
        if self.left {
            x -= 1.0;
        }
        if self.right {
            x += 1.0;
        }
        if self.up {
            y -= 1.0;
        }
        if self.down {
            y += 1.0;
        }
        (x, y)
    }
}
