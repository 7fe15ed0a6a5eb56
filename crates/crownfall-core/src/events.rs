//! Events emitted by the simulation for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::enums::FighterClass;

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchOutcome {
    /// Exactly one fighter survived and wears the crown.
    Victory {
        winner_id: u32,
        winner_class: FighterClass,
        player_won: bool,
    },
    /// The last fighters eliminated each other in the same frame.
    Draw,
}

/// Per-frame gameplay events, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchEvent {
    ProjectileFired { shooter_id: u32 },
    FighterHit {
        victim_id: u32,
        attacker_id: u32,
        health: u32,
    },
    LifeLost { fighter_id: u32, lives_remaining: u32 },
    FighterEliminated { fighter_id: u32, attacker_id: u32 },
    HeartCollected { fighter_id: u32, health: u32 },
    Regenerated { fighter_id: u32, health: u32 },
    MatchEnded { outcome: MatchOutcome },
}
