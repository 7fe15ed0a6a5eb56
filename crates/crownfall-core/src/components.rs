//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{AiPersonality, FighterClass, FighterKind};

/// Identity and match status of a fighter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterInfo {
    /// Match-local id, assigned in spawn order starting at 0 (the player).
    pub id: u32,
    pub class: FighterClass,
    pub kind: FighterKind,
    /// Eliminated with no lives left. Dead fighters stay in the world as markers.
    pub dead: bool,
    /// Set on the sole survivor when the match ends.
    pub has_crown: bool,
}

/// Bounded hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

/// Extra chances before elimination. Fighters without this component have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lives {
    pub remaining: u32,
}

/// Timestamps gating passive regeneration (simulated seconds).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RegenClock {
    pub last_hit_secs: f64,
    pub last_regen_secs: f64,
}

/// Current scalar speed, used by accelerated movement.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Locomotion {
    pub speed: f64,
}

/// Per-fighter AI memory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiBrain {
    pub personality: AiPersonality,
    /// Fighter id currently pursued.
    pub target: Option<u32>,
    /// Seconds until the next random retarget.
    pub retarget_timer_secs: f64,
    /// Seconds until the next shot. `None` until the first cooldown is rolled.
    pub shoot_cooldown_secs: Option<f64>,
    /// Seconds until the next contact strike is allowed.
    pub contact_cooldown_secs: f64,
    /// +1.0 or -1.0: which side to circle when strafing.
    pub strafe_sign: f64,
}

impl Default for AiBrain {
    fn default() -> Self {
        Self {
            personality: AiPersonality::default(),
            target: None,
            retarget_timer_secs: 0.0,
            shoot_cooldown_secs: None,
            contact_cooldown_secs: 0.0,
            strafe_sign: 1.0,
        }
    }
}

/// A fired projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Id of the firing fighter. Never damaged by this projectile.
    pub owner: u32,
    pub owner_class: FighterClass,
    pub damage: u32,
    /// Cleared on impact or exit; the cleanup pass despawns inactive projectiles.
    pub active: bool,
}

/// Static circular blocker. Stops projectiles only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub radius: f64,
}

/// Health pickup consumed by the first fighter that touches it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HeartPickup {
    pub radius: f64,
    pub heal: u32,
    pub active: bool,
}
