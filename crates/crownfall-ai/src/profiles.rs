//! Personality-specific behavioural profiles.
//!
//! Consolidates per-personality parameters for the AI policy.

use crownfall_core::constants::*;
use crownfall_core::enums::AiPersonality;

/// How a fighter chooses whom to pursue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetingMode {
    /// Always the nearest living fighter, re-evaluated every frame.
    Nearest,
    /// Always the player; falls back to the nearest fighter once the player is gone.
    Player,
    /// A random living fighter, re-rolled when the timer runs out or the target dies.
    RandomRetarget { min_secs: f64, max_secs: f64 },
}

/// How a fighter moves relative to its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementStyle {
    /// Straight at the target.
    Direct,
    /// Advance beyond `preferred_range`, retreat inside `min_range`, strafe in between.
    Banded { preferred_range: f64, min_range: f64 },
}

/// What decides when a fighter shoots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireGate {
    /// Fire when a countdown expires, then roll a new one from the range.
    Cooldown { min_secs: f64, max_secs: f64 },
    /// Independent roll every frame with the given expected shots per second.
    Chance { per_second: f64 },
}

/// Wounded fighters fire faster and move quicker.
///
/// Both bonuses scale linearly with the missing-health fraction: at zero health
/// the fire rate is multiplied by `1 + max_fire_rate_bonus` and the speed by
/// `1 + max_speed_bonus`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Berserk {
    pub max_fire_rate_bonus: f64,
    pub max_speed_bonus: f64,
}

/// Close-range hit applied without a projectile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactStrike {
    pub range: f64,
    pub damage: u32,
    pub cooldown_secs: f64,
}

/// Behavioural profile for a personality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiBehaviorProfile {
    pub targeting: TargetingMode,
    pub movement: MovementStyle,
    /// Base movement speed (px/s).
    pub speed: f64,
    pub fire: FireGate,
    pub berserk: Option<Berserk>,
    pub contact: Option<ContactStrike>,
}

/// Get the behavioural profile for a given personality.
pub fn get_profile(personality: AiPersonality) -> AiBehaviorProfile {
    match personality {
        AiPersonality::Classic => AiBehaviorProfile {
            targeting: TargetingMode::Nearest,
            movement: MovementStyle::Direct,
            speed: AI_SPEED,
            fire: FireGate::Cooldown {
                min_secs: AI_COOLDOWN_MIN_SECS,
                max_secs: AI_COOLDOWN_MAX_SECS,
            },
            berserk: None,
            contact: None,
        },
        AiPersonality::Hunter => AiBehaviorProfile {
            targeting: TargetingMode::Player,
            movement: MovementStyle::Banded {
                preferred_range: AI_PREFERRED_RANGE * 0.75,
                min_range: AI_MIN_RANGE * 0.75,
            },
            speed: AI_SPEED * 1.1,
            fire: FireGate::Cooldown {
                min_secs: AI_COOLDOWN_MIN_SECS,
                max_secs: AI_COOLDOWN_MAX_SECS,
            },
            berserk: None,
            contact: None,
        },
        AiPersonality::Skirmisher => AiBehaviorProfile {
            targeting: TargetingMode::RandomRetarget {
                min_secs: AI_RETARGET_MIN_SECS,
                max_secs: AI_RETARGET_MAX_SECS,
            },
            movement: MovementStyle::Banded {
                preferred_range: AI_PREFERRED_RANGE,
                min_range: AI_MIN_RANGE,
            },
            speed: AI_SPEED,
            fire: FireGate::Cooldown {
                min_secs: AI_COOLDOWN_MIN_SECS * 1.5,
                max_secs: AI_COOLDOWN_MAX_SECS * 1.2,
            },
            berserk: Some(Berserk {
                max_fire_rate_bonus: 2.0,
                max_speed_bonus: 0.5,
            }),
            contact: None,
        },
        AiPersonality::Brawler => AiBehaviorProfile {
            targeting: TargetingMode::Nearest,
            movement: MovementStyle::Direct,
            speed: AI_SPEED * 0.9,
            // ~1% per frame at 60 Hz
            fire: FireGate::Chance { per_second: 0.6 },
            berserk: None,
            contact: Some(ContactStrike {
                range: AI_CONTACT_RANGE,
                damage: 1,
                cooldown_secs: AI_CONTACT_COOLDOWN_SECS,
            }),
        },
    }
}

impl Berserk {
    /// Multiplier on fire rate for the given missing-health fraction.
    pub fn fire_rate_factor(&self, missing_fraction: f64) -> f64 {
        1.0 + self.max_fire_rate_bonus * missing_fraction.clamp(0.0, 1.0)
    }

    /// Multiplier on movement speed for the given missing-health fraction.
    pub fn speed_factor(&self, missing_fraction: f64) -> f64 {
        1.0 + self.max_speed_bonus * missing_fraction.clamp(0.0, 1.0)
    }
}
