//! Match configuration.
//!
//! Every tunable of a match in one serde document. Defaults come from
//! `constants`; the named presets reproduce the arena variants.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::AiPersonality;
use crate::errors::ConfigError;
use crate::types::Field;

/// How directional input becomes player velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum PlayerMovement {
    /// Fixed speed per held axis, zero otherwise.
    Immediate { speed: f64 },
    /// Ramp toward `max_speed` while input is held, brake to zero otherwise.
    /// Diagonals are normalized.
    Accelerated {
        acceleration: f64,
        deceleration: f64,
        max_speed: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub speed: f64,
    pub damage: u32,
    pub hit_radius: f64,
    /// Distance ahead of the shooter where the projectile appears.
    pub spawn_offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegenTuning {
    pub delay_secs: f64,
    pub interval_secs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeleeTuning {
    pub range: f64,
    pub damage: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleTuning {
    pub count: usize,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartTuning {
    pub count: usize,
    pub radius: f64,
    pub heal: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    pub margin: f64,
    /// Best-effort minimum distance between fighters.
    pub min_separation: f64,
    pub max_attempts: u32,
    /// Never hand an AI fighter the player's class.
    pub exclude_player_class: bool,
    pub shuffle_roster: bool,
}

/// Complete configuration for one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// RNG seed. Same seed and inputs = same match.
    pub seed: u64,
    pub field: Field,
    pub fighter_size: f64,
    pub ai_count: usize,
    pub player_max_health: u32,
    pub ai_max_health: u32,
    pub player_lives: u32,
    pub ai_lives: u32,
    pub player_movement: PlayerMovement,
    pub projectile: ProjectileTuning,
    pub regen: Option<RegenTuning>,
    pub melee: Option<MeleeTuning>,
    pub obstacles: ObstacleTuning,
    pub hearts: HeartTuning,
    pub spawn: SpawnTuning,
    /// Cycled across AI fighters in spawn order.
    pub ai_personalities: Vec<AiPersonality>,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: PROJECTILE_SPEED,
            damage: PROJECTILE_DAMAGE,
            hit_radius: PROJECTILE_HIT_RADIUS,
            spawn_offset: 0.0,
        }
    }
}

impl Default for RegenTuning {
    fn default() -> Self {
        Self {
            delay_secs: REGEN_DELAY_SECS,
            interval_secs: REGEN_INTERVAL_SECS,
        }
    }
}

impl Default for MeleeTuning {
    fn default() -> Self {
        Self {
            range: MELEE_RANGE,
            damage: MELEE_DAMAGE,
        }
    }
}

impl Default for ObstacleTuning {
    fn default() -> Self {
        Self {
            count: 0,
            radius: OBSTACLE_RADIUS,
        }
    }
}

impl Default for HeartTuning {
    fn default() -> Self {
        Self {
            count: 0,
            radius: HEART_RADIUS,
            heal: HEART_HEAL,
        }
    }
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            margin: SPAWN_MARGIN,
            min_separation: SPAWN_MIN_SEPARATION,
            max_attempts: SPAWN_MAX_ATTEMPTS,
            exclude_player_class: false,
            shuffle_roster: false,
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl MatchConfig {
    /// Canvas arena: nearest-target AI, no regen, no lives, no obstacles.
    pub fn classic() -> Self {
        Self {
            seed: DEFAULT_SEED,
            field: Field::default(),
            fighter_size: FIGHTER_SIZE,
            ai_count: AI_FIGHTER_COUNT,
            player_max_health: DEFAULT_MAX_HEALTH,
            ai_max_health: DEFAULT_MAX_HEALTH,
            player_lives: 0,
            ai_lives: 0,
            player_movement: PlayerMovement::Immediate {
                speed: PLAYER_SPEED,
            },
            projectile: ProjectileTuning::default(),
            regen: None,
            melee: None,
            obstacles: ObstacleTuning::default(),
            hearts: HeartTuning::default(),
            spawn: SpawnTuning::default(),
            ai_personalities: vec![AiPersonality::Classic],
        }
    }

    /// Lives and regeneration: the player respawns at the centre, everyone
    /// heals after staying out of combat, projectiles are faster and spawn
    /// ahead of the shooter, and a melee strike is available.
    pub fn arena() -> Self {
        Self {
            player_lives: ARENA_PLAYER_LIVES,
            player_movement: PlayerMovement::Immediate { speed: 160.0 },
            projectile: ProjectileTuning {
                speed: 300.0,
                spawn_offset: PROJECTILE_SPAWN_OFFSET,
                ..ProjectileTuning::default()
            },
            regen: Some(RegenTuning::default()),
            melee: Some(MeleeTuning::default()),
            spawn: SpawnTuning {
                margin: 50.0,
                ..SpawnTuning::default()
            },
            ai_personalities: vec![AiPersonality::Classic, AiPersonality::Brawler],
            ..Self::classic()
        }
    }

    /// Obstacles, hearts, and evasive AI with accelerated player movement.
    pub fn skirmish() -> Self {
        Self {
            player_lives: 2,
            player_movement: PlayerMovement::Accelerated {
                acceleration: PLAYER_ACCELERATION,
                deceleration: PLAYER_DECELERATION,
                max_speed: PLAYER_MAX_SPEED,
            },
            regen: Some(RegenTuning::default()),
            obstacles: ObstacleTuning {
                count: OBSTACLE_COUNT,
                ..ObstacleTuning::default()
            },
            hearts: HeartTuning {
                count: HEART_COUNT,
                ..HeartTuning::default()
            },
            spawn: SpawnTuning {
                exclude_player_class: true,
                shuffle_roster: true,
                ..SpawnTuning::default()
            },
            ai_personalities: vec![
                AiPersonality::Skirmisher,
                AiPersonality::Skirmisher,
                AiPersonality::Hunter,
            ],
            ..Self::classic()
        }
    }

    /// Look up a preset by name.
    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::classic()),
            "arena" => Ok(Self::arena()),
            "skirmish" => Ok(Self::skirmish()),
            other => Err(ConfigError::invalid(
                "preset",
                format!("unknown preset '{other}'"),
            )),
        }
    }

    /// Parse a JSON document (missing fields fall back to defaults) and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Half the fighter sprite: fighters are clamped this far from every edge.
    pub fn fighter_margin(&self) -> f64 {
        self.fighter_size / 2.0
    }

    /// Check every value is inside the range the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field.width > 0.0 && self.field.height > 0.0) {
            return Err(ConfigError::invalid("field", "width and height must be positive"));
        }
        if !(self.fighter_size >= 0.0)
            || self.fighter_size >= self.field.width
            || self.fighter_size >= self.field.height
        {
            return Err(ConfigError::invalid(
                "fighter_size",
                "must be non-negative and smaller than the field",
            ));
        }
        if self.player_max_health == 0 {
            return Err(ConfigError::invalid("player_max_health", "must be at least 1"));
        }
        if self.ai_max_health == 0 {
            return Err(ConfigError::invalid("ai_max_health", "must be at least 1"));
        }
        match self.player_movement {
            PlayerMovement::Immediate { speed } => {
                if !(speed > 0.0) {
                    return Err(ConfigError::invalid("player_movement.speed", "must be positive"));
                }
            }
            PlayerMovement::Accelerated {
                acceleration,
                deceleration,
                max_speed,
            } => {
                if !(acceleration > 0.0 && deceleration > 0.0 && max_speed > 0.0) {
                    return Err(ConfigError::invalid(
                        "player_movement",
                        "acceleration, deceleration and max_speed must be positive",
                    ));
                }
            }
        }
        if !(self.projectile.speed > 0.0) {
            return Err(ConfigError::invalid("projectile.speed", "must be positive"));
        }
        if !(self.projectile.hit_radius > 0.0) {
            return Err(ConfigError::invalid("projectile.hit_radius", "must be positive"));
        }
        if !(self.projectile.spawn_offset >= 0.0) {
            return Err(ConfigError::invalid("projectile.spawn_offset", "must be non-negative"));
        }
        if let Some(regen) = &self.regen {
            if !(regen.delay_secs >= 0.0 && regen.interval_secs >= 0.0) {
                return Err(ConfigError::invalid("regen", "delays must be non-negative"));
            }
        }
        if let Some(melee) = &self.melee {
            if !(melee.range > 0.0) {
                return Err(ConfigError::invalid("melee.range", "must be positive"));
            }
        }
        if self.obstacles.count > 0 && !(self.obstacles.radius > 0.0) {
            return Err(ConfigError::invalid("obstacles.radius", "must be positive"));
        }
        if self.hearts.count > 0 {
            if !(self.hearts.radius > 0.0) {
                return Err(ConfigError::invalid("hearts.radius", "must be positive"));
            }
            if self.hearts.heal == 0 {
                return Err(ConfigError::invalid("hearts.heal", "must be at least 1"));
            }
        }
        if !(self.spawn.margin >= 0.0)
            || self.spawn.margin * 2.0 >= self.field.width
            || self.spawn.margin * 2.0 >= self.field.height
        {
            return Err(ConfigError::invalid(
                "spawn.margin",
                "must be non-negative and leave room inside the field",
            ));
        }
        if !(self.spawn.min_separation >= 0.0) {
            return Err(ConfigError::invalid("spawn.min_separation", "must be non-negative"));
        }
        if self.spawn.max_attempts == 0 {
            return Err(ConfigError::invalid("spawn.max_attempts", "must be at least 1"));
        }
        if self.ai_count > 0 && self.ai_personalities.is_empty() {
            return Err(ConfigError::invalid(
                "ai_personalities",
                "at least one personality is required when AI fighters are spawned",
            ));
        }
        Ok(())
    }
}
