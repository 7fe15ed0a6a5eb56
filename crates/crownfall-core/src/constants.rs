//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind `MatchConfig`; presets override a subset.

// --- Field ---

/// Arena width in pixels.
pub const FIELD_WIDTH: f64 = 1024.0;

/// Arena height in pixels.
pub const FIELD_HEIGHT: f64 = 768.0;

/// Fighter sprite edge length. Fighters are clamped to the field minus half of this.
pub const FIGHTER_SIZE: f64 = 32.0;

// --- Frame scheduling ---

/// Nominal frame rate of the host scheduler (Hz).
pub const FRAME_RATE: u32 = 60;

/// Nominal seconds per frame.
pub const FRAME_DT: f64 = 1.0 / FRAME_RATE as f64;

/// Largest delta a single frame may apply (seconds).
pub const MAX_FRAME_DT: f64 = 0.25;

// --- Roster ---

/// Number of AI opponents spawned per match.
pub const AI_FIGHTER_COUNT: usize = 5;

/// Default maximum health for every fighter.
pub const DEFAULT_MAX_HEALTH: u32 = 10;

/// Extra lives granted to the player in the lives-enabled preset.
pub const ARENA_PLAYER_LIVES: u32 = 10;

// --- Player movement ---

/// Fixed per-axis speed for immediate movement.
pub const PLAYER_SPEED: f64 = 150.0;

/// Acceleration toward max speed while input is held (px/s²).
pub const PLAYER_ACCELERATION: f64 = 600.0;

/// Deceleration toward zero with no input held (px/s²).
pub const PLAYER_DECELERATION: f64 = 900.0;

/// Speed cap for accelerated movement.
pub const PLAYER_MAX_SPEED: f64 = 220.0;

// --- Projectiles ---

/// Projectile speed (px/s).
pub const PROJECTILE_SPEED: f64 = 200.0;

/// Damage dealt by a single projectile hit.
pub const PROJECTILE_DAMAGE: u32 = 1;

/// Distance under which a projectile hits a fighter.
pub const PROJECTILE_HIT_RADIUS: f64 = 20.0;

/// Distance ahead of the shooter at which lives-preset projectiles appear.
pub const PROJECTILE_SPAWN_OFFSET: f64 = 25.0;

// --- AI ---

/// Movement speed of AI fighters.
pub const AI_SPEED: f64 = 100.0;

/// Lower bound of the randomized AI shot cooldown (seconds).
pub const AI_COOLDOWN_MIN_SECS: f64 = 0.5;

/// Upper bound of the randomized AI shot cooldown (seconds).
pub const AI_COOLDOWN_MAX_SECS: f64 = 2.0;

/// Retarget timer bounds for random targeting (seconds).
pub const AI_RETARGET_MIN_SECS: f64 = 2.0;
pub const AI_RETARGET_MAX_SECS: f64 = 5.0;

/// Banded movement: advance beyond this distance.
pub const AI_PREFERRED_RANGE: f64 = 260.0;

/// Banded movement: retreat inside this distance.
pub const AI_MIN_RANGE: f64 = 120.0;

/// Contact strike reach for brawler AI.
pub const AI_CONTACT_RANGE: f64 = 40.0;

/// Seconds between contact strikes.
pub const AI_CONTACT_COOLDOWN_SECS: f64 = 0.5;

// --- Regeneration ---

/// Time after the last hit before regeneration may start (seconds).
pub const REGEN_DELAY_SECS: f64 = 3.0;

/// Minimum time between regenerated points (seconds).
pub const REGEN_INTERVAL_SECS: f64 = 1.0;

// --- Melee ---

/// Player melee reach.
pub const MELEE_RANGE: f64 = 40.0;

/// Player melee damage.
pub const MELEE_DAMAGE: u32 = 1;

// --- Spawning ---

/// Minimum distance between spawn points and the field edge.
pub const SPAWN_MARGIN: f64 = 30.0;

/// Desired minimum distance between any two spawned fighters.
pub const SPAWN_MIN_SEPARATION: f64 = 80.0;

/// Resampling budget per fighter before accepting the last candidate.
pub const SPAWN_MAX_ATTEMPTS: u32 = 20;

// --- Obstacles and pickups ---

/// Obstacles placed in the skirmish preset.
pub const OBSTACLE_COUNT: usize = 4;

/// Collision radius of an obstacle.
pub const OBSTACLE_RADIUS: f64 = 30.0;

/// Hearts placed in the skirmish preset.
pub const HEART_COUNT: usize = 3;

/// Pickup radius of a heart.
pub const HEART_RADIUS: f64 = 12.0;

/// Health restored by a heart.
pub const HEART_HEAL: u32 = 1;

// --- Misc ---

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;
