//! Per-fighter AI decision.
//!
//! `evaluate` looks at one AI fighter and the living fighters around it and
//! decides whom to chase, how to move, and whether to attack this frame.
//! No ECS dependency: the simulation gathers the context and applies the result.

use rand::Rng;

use crownfall_core::components::AiBrain;
use crownfall_core::enums::FighterKind;
use crownfall_core::types::{Field, Position, Velocity};

use crate::profiles::{AiBehaviorProfile, FireGate, TargetingMode};
use crate::steering::steer;

/// A living fighter the AI may consider as a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetCandidate {
    pub id: u32,
    pub kind: FighterKind,
    pub position: Position,
}

/// Input to the AI policy for a single fighter.
pub struct AiContext<'a> {
    pub position: Position,
    pub health: u32,
    pub max_health: u32,
    pub brain: AiBrain,
    /// Living fighters other than this one, in id order.
    pub candidates: &'a [TargetCandidate],
    pub field: Field,
    /// Distance fighters keep from the field edges.
    pub margin: f64,
    pub dt: f64,
}

/// A melee-range hit the simulation should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactHit {
    pub target_id: u32,
    pub damage: u32,
}

/// Output from the AI policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiDecision {
    pub brain: AiBrain,
    pub velocity: Velocity,
    /// Shoot a projectile toward this point.
    pub fire_at: Option<Position>,
    pub contact: Option<ContactHit>,
}

/// Fraction of health missing, 0.0 (full) to 1.0 (empty).
pub fn missing_health_fraction(health: u32, max_health: u32) -> f64 {
    if max_health == 0 {
        return 0.0;
    }
    1.0 - (health.min(max_health) as f64 / max_health as f64)
}

/// Evaluate the policy for one fighter.
pub fn evaluate<R: Rng + ?Sized>(
    ctx: &AiContext<'_>,
    profile: &AiBehaviorProfile,
    rng: &mut R,
) -> AiDecision {
    let mut brain = ctx.brain;

    let target = match select_target(ctx, profile, &mut brain, rng) {
        Some(t) => t,
        None => {
            brain.target = None;
            return AiDecision {
                brain,
                velocity: Velocity::default(),
                fire_at: None,
                contact: None,
            };
        }
    };
    brain.target = Some(target.id);

    let missing = missing_health_fraction(ctx.health, ctx.max_health);
    let (speed_factor, fire_rate_factor) = match &profile.berserk {
        Some(b) => (b.speed_factor(missing), b.fire_rate_factor(missing)),
        None => (1.0, 1.0),
    };

    let steering = steer(
        profile.movement,
        ctx.position,
        target.position,
        profile.speed * speed_factor,
        brain.strafe_sign,
        &ctx.field,
        ctx.margin,
        ctx.dt,
    );
    brain.strafe_sign = steering.strafe_sign;

    let fire_at = if should_fire(profile.fire, fire_rate_factor, &mut brain, ctx.dt, rng) {
        Some(target.position)
    } else {
        None
    };

    let contact = profile.contact.and_then(|strike| {
        brain.contact_cooldown_secs = (brain.contact_cooldown_secs - ctx.dt).max(0.0);
        let in_reach = ctx.position.range_to(&target.position) < strike.range;
        if in_reach && brain.contact_cooldown_secs <= 0.0 {
            brain.contact_cooldown_secs = strike.cooldown_secs;
            Some(ContactHit {
                target_id: target.id,
                damage: strike.damage,
            })
        } else {
            None
        }
    });

    AiDecision {
        brain,
        velocity: steering.velocity,
        fire_at,
        contact,
    }
}

/// Pick this frame's target, updating the retarget timer when relevant.
fn select_target<R: Rng + ?Sized>(
    ctx: &AiContext<'_>,
    profile: &AiBehaviorProfile,
    brain: &mut AiBrain,
    rng: &mut R,
) -> Option<TargetCandidate> {
    if ctx.candidates.is_empty() {
        return None;
    }

    match profile.targeting {
        TargetingMode::Nearest => nearest(ctx.position, ctx.candidates),
        TargetingMode::Player => ctx
            .candidates
            .iter()
            .find(|c| c.kind == FighterKind::Player)
            .copied()
            .or_else(|| nearest(ctx.position, ctx.candidates)),
        TargetingMode::RandomRetarget { min_secs, max_secs } => {
            brain.retarget_timer_secs -= ctx.dt;
            let current = brain
                .target
                .and_then(|id| ctx.candidates.iter().find(|c| c.id == id).copied());
            match current {
                Some(c) if brain.retarget_timer_secs > 0.0 => Some(c),
                _ => {
                    let pick = ctx.candidates[rng.gen_range(0..ctx.candidates.len())];
                    brain.retarget_timer_secs = roll_range(rng, min_secs, max_secs);
                    Some(pick)
                }
            }
        }
    }
}

/// Nearest candidate; ties go to the earliest in the list.
pub fn nearest(from: Position, candidates: &[TargetCandidate]) -> Option<TargetCandidate> {
    let mut best: Option<(f64, TargetCandidate)> = None;
    for c in candidates {
        let d = from.range_to(&c.position);
        if best.map_or(true, |(best_d, _)| d < best_d) {
            best = Some((d, *c));
        }
    }
    best.map(|(_, c)| c)
}

fn should_fire<R: Rng + ?Sized>(
    gate: FireGate,
    fire_rate_factor: f64,
    brain: &mut AiBrain,
    dt: f64,
    rng: &mut R,
) -> bool {
    match gate {
        FireGate::Cooldown { min_secs, max_secs } => {
            let mut remaining = match brain.shoot_cooldown_secs {
                Some(t) => t,
                None => roll_range(rng, min_secs, max_secs) / fire_rate_factor,
            };
            remaining -= dt;
            let fire = remaining <= 0.0;
            if fire {
                remaining = roll_range(rng, min_secs, max_secs) / fire_rate_factor;
            }
            brain.shoot_cooldown_secs = Some(remaining);
            fire
        }
        FireGate::Chance { per_second } => {
            let p = (per_second * fire_rate_factor * dt).clamp(0.0, 1.0);
            p > 0.0 && rng.gen_bool(p)
        }
    }
}

fn roll_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}
