//! Damage application and life loss.
//!
//! Every source of harm (projectiles, melee, AI contact strikes) funnels
//! through `apply_damage`, so the health bounds and elimination rules hold
//! regardless of who dealt the blow.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crownfall_core::components::{FighterInfo, Health, Lives, RegenClock};
use crownfall_core::config::MatchConfig;
use crownfall_core::events::MatchEvent;
use crownfall_core::types::{Position, Velocity};

use crate::behavior::behavior_for;

/// What a single call to `apply_damage` did to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Target was already dead, missing, or the blow dealt nothing.
    Ignored,
    /// Health dropped but stayed above zero.
    Wounded,
    /// Health hit zero and a life was spent; the fighter respawned at full health.
    LifeLost,
    /// Health hit zero with no lives left; the fighter is now dead.
    Eliminated,
}

/// Apply `amount` damage from `attacker_id` to `target`.
///
/// Health floors at zero. Both regen timestamps are reset to `now`. At zero
/// health the fighter either spends a life (full heal, respawn through its
/// `FighterBehavior`) or is marked dead for the rest of the match.
#[allow(clippy::too_many_arguments)]
pub fn apply_damage(
    world: &mut World,
    target: Entity,
    attacker_id: u32,
    amount: u32,
    config: &MatchConfig,
    now: f64,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<MatchEvent>,
) -> DamageOutcome {
    if amount == 0 {
        return DamageOutcome::Ignored;
    }

    let Ok((info, health, clock, pos, vel, lives)) = world.query_one_mut::<(
        &mut FighterInfo,
        &mut Health,
        &mut RegenClock,
        &mut Position,
        &mut Velocity,
        Option<&mut Lives>,
    )>(target) else {
        return DamageOutcome::Ignored;
    };

    if info.dead {
        return DamageOutcome::Ignored;
    }

    health.current = health.current.saturating_sub(amount);
    clock.last_hit_secs = now;
    clock.last_regen_secs = now;

    debug!(
        victim_id = info.id,
        attacker_id,
        health = health.current,
        "fighter hit"
    );
    events.push(MatchEvent::FighterHit {
        victim_id: info.id,
        attacker_id,
        health: health.current,
    });

    if health.current > 0 {
        return DamageOutcome::Wounded;
    }

    match lives {
        Some(lives) if lives.remaining > 0 => {
            lives.remaining -= 1;
            health.current = health.max;
            *pos = behavior_for(info.kind).respawn_point(config, rng);
            *vel = Velocity::default();

            info!(
                fighter_id = info.id,
                lives_remaining = lives.remaining,
                "life lost"
            );
            events.push(MatchEvent::LifeLost {
                fighter_id: info.id,
                lives_remaining: lives.remaining,
            });
            DamageOutcome::LifeLost
        }
        _ => {
            info.dead = true;
            *vel = Velocity::default();

            info!(fighter_id = info.id, attacker_id, "fighter eliminated");
            events.push(MatchEvent::FighterEliminated {
                fighter_id: info.id,
                attacker_id,
            });
            DamageOutcome::Eliminated
        }
    }
}

/// Living fighters other than `attacker` within `range` of `origin`,
/// in roster order.
pub fn fighters_in_reach(
    world: &World,
    roster: &[Entity],
    attacker: Entity,
    origin: Position,
    range: f64,
) -> Vec<Entity> {
    roster
        .iter()
        .copied()
        .filter(|&e| e != attacker)
        .filter(|&e| {
            let Ok(mut q) = world.query_one::<(&FighterInfo, &Position)>(e) else {
                return false;
            };
            match q.get() {
                Some((info, pos)) => !info.dead && origin.range_to(pos) < range,
                None => false,
            }
        })
        .collect()
}
