//! AI system: gathers context from the world, runs the policy, applies it.
//!
//! Fighters act in roster order and each one sees the world as left by the
//! fighters before it, so a kill earlier in the pass removes that target for
//! everyone after.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use crownfall_ai::policy::{evaluate, AiContext, TargetCandidate};
use crownfall_ai::profiles::get_profile;
use crownfall_core::components::{AiBrain, FighterInfo, Health};
use crownfall_core::config::MatchConfig;
use crownfall_core::events::MatchEvent;
use crownfall_core::types::{Position, Velocity};

use super::damage::apply_damage;
use super::projectiles::spawn_projectile;

pub fn run(
    world: &mut World,
    roster: &[Entity],
    config: &MatchConfig,
    dt: f64,
    now: f64,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<MatchEvent>,
) {
    let margin = config.fighter_margin();

    for (index, &entity) in roster.iter().enumerate() {
        let Some((id, class, position, health, brain)) = world
            .query_one_mut::<(&FighterInfo, &Position, &Health, &AiBrain)>(entity)
            .ok()
            .filter(|(info, ..)| !info.dead)
            .map(|(info, pos, health, brain)| (info.id, info.class, *pos, *health, *brain))
        else {
            continue;
        };

        let candidates = living_candidates(world, roster, index);
        let ctx = AiContext {
            position,
            health: health.current,
            max_health: health.max,
            brain,
            candidates: &candidates,
            field: config.field,
            margin,
            dt,
        };
        let decision = evaluate(&ctx, &get_profile(brain.personality), rng);

        if let Some(aim) = decision.fire_at {
            spawn_projectile(world, id, class, position, aim, &config.projectile, events);
        }

        if let Some(hit) = decision.contact {
            if let Some(&victim) = roster.get(hit.target_id as usize) {
                apply_damage(world, victim, id, hit.damage, config, now, rng, events);
            }
        }

        if let Ok((brain, pos, vel)) =
            world.query_one_mut::<(&mut AiBrain, &mut Position, &mut Velocity)>(entity)
        {
            *brain = decision.brain;
            *vel = decision.velocity;
            pos.integrate(vel, dt);
            *pos = config.field.clamp(*pos, margin);
        }
    }
}

/// Living fighters other than `roster[skip]`, in id order.
fn living_candidates(world: &World, roster: &[Entity], skip: usize) -> Vec<TargetCandidate> {
    roster
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != skip)
        .filter_map(|(_, &e)| {
            let mut q = world.query_one::<(&FighterInfo, &Position)>(e).ok()?;
            let (info, pos) = q.get()?;
            (!info.dead).then(|| TargetCandidate {
                id: info.id,
                kind: info.kind,
                position: *pos,
            })
        })
        .collect()
}
