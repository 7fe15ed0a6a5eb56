//! Projectile lifecycle: spawn, flight, and single-hit impact.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use crownfall_core::components::{FighterInfo, Obstacle, Projectile};
use crownfall_core::config::{MatchConfig, ProjectileTuning};
use crownfall_core::enums::FighterClass;
use crownfall_core::events::MatchEvent;
use crownfall_core::types::{Position, Velocity};

use super::damage::apply_damage;

/// Fire a projectile from `origin` toward `aim`.
///
/// The projectile appears `spawn_offset` ahead of the shooter along the aim
/// line. Aiming at the shooter's own position fires along +x.
pub fn spawn_projectile(
    world: &mut World,
    shooter_id: u32,
    shooter_class: FighterClass,
    origin: Position,
    aim: Position,
    tuning: &ProjectileTuning,
    events: &mut Vec<MatchEvent>,
) -> Entity {
    let angle = origin.angle_to(&aim);
    let velocity = Velocity::from_angle(angle, tuning.speed);
    let offset = Velocity::from_angle(angle, tuning.spawn_offset);
    let position = Position::new(origin.x + offset.x, origin.y + offset.y);

    events.push(MatchEvent::ProjectileFired { shooter_id });
    world.spawn((
        Projectile {
            owner: shooter_id,
            owner_class: shooter_class,
            damage: tuning.damage,
            active: true,
        },
        position,
        velocity,
    ))
}

/// Advance every active projectile and resolve what it touches.
///
/// In order: integrate, leave the field, stop inside an obstacle, then hit the
/// first living non-owner fighter (roster order) inside the hit radius.
/// Spent projectiles are only flagged here; cleanup removes them.
pub fn run(
    world: &mut World,
    roster: &[Entity],
    config: &MatchConfig,
    dt: f64,
    now: f64,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<MatchEvent>,
) {
    let obstacles: Vec<(Position, f64)> = world
        .query::<(&Obstacle, &Position)>()
        .iter()
        .map(|(_, (obs, pos))| (*pos, obs.radius))
        .collect();

    let mut in_flight: Vec<Entity> = Vec::new();
    for (entity, (proj, pos, vel)) in
        world.query_mut::<(&mut Projectile, &mut Position, &Velocity)>()
    {
        if !proj.active {
            continue;
        }
        pos.integrate(vel, dt);
        if !config.field.contains(pos) {
            proj.active = false;
            continue;
        }
        if obstacles.iter().any(|(o, r)| o.range_to(pos) < *r) {
            proj.active = false;
            continue;
        }
        in_flight.push(entity);
    }

    // Hits resolve one projectile at a time so a fighter killed by an earlier
    // projectile is no longer a valid target for a later one.
    for proj_entity in in_flight {
        let Some((owner, damage, pos)) = world
            .query_one_mut::<(&Projectile, &Position)>(proj_entity)
            .ok()
            .map(|(p, pos)| (p.owner, p.damage, *pos))
        else {
            continue;
        };

        let victim = roster.iter().copied().find(|&e| {
            let Ok(mut q) = world.query_one::<(&FighterInfo, &Position)>(e) else {
                return false;
            };
            match q.get() {
                Some((info, fpos)) => {
                    info.id != owner
                        && !info.dead
                        && fpos.range_to(&pos) < config.projectile.hit_radius
                }
                None => false,
            }
        });

        if let Some(victim) = victim {
            apply_damage(world, victim, owner, damage, config, now, rng, events);
            if let Ok(mut proj) = world.get::<&mut Projectile>(proj_entity) {
                proj.active = false;
            }
        }
    }
}
