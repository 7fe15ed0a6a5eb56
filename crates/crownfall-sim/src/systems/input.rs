//! Player input resolution: movement, shooting, melee.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use crownfall_core::commands::InputState;
use crownfall_core::components::{FighterInfo, Locomotion};
use crownfall_core::config::{MatchConfig, PlayerMovement};
use crownfall_core::events::MatchEvent;
use crownfall_core::types::{Position, Velocity};

use super::damage::{apply_damage, fighters_in_reach};
use super::projectiles::spawn_projectile;

/// Held-button state from the previous frame, used for edge triggering.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputLatch {
    pub fire_held: bool,
    pub melee_held: bool,
}

/// Resolve one frame of player input.
///
/// Shots leave from the pre-move position. A held fire key shoots once per
/// press; a pointer click always shoots. Nothing is fired when no other
/// fighter is alive.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    roster: &[Entity],
    input: &InputState,
    latch: &mut InputLatch,
    config: &MatchConfig,
    dt: f64,
    now: f64,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<MatchEvent>,
) {
    let fire_pressed = input.fire && !latch.fire_held;
    let melee_pressed = input.melee && !latch.melee_held;
    latch.fire_held = input.fire;
    latch.melee_held = input.melee;

    let Some(&player) = roster.first() else {
        return;
    };
    let Some((player_id, class, origin)) = world
        .query_one_mut::<(&FighterInfo, &Position)>(player)
        .ok()
        .filter(|(info, _)| !info.dead)
        .map(|(info, pos)| (info.id, info.class, *pos))
    else {
        return;
    };

    if fire_pressed || input.click {
        let has_target = roster.iter().any(|&e| {
            e != player
                && world
                    .get::<&FighterInfo>(e)
                    .map(|info| !info.dead)
                    .unwrap_or(false)
        });
        if has_target {
            spawn_projectile(
                world,
                player_id,
                class,
                origin,
                input.aim,
                &config.projectile,
                events,
            );
        }
    }

    if melee_pressed {
        if let Some(melee) = config.melee {
            for victim in fighters_in_reach(world, roster, player, origin, melee.range) {
                apply_damage(world, victim, player_id, melee.damage, config, now, rng, events);
            }
        }
    }

    let Ok((pos, vel, loco)) =
        world.query_one_mut::<(&mut Position, &mut Velocity, &mut Locomotion)>(player)
    else {
        return;
    };
    *vel = movement_velocity(config.player_movement, input, *vel, loco, dt);
    pos.integrate(vel, dt);
    *pos = config.field.clamp(*pos, config.fighter_margin());
}

/// Velocity for this frame under the configured movement model.
pub fn movement_velocity(
    movement: PlayerMovement,
    input: &InputState,
    current: Velocity,
    loco: &mut Locomotion,
    dt: f64,
) -> Velocity {
    let (ax, ay) = input.axes();
    match movement {
        PlayerMovement::Immediate { speed } => {
            loco.speed = speed;
            Velocity::new(ax * speed, ay * speed)
        }
        PlayerMovement::Accelerated {
            acceleration,
            deceleration,
            max_speed,
        } => {
            let len = (ax * ax + ay * ay).sqrt();
            if len > 0.0 {
                loco.speed = (loco.speed + acceleration * dt).min(max_speed);
                Velocity::new(ax / len * loco.speed, ay / len * loco.speed)
            } else {
                loco.speed = (loco.speed - deceleration * dt).max(0.0);
                let heading = current.speed();
                if heading > 0.0 {
                    Velocity::new(
                        current.x / heading * loco.speed,
                        current.y / heading * loco.speed,
                    )
                } else {
                    Velocity::default()
                }
            }
        }
    }
}
