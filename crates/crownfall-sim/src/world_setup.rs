//! Entity spawn factories for building a match.
//!
//! Creates the player, AI opponents, obstacles and heart pickups with
//! appropriate component bundles. Building a match is a single operation
//! over an empty world and the match RNG.

use hecs::{Entity, EntityBuilder, World};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crownfall_core::components::*;
use crownfall_core::config::{MatchConfig, SpawnTuning};
use crownfall_core::enums::{AiPersonality, FighterClass, FighterKind};
use crownfall_core::types::{Field, Position, Velocity};

use crate::behavior::behavior_for;

/// Populate an empty world with a fresh match. Returns fighter entities
/// indexed by fighter id; id 0 is the player.
pub fn setup_match(
    world: &mut World,
    config: &MatchConfig,
    player_class: FighterClass,
    rng: &mut ChaCha8Rng,
) -> Vec<Entity> {
    let mut roster = Vec::with_capacity(config.ai_count + 1);
    let mut occupied = Vec::with_capacity(config.ai_count + 1);

    let player_pos = config.field.center();
    roster.push(spawn_fighter(
        world,
        config,
        0,
        player_class,
        FighterKind::Player,
        player_pos,
        None,
    ));
    occupied.push(player_pos);

    let classes = assign_classes(player_class, config.ai_count, &config.spawn, rng);
    for (i, class) in classes.into_iter().enumerate() {
        let id = i as u32 + 1;
        let pos = sample_spawn_point(
            rng,
            &config.field,
            config.spawn.margin,
            &occupied,
            config.spawn.min_separation,
            config.spawn.max_attempts,
        );
        let personality = config
            .ai_personalities
            .get(i % config.ai_personalities.len().max(1))
            .copied()
            .unwrap_or_default();
        roster.push(spawn_fighter(
            world,
            config,
            id,
            class,
            FighterKind::AiControlled,
            pos,
            Some(personality),
        ));
        occupied.push(pos);
    }

    spawn_obstacles(world, config, rng, &mut occupied);
    spawn_hearts(world, config, rng, &occupied);

    roster
}

/// Spawn a single fighter at full health.
pub fn spawn_fighter(
    world: &mut World,
    config: &MatchConfig,
    id: u32,
    class: FighterClass,
    kind: FighterKind,
    position: Position,
    personality: Option<AiPersonality>,
) -> Entity {
    let behavior = behavior_for(kind);
    let max = behavior.max_health(config);

    let mut builder = EntityBuilder::new();
    builder
        .add(FighterInfo {
            id,
            class,
            kind,
            dead: false,
            has_crown: false,
        })
        .add(position)
        .add(Velocity::default())
        .add(Health { current: max, max })
        .add(RegenClock::default())
        .add(Locomotion::default());

    let lives = behavior.lives(config);
    if lives > 0 {
        builder.add(Lives { remaining: lives });
    }
    if let Some(personality) = personality {
        builder.add(AiBrain {
            personality,
            ..AiBrain::default()
        });
    }

    world.spawn(builder.build())
}

/// Classes for `count` AI fighters.
///
/// Without exclusion the roster cycles by fighter id, so the first AI gets
/// the class after the first roster entry. With exclusion the player's
/// class is removed from the pool first.
pub fn assign_classes(
    player_class: FighterClass,
    count: usize,
    spawn: &SpawnTuning,
    rng: &mut ChaCha8Rng,
) -> Vec<FighterClass> {
    let mut pool: Vec<FighterClass> = FighterClass::ROSTER
        .iter()
        .copied()
        .filter(|c| !spawn.exclude_player_class || *c != player_class)
        .collect();
    if spawn.shuffle_roster {
        pool.shuffle(rng);
    }
    let offset = if spawn.exclude_player_class { 0 } else { 1 };
    (0..count).map(|i| pool[(i + offset) % pool.len()]).collect()
}

/// Random point inside the margin, resampled until it keeps `min_separation`
/// from every `occupied` point or attempts run out. On exhaustion the last
/// sample is used anyway.
pub fn sample_spawn_point(
    rng: &mut ChaCha8Rng,
    field: &Field,
    margin: f64,
    occupied: &[Position],
    min_separation: f64,
    max_attempts: u32,
) -> Position {
    let max_x = (field.width - margin).max(margin);
    let max_y = (field.height - margin).max(margin);

    let mut candidate = Position::default();
    for _ in 0..max_attempts.max(1) {
        candidate = Position::new(rng.gen_range(margin..=max_x), rng.gen_range(margin..=max_y));
        if occupied
            .iter()
            .all(|p| p.range_to(&candidate) >= min_separation)
        {
            return candidate;
        }
    }
    candidate
}

/// Place static obstacles away from fighters and each other.
pub fn spawn_obstacles(
    world: &mut World,
    config: &MatchConfig,
    rng: &mut ChaCha8Rng,
    occupied: &mut Vec<Position>,
) {
    let radius = config.obstacles.radius;
    let clearance = radius + config.fighter_size;
    for _ in 0..config.obstacles.count {
        let pos = sample_spawn_point(
            rng,
            &config.field,
            config.spawn.margin.max(radius),
            occupied,
            clearance,
            config.spawn.max_attempts,
        );
        world.spawn((Obstacle { radius }, pos));
        occupied.push(pos);
    }
}

/// Scatter heart pickups away from fighters and obstacles.
pub fn spawn_hearts(
    world: &mut World,
    config: &MatchConfig,
    rng: &mut ChaCha8Rng,
    occupied: &[Position],
) {
    let mut taken = occupied.to_vec();
    let clearance = config.hearts.radius + config.fighter_size;
    for _ in 0..config.hearts.count {
        let pos = sample_spawn_point(
            rng,
            &config.field,
            config.spawn.margin,
            &taken,
            clearance,
            config.spawn.max_attempts,
        );
        world.spawn((
            HeartPickup {
                radius: config.hearts.radius,
                heal: config.hearts.heal,
                active: true,
            },
            pos,
        ));
        taken.push(pos);
    }
}
