//! Snapshot builder: reads the world and produces a `MatchSnapshot`.

use hecs::{Entity, World};

use crownfall_core::components::{FighterInfo, Health, HeartPickup, Lives, Obstacle, Projectile};
use crownfall_core::enums::GamePhase;
use crownfall_core::events::{MatchEvent, MatchOutcome};
use crownfall_core::state::{FighterView, HeartView, MatchSnapshot, ObstacleView, ProjectileView};
use crownfall_core::types::{Field, Position, SimTime};

/// Build a complete match snapshot. Fighters are listed in id order.
pub fn build_snapshot(
    world: &World,
    roster: &[Entity],
    time: &SimTime,
    phase: GamePhase,
    field: Option<Field>,
    events: Vec<MatchEvent>,
    outcome: Option<MatchOutcome>,
) -> MatchSnapshot {
    let fighters = roster
        .iter()
        .filter_map(|&e| {
            let mut q = world
                .query_one::<(&FighterInfo, &Position, &Health, Option<&Lives>)>(e)
                .ok()?;
            let (info, pos, health, lives) = q.get()?;
            Some(FighterView {
                id: info.id,
                class: info.class,
                kind: info.kind,
                position: *pos,
                health: health.current,
                max_health: health.max,
                lives: lives.map(|l| l.remaining),
                dead: info.dead,
                has_crown: info.has_crown,
            })
        })
        .collect();

    let projectiles = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .filter(|(_, (proj, _))| proj.active)
        .map(|(_, (proj, pos))| ProjectileView {
            position: *pos,
            owner_id: proj.owner,
            glyph: proj.owner_class.projectile_glyph().to_string(),
        })
        .collect();

    let obstacles = world
        .query::<(&Obstacle, &Position)>()
        .iter()
        .map(|(_, (obs, pos))| ObstacleView {
            position: *pos,
            radius: obs.radius,
        })
        .collect();

    let hearts = world
        .query::<(&HeartPickup, &Position)>()
        .iter()
        .filter(|(_, (heart, _))| heart.active)
        .map(|(_, (heart, pos))| HeartView {
            position: *pos,
            radius: heart.radius,
        })
        .collect();

    MatchSnapshot {
        time: *time,
        phase,
        field,
        fighters,
        projectiles,
        obstacles,
        hearts,
        events,
        outcome,
    }
}
