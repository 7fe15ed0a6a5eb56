//! Heart pickups: the first living fighter touching a heart consumes it.

use hecs::{Entity, World};
use tracing::debug;

use crownfall_core::components::{FighterInfo, Health, HeartPickup};
use crownfall_core::config::MatchConfig;
use crownfall_core::events::MatchEvent;
use crownfall_core::types::Position;

pub fn run(
    world: &mut World,
    roster: &[Entity],
    config: &MatchConfig,
    events: &mut Vec<MatchEvent>,
) {
    let reach = config.fighter_margin();
    let hearts: Vec<(Entity, Position, HeartPickup)> = world
        .query::<(&HeartPickup, &Position)>()
        .iter()
        .filter(|(_, (heart, _))| heart.active)
        .map(|(e, (heart, pos))| (e, *pos, *heart))
        .collect();

    for (heart_entity, heart_pos, heart) in hearts {
        let taker = roster.iter().copied().find(|&e| {
            let Ok(mut q) = world.query_one::<(&FighterInfo, &Position)>(e) else {
                return false;
            };
            match q.get() {
                Some((info, pos)) => !info.dead && pos.range_to(&heart_pos) < heart.radius + reach,
                None => false,
            }
        });
        let Some(taker) = taker else {
            continue;
        };

        if let Ok((info, health)) = world.query_one_mut::<(&FighterInfo, &mut Health)>(taker) {
            health.current = (health.current + heart.heal).min(health.max);
            debug!(fighter_id = info.id, health = health.current, "heart collected");
            events.push(MatchEvent::HeartCollected {
                fighter_id: info.id,
                health: health.current,
            });
        }
        if let Ok(mut pickup) = world.get::<&mut HeartPickup>(heart_entity) {
            pickup.active = false;
        }
    }
}
