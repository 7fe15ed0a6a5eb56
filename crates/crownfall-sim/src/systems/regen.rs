//! Passive regeneration.
//!
//! A fighter heals one point when it has gone `delay_secs` without being hit
//! and `interval_secs` since its last heal. Any hit resets both clocks.

use hecs::World;

use crownfall_core::components::{FighterInfo, Health, RegenClock};
use crownfall_core::config::RegenTuning;
use crownfall_core::events::MatchEvent;

pub fn run(world: &mut World, tuning: &RegenTuning, now: f64, events: &mut Vec<MatchEvent>) {
    for (_entity, (info, health, clock)) in
        world.query_mut::<(&FighterInfo, &mut Health, &mut RegenClock)>()
    {
        if info.dead || health.current >= health.max {
            continue;
        }
        if now - clock.last_hit_secs > tuning.delay_secs
            && now - clock.last_regen_secs > tuning.interval_secs
        {
            health.current = (health.current + 1).min(health.max);
            clock.last_regen_secs = now;
            events.push(MatchEvent::Regenerated {
                fighter_id: info.id,
                health: health.current,
            });
        }
    }
}
