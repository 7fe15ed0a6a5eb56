//! Cleanup system: removes spent projectiles and consumed pickups.

use hecs::{Entity, World};

use crownfall_core::components::{HeartPickup, Projectile};

/// Despawn everything flagged inactive this frame.
/// Uses a pre-allocated buffer to avoid per-frame allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, proj) in world.query_mut::<&Projectile>() {
        if !proj.active {
            despawn_buffer.push(entity);
        }
    }

    for (entity, heart) in world.query_mut::<&HeartPickup>() {
        if !heart.active {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
