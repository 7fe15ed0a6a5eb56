//! ECS systems that operate on the match world each frame.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They do not own state; everything lives in components or is passed in.

pub mod ai;
pub mod cleanup;
pub mod damage;
pub mod input;
pub mod pickups;
pub mod projectiles;
pub mod regen;
pub mod snapshot;
pub mod victory;
