//! Simulation engine for CROWNFALL.
//!
//! Owns the hecs ECS world, runs systems once per rendered frame,
//! and produces MatchSnapshots for the presentation layer.

pub mod behavior;
pub mod engine;
pub mod scheduler;
pub mod systems;
pub mod world_setup;

pub use crownfall_core as core;
pub use engine::SimulationEngine;
