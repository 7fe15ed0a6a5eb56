//! CROWNFALL headless host.
//!
//! Wires the simulation to a frame loop thread, an input source and the
//! environment, standing in for the presentation layer.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod state;

pub use crownfall_core as core;
