//! Fighter AI for CROWNFALL.
//!
//! Implements target selection, range-banded steering, fire gating and the
//! berserk difficulty curve as pure functions over plain data.

pub mod policy;
pub mod profiles;
pub mod steering;

pub use crownfall_core as core;
