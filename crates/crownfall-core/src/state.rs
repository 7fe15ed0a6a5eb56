//! Match snapshot: the complete visible state handed to the presentation layer each frame.

use serde::{Deserialize, Serialize};

use crate::enums::{FighterClass, FighterKind, GamePhase};
use crate::events::{MatchEvent, MatchOutcome};
use crate::types::{Field, Position, SimTime};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub field: Option<Field>,
    pub fighters: Vec<FighterView>,
    pub projectiles: Vec<ProjectileView>,
    pub obstacles: Vec<ObstacleView>,
    pub hearts: Vec<HeartView>,
    pub events: Vec<MatchEvent>,
    pub outcome: Option<MatchOutcome>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterView {
    pub id: u32,
    pub class: FighterClass,
    pub kind: FighterKind,
    pub position: Position,
    pub health: u32,
    pub max_health: u32,
    pub lives: Option<u32>,
    /// Draw a death marker instead of the sprite.
    pub dead: bool,
    pub has_crown: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub owner_id: u32,
    pub glyph: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleView {
    pub position: Position,
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartView {
    pub position: Position,
    pub radius: f64,
}

impl MatchSnapshot {
    /// Fighters still in play.
    pub fn living_fighters(&self) -> impl Iterator<Item = &FighterView> {
        self.fighters.iter().filter(|f| !f.dead)
    }

    pub fn player(&self) -> Option<&FighterView> {
        self.fighters.iter().find(|f| f.kind == FighterKind::Player)
    }
}
