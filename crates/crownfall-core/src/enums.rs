//! Enumeration types used throughout the simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Fighter archetype. Purely cosmetic: every class fights with the same stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FighterClass {
    #[default]
    Wizard,
    Demon,
    Knight,
    Archer,
    Monk,
    AxeThrower,
}

impl FighterClass {
    /// The full roster in selection order.
    pub const ROSTER: [FighterClass; 6] = [
        FighterClass::Wizard,
        FighterClass::Demon,
        FighterClass::Knight,
        FighterClass::Archer,
        FighterClass::Monk,
        FighterClass::AxeThrower,
    ];

    /// Glyph drawn for projectiles fired by this class.
    pub fn projectile_glyph(self) -> &'static str {
        match self {
            FighterClass::Wizard => "✴️",
            FighterClass::Demon => "🔥",
            FighterClass::Knight => "⚔️",
            FighterClass::Archer => "🏹",
            FighterClass::Monk => "💫",
            FighterClass::AxeThrower => "🪓",
        }
    }

    /// Asset key for the class sprite.
    pub fn sprite_key(self) -> &'static str {
        match self {
            FighterClass::Wizard => "images/wizard.png",
            FighterClass::Demon => "images/demon.png",
            FighterClass::Knight => "images/knight.png",
            FighterClass::Archer => "images/archer.png",
            FighterClass::Monk => "images/monk.png",
            FighterClass::AxeThrower => "images/axe_thrower.png",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FighterClass::Wizard => "wizard",
            FighterClass::Demon => "demon",
            FighterClass::Knight => "knight",
            FighterClass::Archer => "archer",
            FighterClass::Monk => "monk",
            FighterClass::AxeThrower => "axe_thrower",
        }
    }
}

impl fmt::Display for FighterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FighterClass {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "wizard" => Ok(FighterClass::Wizard),
            "demon" => Ok(FighterClass::Demon),
            "knight" => Ok(FighterClass::Knight),
            "archer" => Ok(FighterClass::Archer),
            "monk" => Ok(FighterClass::Monk),
            "axe_thrower" | "axethrower" => Ok(FighterClass::AxeThrower),
            _ => Err(ConfigError::UnknownClass(s.to_string())),
        }
    }
}

/// Who drives a fighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FighterKind {
    Player,
    AiControlled,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No match built yet.
    #[default]
    Idle,
    Active,
    Paused,
    /// A winner (or a draw) has been decided. A restart or a new start leaves this phase.
    MatchComplete,
}

/// AI behaviour archetype. Tuning for each lives in the AI crate's profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiPersonality {
    /// Chases the nearest living fighter and fires on a random cooldown.
    #[default]
    Classic,
    /// Always hunts the player.
    Hunter,
    /// Picks random targets, keeps its distance, strafes, and turns berserk when wounded.
    Skirmisher,
    /// Rushes the nearest fighter and strikes on contact.
    Brawler,
}
