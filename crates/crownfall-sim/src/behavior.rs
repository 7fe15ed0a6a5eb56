//! Kind-specific fighter behaviour.
//!
//! Player and AI fighters share all components; the handful of rules that
//! differ between them are resolved here by `FighterKind`.

use rand::{Rng, RngCore};

use crownfall_core::config::MatchConfig;
use crownfall_core::enums::FighterKind;
use crownfall_core::types::Position;

pub trait FighterBehavior: Sync {
    fn max_health(&self, config: &MatchConfig) -> u32;

    /// Extra lives granted at spawn.
    fn lives(&self, config: &MatchConfig) -> u32;

    /// Where the fighter reappears after losing a life.
    fn respawn_point(&self, config: &MatchConfig, rng: &mut dyn RngCore) -> Position;
}

/// The human-controlled fighter. Respawns at the field centre.
pub struct PlayerBehavior;

/// AI-controlled fighters. Respawn anywhere inside the spawn margin.
pub struct AiBehavior;

impl FighterBehavior for PlayerBehavior {
    fn max_health(&self, config: &MatchConfig) -> u32 {
        config.player_max_health
    }

    fn lives(&self, config: &MatchConfig) -> u32 {
        config.player_lives
    }

    fn respawn_point(&self, config: &MatchConfig, _rng: &mut dyn RngCore) -> Position {
        config.field.center()
    }
}

impl FighterBehavior for AiBehavior {
    fn max_health(&self, config: &MatchConfig) -> u32 {
        config.ai_max_health
    }

    fn lives(&self, config: &MatchConfig) -> u32 {
        config.ai_lives
    }

    fn respawn_point(&self, config: &MatchConfig, rng: &mut dyn RngCore) -> Position {
        let margin = config.spawn.margin.max(config.fighter_margin());
        let field = &config.field;
        Position::new(
            rng.gen_range(margin..=(field.width - margin).max(margin)),
            rng.gen_range(margin..=(field.height - margin).max(margin)),
        )
    }
}

static PLAYER: PlayerBehavior = PlayerBehavior;
static AI: AiBehavior = AiBehavior;

/// Resolve the behaviour for a fighter kind.
pub fn behavior_for(kind: FighterKind) -> &'static dyn FighterBehavior {
    match kind {
        FighterKind::Player => &PLAYER,
        FighterKind::AiControlled => &AI,
    }
}
