//! Input sources: what the host feeds the engine each frame.

use crownfall_core::commands::InputState;
use crownfall_core::enums::FighterKind;
use crownfall_core::state::MatchSnapshot;

/// Produces the player's input for the next frame from the latest snapshot.
pub trait InputSource {
    fn sample(&mut self, snapshot: &MatchSnapshot) -> InputState;
}

/// Never touches the controls. The AI fighters play the match out alone.
#[derive(Debug, Default)]
pub struct IdleInput;

impl InputSource for IdleInput {
    fn sample(&mut self, _snapshot: &MatchSnapshot) -> InputState {
        InputState::default()
    }
}

/// Simple scripted player: aims at the nearest living opponent, taps fire
/// every `fire_every` frames and backs away from anyone inside `kite_range`.
#[derive(Debug)]
pub struct Autopilot {
    pub fire_every: u64,
    pub kite_range: f64,
    frame: u64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(20, 150.0)
    }
}

impl Autopilot {
    pub fn new(fire_every: u64, kite_range: f64) -> Self {
        Self {
            fire_every: fire_every.max(2),
            kite_range,
            frame: 0,
        }
    }
}

impl InputSource for Autopilot {
    fn sample(&mut self, snapshot: &MatchSnapshot) -> InputState {
        self.frame += 1;

        let Some(player) = snapshot.player().filter(|p| !p.dead) else {
            return InputState::default();
        };
        let target = snapshot
            .living_fighters()
            .filter(|f| f.kind != FighterKind::Player)
            .min_by(|a, b| {
                let da = player.position.range_to(&a.position);
                let db = player.position.range_to(&b.position);
                da.total_cmp(&db)
            });
        let Some(target) = target else {
            return InputState::default();
        };

        let mut input = InputState {
            aim: target.position,
            fire: self.frame % self.fire_every == 0,
            ..InputState::default()
        };

        if player.position.range_to(&target.position) < self.kite_range {
            input.left = target.position.x > player.position.x;
            input.right = target.position.x < player.position.x;
            input.up = target.position.y > player.position.y;
            input.down = target.position.y < player.position.y;
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crownfall_core::enums::FighterClass;
    use crownfall_core::state::FighterView;
    use crownfall_core::types::Position;

    fn fighter(id: u32, kind: FighterKind, x: f64, y: f64, dead: bool) -> FighterView {
        FighterView {
            id,
            class: FighterClass::ROSTER[id as usize % FighterClass::ROSTER.len()],
            kind,
            position: Position::new(x, y),
            health: if dead { 0 } else { 10 },
            max_health: 10,
            lives: None,
            dead,
            has_crown: false,
        }
    }

    fn snapshot(fighters: Vec<FighterView>) -> MatchSnapshot {
        MatchSnapshot {
            fighters,
            ..MatchSnapshot::default()
        }
    }

    #[test]
    fn test_autopilot_aims_at_nearest_living() {
        let snap = snapshot(vec![
            fighter(0, FighterKind::Player, 500.0, 400.0, false),
            fighter(1, FighterKind::AiControlled, 520.0, 400.0, true),
            fighter(2, FighterKind::AiControlled, 700.0, 400.0, false),
            fighter(3, FighterKind::AiControlled, 100.0, 100.0, false),
        ]);
        let mut pilot = Autopilot::default();
        let input = pilot.sample(&snap);
        assert_eq!(input.aim, Position::new(700.0, 400.0));
        assert!(!input.left && !input.right, "target is outside kite range");
    }

    #[test]
    fn test_autopilot_taps_fire_on_cadence() {
        let snap = snapshot(vec![
            fighter(0, FighterKind::Player, 500.0, 400.0, false),
            fighter(1, FighterKind::AiControlled, 800.0, 400.0, false),
        ]);
        let mut pilot = Autopilot::new(4, 150.0);
        let presses: Vec<bool> = (0..8).map(|_| pilot.sample(&snap).fire).collect();
        assert_eq!(
            presses,
            vec![false, false, false, true, false, false, false, true]
        );
    }

    #[test]
    fn test_autopilot_kites_away() {
        let snap = snapshot(vec![
            fighter(0, FighterKind::Player, 500.0, 400.0, false),
            fighter(1, FighterKind::AiControlled, 560.0, 450.0, false),
        ]);
        let input = Autopilot::default().sample(&snap);
        assert!(input.left && input.up);
        assert!(!input.right && !input.down);
    }

    #[test]
    fn test_idle_when_player_dead() {
        let snap = snapshot(vec![
            fighter(0, FighterKind::Player, 500.0, 400.0, true),
            fighter(1, FighterKind::AiControlled, 560.0, 450.0, false),
        ]);
        assert_eq!(Autopilot::default().sample(&snap), InputState::default());
        assert_eq!(IdleInput.sample(&snap), InputState::default());
    }
}
