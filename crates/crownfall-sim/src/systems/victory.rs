//! Win-condition check, run after every other gameplay system.

use hecs::World;
use tracing::info;

use crownfall_core::components::FighterInfo;
use crownfall_core::enums::FighterKind;
use crownfall_core::events::{MatchEvent, MatchOutcome};

/// Decide whether the match is over.
///
/// One fighter left: it takes the crown. None left (the last fighters fell in
/// the same frame): a draw, nobody is crowned. Returns `None` while two or
/// more fighters are still in play.
pub fn run(world: &mut World, events: &mut Vec<MatchEvent>) -> Option<MatchOutcome> {
    let mut survivors = world
        .query_mut::<&mut FighterInfo>()
        .into_iter()
        .map(|(_, info)| info)
        .filter(|info| !info.dead);

    let first = survivors.next();
    if survivors.next().is_some() {
        return None;
    }

    let outcome = match first {
        Some(winner) => {
            winner.has_crown = true;
            MatchOutcome::Victory {
                winner_id: winner.id,
                winner_class: winner.class,
                player_won: winner.kind == FighterKind::Player,
            }
        }
        None => MatchOutcome::Draw,
    };

    match outcome {
        MatchOutcome::Victory {
            winner_id,
            winner_class,
            player_won,
        } => info!(winner_id, %winner_class, player_won, "match won"),
        MatchOutcome::Draw => info!("match drawn"),
    }
    events.push(MatchEvent::MatchEnded { outcome });
    Some(outcome)
}
