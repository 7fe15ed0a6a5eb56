//! Game loop thread: drives the simulation engine at 60 Hz.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via an `mpsc` channel. The latest snapshot is published into
//! shared state for polling. The thread returns the match outcome, or `None`
//! when it stopped before the match ended.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crownfall_core::commands::{InputState, PlayerCommand};
use crownfall_core::config::MatchConfig;
use crownfall_core::constants::{FRAME_DT, FRAME_RATE};
use crownfall_core::events::MatchOutcome;
use crownfall_sim::SimulationEngine;

use crate::error::AppError;
use crate::input::InputSource;
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    pub max_frames: u64,
    /// Pace against the wall clock. Otherwise frames are spaced by a virtual
    /// 1/60 s and run as fast as possible.
    pub realtime: bool,
}

/// Running game loop.
pub struct GameLoopHandle {
    pub commands: mpsc::Sender<GameLoopCommand>,
    thread: JoinHandle<Option<MatchOutcome>>,
}

impl GameLoopHandle {
    /// Wait for the loop to finish and return the match outcome.
    pub fn join(self) -> Result<Option<MatchOutcome>, AppError> {
        self.thread.join().map_err(|_| AppError::LoopPanicked)
    }
}

/// Validate `config` and spawn the game loop thread. `initial_commands` are
/// queued before the thread starts and apply on the first frame.
pub fn spawn_game_loop(
    config: MatchConfig,
    initial_commands: Vec<PlayerCommand>,
    input: Box<dyn InputSource + Send>,
    latest_snapshot: SharedSnapshot,
    options: LoopOptions,
) -> Result<GameLoopHandle, AppError> {
    let mut engine = SimulationEngine::try_new(config)?;
    engine.queue_commands(initial_commands);
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("crownfall-game-loop".into())
        .spawn(move || run_game_loop(engine, input, cmd_rx, &latest_snapshot, options))
        .map_err(AppError::SpawnLoop)?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        thread,
    })
}

/// The game loop. Runs until the match ends, the frame budget runs out,
/// a Shutdown command arrives, or the channel disconnects.
fn run_game_loop(
    mut engine: SimulationEngine,
    mut input: Box<dyn InputSource + Send>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
    options: LoopOptions,
) -> Option<MatchOutcome> {
    let started = Instant::now();
    let mut next_frame_time = started;
    let mut player_input = InputState::default();

    for frame in 0..options.max_frames {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => {
                    debug!(frame, "game loop shut down");
                    return None;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return None,
            }
        }

        // 2. Run one frame (the engine handles pause semantics internally)
        let timestamp = if options.realtime {
            started.elapsed().as_secs_f64()
        } else {
            frame as f64 * FRAME_DT
        };
        let snapshot = engine.frame(timestamp, &player_input);
        player_input = input.sample(&snapshot);
        let outcome = snapshot.outcome;

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if let Some(outcome) = outcome {
            info!(frame, elapsed_secs = engine.time().elapsed_secs, "match finished");
            return Some(outcome);
        }

        // 4. Sleep until the next frame
        if options.realtime {
            next_frame_time += FRAME_DURATION;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > FRAME_DURATION * 2 {
                // Too far behind: reset rather than catch up.
                next_frame_time = now;
            }
        }
    }

    warn!(max_frames = options.max_frames, "frame budget exhausted before a winner");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crownfall_core::enums::{FighterClass, GamePhase};

    use crate::input::{Autopilot, IdleInput};
    use crate::state::shared_snapshot;

    fn virtual_options(max_frames: u64) -> LoopOptions {
        LoopOptions {
            max_frames,
            realtime: false,
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::StartMatch {
            class: FighterClass::Knight,
        }))
        .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Pause)).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<GameLoopCommand> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::StartMatch { .. })
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_invalid_config_rejected_before_spawn() {
        let config = MatchConfig {
            player_max_health: 0,
            ..MatchConfig::classic()
        };
        let result = spawn_game_loop(
            config,
            Vec::new(),
            Box::new(IdleInput),
            shared_snapshot(),
            virtual_options(10),
        );
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_loop_stops_on_frame_budget() {
        let latest = shared_snapshot();
        let handle = spawn_game_loop(
            MatchConfig::classic(),
            vec![PlayerCommand::StartMatch {
                class: FighterClass::Wizard,
            }],
            Box::new(IdleInput),
            latest.clone(),
            virtual_options(5),
        )
        .unwrap();
        let outcome = handle.join().unwrap();
        assert!(outcome.is_none());

        let snap = latest.lock().unwrap().clone();
        let snap = snap.expect("a snapshot is published every frame");
        assert_eq!(snap.phase, GamePhase::Active);
        assert_eq!(snap.time.tick, 5, "the match starts on the first frame");
    }

    #[test]
    fn test_shutdown_stops_loop() {
        let handle = spawn_game_loop(
            MatchConfig::classic(),
            Vec::new(),
            Box::new(IdleInput),
            shared_snapshot(),
            virtual_options(u64::MAX),
        )
        .unwrap();
        handle.commands.send(GameLoopCommand::Shutdown).unwrap();
        assert_eq!(handle.join().unwrap(), None);
    }

    #[test]
    fn test_match_plays_to_completion() {
        let latest = shared_snapshot();
        let handle = spawn_game_loop(
            MatchConfig {
                ai_count: 2,
                ..MatchConfig::classic()
            },
            vec![PlayerCommand::StartMatch {
                class: FighterClass::Archer,
            }],
            Box::new(Autopilot::default()),
            latest.clone(),
            virtual_options(60 * 60 * 30),
        )
        .unwrap();

        let outcome = handle.join().unwrap().expect("match should finish");
        let snap = latest.lock().unwrap().clone();
        let snap = snap.unwrap();
        assert_eq!(snap.phase, GamePhase::MatchComplete);
        assert_eq!(snap.outcome, Some(outcome));
        if let MatchOutcome::Victory { winner_id, .. } = outcome {
            assert!(snap.fighters[winner_id as usize].has_crown);
        }
    }
}
