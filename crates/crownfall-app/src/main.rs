use std::process::ExitCode;

use tracing::{debug, error, info};

use crownfall_app::config::AppConfig;
use crownfall_app::error::AppError;
use crownfall_app::game_loop::{spawn_game_loop, LoopOptions};
use crownfall_app::input::Autopilot;
use crownfall_app::state::shared_snapshot;
use crownfall_core::commands::PlayerCommand;
use crownfall_core::events::MatchOutcome;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "crownfall failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let app = AppConfig::from_env()?;
    let config = app.match_config()?;
    info!(
        seed = config.seed,
        class = %app.class,
        preset = %app.preset,
        ai_count = config.ai_count,
        realtime = app.realtime,
        "starting match"
    );

    let latest = shared_snapshot();
    let handle = spawn_game_loop(
        config,
        vec![PlayerCommand::StartMatch { class: app.class }],
        Box::new(Autopilot::default()),
        latest.clone(),
        LoopOptions {
            max_frames: app.max_frames,
            realtime: app.realtime,
        },
    )?;
    match handle.join()? {
        Some(MatchOutcome::Victory {
            winner_id,
            winner_class,
            player_won,
        }) => {
            if player_won {
                info!(%winner_class, "you are crowned");
            } else {
                info!(winner_id, %winner_class, "defeated: an opponent took the crown");
            }
        }
        Some(MatchOutcome::Draw) => info!("the last fighters fell together: no crown"),
        None => info!("match stopped without a result"),
    }

    if let Ok(lock) = latest.lock() {
        if let Some(snap) = lock.as_ref() {
            info!(
                frames = snap.time.tick,
                elapsed_secs = snap.time.elapsed_secs,
                survivors = snap.living_fighters().count(),
                "final state"
            );
            if let Ok(json) = serde_json::to_string(snap) {
                debug!(snapshot = %json, "final snapshot");
            }
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}
