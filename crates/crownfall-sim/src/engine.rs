//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and every piece of match state,
//! processes control commands, runs all systems once per frame, and produces
//! `MatchSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crownfall_core::commands::{InputState, PlayerCommand};
use crownfall_core::config::MatchConfig;
use crownfall_core::enums::{FighterClass, GamePhase};
use crownfall_core::errors::ConfigError;
use crownfall_core::events::{MatchEvent, MatchOutcome};
use crownfall_core::state::MatchSnapshot;
use crownfall_core::types::SimTime;

use crate::scheduler::FrameClock;
use crate::systems;
use crate::systems::input::InputLatch;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all match state.
pub struct SimulationEngine {
    world: World,
    config: MatchConfig,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    clock: FrameClock,
    /// Fighter entities indexed by fighter id.
    roster: Vec<Entity>,
    player_class: Option<FighterClass>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<MatchEvent>,
    latch: InputLatch,
    outcome: Option<MatchOutcome>,
}

impl SimulationEngine {
    /// Create an idle engine. The config is trusted; use `try_new` for
    /// configs from outside the program.
    pub fn new(config: MatchConfig) -> Self {
        Self {
            world: World::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            time: SimTime::default(),
            phase: GamePhase::default(),
            clock: FrameClock::default(),
            roster: Vec::new(),
            player_class: None,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            latch: InputLatch::default(),
            outcome: None,
        }
    }

    /// Validate `config`, then create an idle engine.
    pub fn try_new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Queue a command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Per-frame host callback. `timestamp_secs` is the host's monotonic frame
    /// time; the delta since the previous call is simulated only while the
    /// match is running.
    pub fn frame(&mut self, timestamp_secs: f64, input: &InputState) -> MatchSnapshot {
        self.process_commands();

        let running = self.phase == GamePhase::Active;
        if let Some(dt) = self.clock.frame(timestamp_secs, running) {
            self.step(dt, input);
        }

        self.snapshot()
    }

    /// Simulate exactly `dt` seconds (if running) and return the snapshot.
    pub fn advance(&mut self, dt: f64, input: &InputState) -> MatchSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.step(dt.max(0.0), input);
        }

        self.snapshot()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    /// Fighter entities indexed by fighter id. Empty before the first match.
    pub fn roster(&self) -> &[Entity] {
        &self.roster
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for arranging test scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Apply damage to a fighter as if `attacker_id` had hit it.
    #[cfg(test)]
    pub fn damage_fighter(
        &mut self,
        fighter_id: u32,
        attacker_id: u32,
        amount: u32,
    ) -> systems::damage::DamageOutcome {
        let Some(&entity) = self.roster.get(fighter_id as usize) else {
            return systems::damage::DamageOutcome::Ignored;
        };
        systems::damage::apply_damage(
            &mut self.world,
            entity,
            attacker_id,
            amount,
            &self.config,
            self.time.elapsed_secs,
            &mut self.rng,
            &mut self.events,
        )
    }

    /// Fire a projectile from a fighter's current position toward `aim`.
    #[cfg(test)]
    pub fn fire_projectile(
        &mut self,
        shooter_id: u32,
        aim: crownfall_core::types::Position,
    ) -> Option<Entity> {
        use crownfall_core::components::FighterInfo;
        use crownfall_core::types::Position;

        let &entity = self.roster.get(shooter_id as usize)?;
        let (class, origin) = {
            let mut q = self
                .world
                .query_one::<(&FighterInfo, &Position)>(entity)
                .ok()?;
            let (info, pos) = q.get()?;
            (info.class, *pos)
        };
        Some(systems::projectiles::spawn_projectile(
            &mut self.world,
            shooter_id,
            class,
            origin,
            aim,
            &self.config.projectile,
            &mut self.events,
        ))
    }

    /// Run one frame of gameplay systems.
    fn step(&mut self, dt: f64, input: &InputState) {
        self.time.advance(dt);
        let now = self.time.elapsed_secs;

        systems::input::run(
            &mut self.world,
            &self.roster,
            input,
            &mut self.latch,
            &self.config,
            dt,
            now,
            &mut self.rng,
            &mut self.events,
        );
        systems::ai::run(
            &mut self.world,
            &self.roster,
            &self.config,
            dt,
            now,
            &mut self.rng,
            &mut self.events,
        );
        systems::projectiles::run(
            &mut self.world,
            &self.roster,
            &self.config,
            dt,
            now,
            &mut self.rng,
            &mut self.events,
        );
        systems::pickups::run(&mut self.world, &self.roster, &self.config, &mut self.events);
        if let Some(regen) = &self.config.regen {
            systems::regen::run(&mut self.world, regen, now, &mut self.events);
        }

        if self.outcome.is_none() {
            if let Some(outcome) = systems::victory::run(&mut self.world, &mut self.events) {
                self.outcome = Some(outcome);
                self.phase = GamePhase::MatchComplete;
            }
        }

        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    fn snapshot(&mut self) -> MatchSnapshot {
        let events = std::mem::take(&mut self.events);
        let field = (!self.roster.is_empty()).then_some(self.config.field);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.roster,
            &self.time,
            self.phase,
            field,
            events,
            self.outcome,
        )
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single control command. Commands invalid in the current
    /// phase are ignored.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartMatch { class } => {
                if matches!(self.phase, GamePhase::Idle | GamePhase::MatchComplete) {
                    self.player_class = Some(class);
                    self.build_match(class);
                } else {
                    debug!(phase = ?self.phase, "start ignored: match in progress");
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::TogglePause => match self.phase {
                GamePhase::Active => self.phase = GamePhase::Paused,
                GamePhase::Paused => self.phase = GamePhase::Active,
                _ => {}
            },
            PlayerCommand::Restart => match self.player_class {
                Some(class) => self.build_match(class),
                None => debug!("restart ignored: no class selected"),
            },
        }
    }

    /// Discard all match state and spawn a fresh match.
    fn build_match(&mut self, class: FighterClass) {
        self.world.clear();
        self.despawn_buffer.clear();
        self.events.clear();
        self.latch = InputLatch::default();
        self.outcome = None;
        self.time = SimTime::default();
        self.clock.resync();
        self.roster = world_setup::setup_match(&mut self.world, &self.config, class, &mut self.rng);
        self.phase = GamePhase::Active;

        info!(
            player_class = %class,
            fighters = self.roster.len(),
            seed = self.config.seed,
            "match started"
        );
    }
}
