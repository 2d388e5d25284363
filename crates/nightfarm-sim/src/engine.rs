//! Simulation engine: the day/night progression of the game.
//!
//! `SimulationEngine` owns the farm, the herd, the world clock and the
//! current battle. It processes player commands, runs systems, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use nightfarm_core::commands::PlayerCommand;
use nightfarm_core::config::SimConfig;
use nightfarm_core::constants::FIRST_NIGHT;
use nightfarm_core::enums::{AnimalKind, BattleOutcome, GamePhase, Rejection, WaterOutcome};
use nightfarm_core::error::{require_positive, SimError};
use nightfarm_core::events::{AttackEvent, GameEvent};
use nightfarm_core::state::{BattleView, CropSnapshot, GameStateSnapshot, SaveState};
use nightfarm_core::types::SimTime;
use nightfarm_farm::{CropHandle, Farm};

use crate::clock::WorldClock;
use crate::herd::Herd;
use crate::scenario::NightTable;
use crate::systems;
use crate::systems::battle::ActiveBattle;

/// The simulation engine. Owns all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    time: SimTime,
    phase: GamePhase,
    night: u32,
    clock: WorldClock,
    farm: Farm,
    herd: Herd,
    nights: NightTable,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
    battle: Option<ActiveBattle>,
}

impl SimulationEngine {
    /// Create a new engine and start the first day.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfiguration`] if the config fails
    /// validation.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let farm = Farm::new(config.min_plant_distance, config.crop)?;
        let nights = NightTable::from_config(&config.nights, config.final_night);
        if nights.max_night() < config.final_night {
            warn!(
                configured = nights.max_night(),
                final_night = config.final_night,
                "Night table is shorter than the campaign, later nights reuse the last entry"
            );
        }

        let day_duration = config.day_duration_secs;
        let mut engine = Self {
            time: SimTime::default(),
            phase: GamePhase::default(),
            night: FIRST_NIGHT,
            clock: WorldClock::new(),
            farm,
            herd: Herd::new(),
            nights,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            battle: None,
            config,
        };
        engine.start_day(day_duration, FIRST_NIGHT);
        Ok(engine)
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    ///
    /// During the day the clock counts down and crops grow. When the clock
    /// runs out the night's battle begins and waits for the host to step it.
    pub fn tick(&mut self, dt: f32) -> GameStateSnapshot {
        self.process_commands();

        if matches!(self.phase, GamePhase::Day { .. }) {
            systems::growth::run(
                &mut self.farm,
                dt,
                &self.config.drops,
                &mut self.rng,
                &mut self.events,
            );
            if self.clock.tick(dt) {
                self.begin_battle();
            }
        }
        self.time.advance(dt);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.time,
            self.phase,
            &self.clock,
            &self.farm,
            &self.herd,
            self.battle.as_ref(),
            events,
        )
    }

    /// Start a day of `duration` seconds on `night`. Every crop resumes.
    ///
    /// A battle still in progress is dropped without an outcome.
    pub fn start_day(&mut self, duration: f32, night: u32) {
        if self.battle.take().is_some() {
            debug!(night = self.night, "Battle dropped by a new day");
        }
        let duration = match require_positive("day duration", duration) {
            Ok(()) => duration,
            Err(err) => {
                warn!(%err, "Falling back to the configured day length");
                self.config.day_duration_secs
            }
        };

        self.night = night.max(FIRST_NIGHT);
        self.clock.start_day(duration);
        self.farm.resume_all();
        self.set_phase(GamePhase::Day { night: self.night });
    }

    /// Play the next attack of the current battle.
    ///
    /// Returns `None` outside a battle. When the battle has no attacks left
    /// its outcome is applied and `None` is returned.
    pub fn step_battle(&mut self) -> Option<AttackEvent> {
        let battle = self.battle.as_mut()?;
        if let Some(attack) = battle.next_attack() {
            return Some(attack);
        }
        let outcome = battle.outcome().unwrap_or(BattleOutcome::NoContest);
        self.conclude_battle(outcome);
        None
    }

    /// Play the rest of the current battle at once.
    pub fn finish_battle(&mut self) -> Option<BattleOutcome> {
        let battle = self.battle.as_mut()?;
        while battle.next_attack().is_some() {}
        let outcome = battle.outcome().unwrap_or(BattleOutcome::NoContest);
        self.conclude_battle(outcome);
        Some(outcome)
    }

    /// Tear the current battle down without an outcome. The night is
    /// unchanged and a fresh day begins.
    pub fn abandon_battle(&mut self) {
        if self.battle.take().is_none() {
            return;
        }
        warn!(night = self.night, "Battle abandoned");
        self.start_day(self.config.day_duration_secs, self.night);
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn clock(&self) -> &WorldClock {
        &self.clock
    }

    pub fn farm(&self) -> &Farm {
        &self.farm
    }

    pub fn herd(&self) -> &Herd {
        &self.herd
    }

    pub fn battle_view(&self) -> Option<BattleView> {
        self.battle.as_ref().map(ActiveBattle::view)
    }

    /// Current night, starting at 1.
    pub fn night_index(&self) -> u32 {
        self.night
    }

    pub fn crop_snapshot(&self) -> Vec<CropSnapshot> {
        self.farm.snapshot()
    }

    /// Replace every crop with the saved ones. Loaded crops need watering.
    pub fn load_crop_snapshot(&mut self, crops: &[CropSnapshot]) {
        let handles = self.farm.load_snapshot(crops);
        info!(crops = handles.len(), "Crops loaded");
        if !matches!(self.phase, GamePhase::Day { .. }) {
            self.farm.pause_all();
        }
    }

    /// Restore the night counter. A new day starts on the loaded night.
    pub fn load_night_index(&mut self, night: u32) {
        if night < FIRST_NIGHT {
            warn!(night, "Saved night out of range, starting from the first night");
        }
        self.start_day(self.config.day_duration_secs, night);
    }

    /// Everything the storage layer needs to restore this session.
    pub fn save_state(&self) -> SaveState {
        SaveState {
            night: self.night,
            crops: self.crop_snapshot(),
            herd: self.herd.animals().to_vec(),
        }
    }

    pub fn load_save_state(&mut self, save: &SaveState) {
        self.herd.replace(&save.herd);
        self.load_night_index(save.night);
        self.load_crop_snapshot(&save.crops);
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Plant { position } | PlayerCommand::Interact { position } => {
                self.plant(position);
            }
            PlayerCommand::Water { position } => {
                self.water_area(position, self.config.water_radius);
            }
            PlayerCommand::WaterArea { position, radius } => {
                self.water_area(position, radius);
            }
            PlayerCommand::AdoptAnimal { kind } => self.adopt(kind),
        }
    }

    fn plant(&mut self, position: Vec2) {
        if !matches!(self.phase, GamePhase::Day { .. }) {
            self.reject(Rejection::NotDaytime);
            return;
        }
        match self.farm.plant(position) {
            Ok(handle) => {
                self.events.push(GameEvent::CropPlanted {
                    crop: handle.id(),
                    position,
                });
            }
            Err(reason) => self.reject(reason),
        }
    }

    fn water_area(&mut self, position: Vec2, radius: f32) {
        if !matches!(self.phase, GamePhase::Day { .. }) {
            self.reject(Rejection::NotDaytime);
            return;
        }
        let watered = self.farm.water_nearby(position, radius);
        if watered.is_empty() {
            self.reject(Rejection::NothingToWater);
            return;
        }
        for (handle, outcome) in watered {
            self.push_water_event(handle, outcome);
        }
    }

    fn push_water_event(&mut self, handle: CropHandle, outcome: WaterOutcome) {
        let crop = handle.id();
        match outcome {
            WaterOutcome::Started => self.events.push(GameEvent::CropWatered { crop }),
            WaterOutcome::AlreadyWatered => self.events.push(GameEvent::AlreadyWatered { crop }),
        }
    }

    fn adopt(&mut self, kind: AnimalKind) {
        if self.herd.adopt(kind) {
            info!(?kind, herd = self.herd.len(), "Animal adopted");
            self.events.push(GameEvent::AnimalAdopted { kind });
        } else {
            self.reject(Rejection::AlreadyOwned);
        }
    }

    fn reject(&mut self, reason: Rejection) {
        debug!(?reason, "Command rejected");
        self.events.push(GameEvent::CommandRejected { reason });
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            info!(?phase, "Phase changed");
        }
        self.phase = phase;
        self.events.push(GameEvent::PhaseChanged { phase });
    }

    /// The day ran out: freeze the farm and set up tonight's battle.
    fn begin_battle(&mut self) {
        self.farm.pause_all();
        self.clock.start_night();
        self.set_phase(GamePhase::Battle { night: self.night });
        self.battle = Some(systems::battle::prepare(
            self.night,
            &self.herd,
            &self.nights,
            &self.config,
            &mut self.rng,
            &mut self.events,
        ));
    }

    fn conclude_battle(&mut self, outcome: BattleOutcome) {
        self.battle = None;
        let night = self.night;
        info!(night, ?outcome, "Battle ended");
        self.events.push(GameEvent::BattleEnded { night, outcome });

        if outcome.is_victory() {
            if night >= self.config.final_night {
                self.clock.start_night();
                self.set_phase(GamePhase::Completed);
            } else {
                self.start_day(self.config.day_duration_secs, night + 1);
            }
        } else {
            self.start_day(self.config.day_duration_secs, night);
        }
    }
}
