//! Pet engine - owns all simulation state behind a command/query API
//!
//! One logical actor: every mutation comes from a command method or from a
//! timer popped during `advance`. Renderers only ever see `PetView`.
//!
//! # Timer lifecycle
//!
//! - exactly one decay timer exists while awake, none while sleeping
//! - each sub-session owns its timers and cancels them before the status
//!   returns to idle
//! - a fired timer that no longer belongs to the current session is dropped

pub mod events;
pub mod mission_log;
pub mod view;

pub use events::{AudioCue, EventKind, PetEvent};
pub use mission_log::{LogEntry, MissionLog};
pub use view::PetView;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::clock::{Clock, Fired, TimerId, TimerKind};
use crate::core::config::PetConfig;
use crate::core::error::{PetError, Result};
use crate::core::types::{unix_millis, Accessory, Biome, Millis};
use crate::economy::{ArtifactRecord, Economy};
use crate::pet::{AdoptionForm, Mood, PetProfile, VitalKind, Vitals};
use crate::session::expedition::{self, ExpeditionOutcome, ExpeditionSession, TripTick};
use crate::session::minigame::{MiniGameSession, RoundTick};
use crate::session::{SessionStatus, StatusSummary};

pub struct PetEngine {
    config: PetConfig,
    profile: PetProfile,
    vitals: Vitals,
    status: SessionStatus,
    economy: Economy,
    log: MissionLog,
    clock: Clock,
    decay_timer: Option<TimerId>,
    rng: ChaCha8Rng,
    events: Vec<PetEvent>,
    halted: bool,
}

impl PetEngine {
    /// Start a session for an existing pet: full vitals, idle, decay running.
    /// `config` must already have passed `PetConfig::validate`.
    pub fn new(profile: PetProfile, economy: Economy, config: PetConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut clock = Clock::new();
        let decay_timer = Some(clock.schedule_repeating(TimerKind::Decay, config.decay_interval_ms));

        Self {
            log: MissionLog::new(config.mission_log_capacity),
            config,
            profile,
            vitals: Vitals::default(),
            status: SessionStatus::Idle,
            economy,
            clock,
            decay_timer,
            rng,
            events: Vec::new(),
            halted: false,
        }
    }

    /// Adopt a new pet with an empty economy
    pub fn adopt(form: AdoptionForm, config: PetConfig) -> Result<Self> {
        config.validate().map_err(PetError::InvalidConfig)?;
        let profile = form.into_profile()?;
        let mut engine = Self::new(profile, Economy::new(), config);

        let name = engine.profile.name().to_string();
        let species = engine.profile.species();
        tracing::info!("Adopted {} the {}", name, species.label());
        engine.log_line(format!("Welcome home, {}!", name));
        engine.emit(EventKind::Adopted { name, species });
        Ok(engine)
    }

    // === QUERIES ===

    pub fn config(&self) -> &PetConfig {
        &self.config
    }

    pub fn profile(&self) -> &PetProfile {
        &self.profile
    }

    pub fn vitals(&self) -> Vitals {
        self.vitals
    }

    pub fn mood(&self) -> Mood {
        self.vitals.mood()
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn status_summary(&self) -> StatusSummary {
        self.status.summary()
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    pub fn coins(&self) -> u64 {
        self.economy.wallet.coins()
    }

    pub fn mission_log(&self) -> &MissionLog {
        &self.log
    }

    pub fn now_ms(&self) -> Millis {
        self.clock.now_ms()
    }

    pub fn is_decaying(&self) -> bool {
        self.decay_timer.is_some_and(|id| self.clock.is_active(id))
    }

    pub fn active_timers(&self) -> usize {
        self.clock.active_count()
    }

    pub fn pending_events(&self) -> &[PetEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<PetEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn view(&self, log_tail: usize) -> PetView {
        PetView {
            name: self.profile.name().to_string(),
            species: self.profile.species(),
            theme: self.profile.theme(),
            hunger: self.vitals.hunger,
            morale: self.vitals.morale,
            mood: self.mood(),
            status: self.status.summary(),
            coins: self.coins(),
            accessories: self.economy.wallet.accessories().to_vec(),
            worn: self.economy.wallet.displayed_accessory(),
            artifacts: self.economy.artifacts.records().to_vec(),
            log_tail: self.log.tail(log_tail).map(|e| e.message.clone()).collect(),
        }
    }

    // === COMMANDS ===
    //
    // Each returns true when applied. A refused command changes nothing and
    // emits nothing.

    pub fn feed(&mut self) -> bool {
        if self.halted || !self.status.is_idle() {
            return false;
        }
        if !self.vitals.restore(VitalKind::Hunger, self.config.care_amount) {
            return false;
        }
        self.emit(EventKind::Fed { hunger: self.vitals.hunger });
        true
    }

    pub fn play(&mut self) -> bool {
        if self.halted || !self.status.is_idle() {
            return false;
        }
        if !self.vitals.restore(VitalKind::Morale, self.config.care_amount) {
            return false;
        }
        self.emit(EventKind::Played { morale: self.vitals.morale });
        true
    }

    pub fn toggle_sleep(&mut self) -> bool {
        if self.halted || self.status.in_session() {
            return false;
        }
        if self.status.is_sleeping() {
            self.status = SessionStatus::Idle;
            self.start_decay();
            tracing::debug!("{} woke up", self.profile.name());
            self.emit(EventKind::WokeUp);
        } else {
            self.status = SessionStatus::Sleeping;
            self.stop_decay();
            tracing::debug!("{} fell asleep", self.profile.name());
            self.emit(EventKind::FellAsleep);
        }
        true
    }

    pub fn start_minigame(&mut self) -> bool {
        if self.halted || !self.status.is_idle() {
            return false;
        }
        let round = MiniGameSession::start(&mut self.clock, &self.config, &mut self.rng);
        let target = round.target();
        self.status = SessionStatus::MiniGame(round);
        tracing::info!("Mini-game started ({}s)", self.config.minigame_seconds);
        self.emit(EventKind::MiniGameStarted { target });
        true
    }

    pub fn catch_target(&mut self) -> bool {
        if self.halted {
            return false;
        }
        let reward = self.config.catch_reward;
        let earned = match &mut self.status {
            SessionStatus::MiniGame(round) => {
                if !round.catch(reward) {
                    return false;
                }
                round.earned()
            }
            _ => return false,
        };
        self.emit(EventKind::TargetCaught { earned });
        true
    }

    pub fn launch_expedition(&mut self, biome: Biome) -> bool {
        if self.halted || !self.status.is_idle() {
            return false;
        }
        if !self.vitals.spend_morale(self.config.expedition_morale_cost) {
            return false;
        }
        let trip = ExpeditionSession::launch(biome, &mut self.clock, &self.config);
        self.status = SessionStatus::Expedition(trip);

        tracing::info!("Expedition launched to {}", biome.label());
        self.log_line(format!(
            "{} set off for the {}! (-{} morale)",
            self.profile.name(),
            biome.label(),
            self.config.expedition_morale_cost
        ));
        self.emit(EventKind::ExpeditionLaunched { biome });
        true
    }

    pub fn purchase(&mut self, item: Accessory) -> bool {
        if self.halted || !self.economy.purchase(item) {
            return false;
        }
        let coins_left = self.coins();
        tracing::info!("Purchased {} for {} coins", item.id(), item.cost());
        self.log_line(format!("Bought a {} for {} coins.", item.id(), item.cost()));
        self.emit(EventKind::Purchased { item, coins_left });
        true
    }

    /// Cancel every timer; the engine ignores all further input
    pub fn shutdown(&mut self) {
        self.clock.cancel_all();
        self.decay_timer = None;
        self.status = SessionStatus::Idle;
        self.halted = true;
        tracing::debug!("Engine for {} shut down", self.profile.name());
    }

    // === TIME ===

    /// Advance the virtual clock, dispatching every timer that comes due
    pub fn advance(&mut self, elapsed_ms: Millis) {
        if self.halted {
            return;
        }
        let until = self.clock.now_ms() + elapsed_ms;
        while let Some(fired) = self.clock.pop_due(until) {
            self.on_timer(fired);
        }
        self.clock.settle(until);
    }

    fn on_timer(&mut self, fired: Fired) {
        match fired.kind {
            TimerKind::Decay => self.on_decay(fired),
            TimerKind::MiniGameCountdown => self.on_round_countdown(fired),
            TimerKind::TargetShuffle => self.on_target_shuffle(fired),
            TimerKind::ExpeditionCountdown => self.on_trip_countdown(fired),
        }
    }

    fn on_decay(&mut self, fired: Fired) {
        if self.decay_timer != Some(fired.id) || self.status.is_sleeping() {
            drop_stale(fired);
            return;
        }
        self.vitals.decay(self.config.decay_amount);
        self.emit_at(
            fired.at_ms,
            EventKind::Decayed {
                hunger: self.vitals.hunger,
                morale: self.vitals.morale,
            },
        );
    }

    fn on_round_countdown(&mut self, fired: Fired) {
        let tick = match &mut self.status {
            SessionStatus::MiniGame(round) if round.owns_timer(fired.id) => round.countdown(),
            _ => {
                drop_stale(fired);
                return;
            }
        };
        if let RoundTick::Finished { earned, catches } = tick {
            self.finish_minigame(earned, catches, fired.at_ms);
        }
    }

    fn on_target_shuffle(&mut self, fired: Fired) {
        let target = match &mut self.status {
            SessionStatus::MiniGame(round) if round.owns_timer(fired.id) => {
                round.shuffle(&mut self.rng, &self.config)
            }
            _ => {
                drop_stale(fired);
                return;
            }
        };
        self.emit_at(fired.at_ms, EventKind::TargetMoved { target });
    }

    fn finish_minigame(&mut self, earned: u64, catches: u32, at_ms: Millis) {
        if let SessionStatus::MiniGame(round) = std::mem::take(&mut self.status) {
            round.cancel_timers(&mut self.clock);
        }
        self.economy.credit(earned);

        tracing::info!("Mini-game over: {} catches, {} coins", catches, earned);
        self.log_line_at(
            at_ms,
            format!("{} earned {} coins in the mini-game!", self.profile.name(), earned),
        );
        self.emit_at(at_ms, EventKind::MiniGameEnded { earned, catches });
    }

    fn on_trip_countdown(&mut self, fired: Fired) {
        let (biome, tick) = match &mut self.status {
            SessionStatus::Expedition(trip) if trip.owns_timer(fired.id) => (trip.biome(), trip.countdown()),
            _ => {
                drop_stale(fired);
                return;
            }
        };
        match tick {
            TripTick::Underway { seconds_remaining } => {
                let marks = &self.config.expedition_flavor_marks;
                if let Some(step) = marks.iter().position(|&m| m == seconds_remaining) {
                    let line = expedition::flavor_line(self.profile.name(), biome, step);
                    self.log_line_at(fired.at_ms, line);
                }
            }
            TripTick::Arrived => self.resolve_expedition(biome, fired.at_ms),
        }
    }

    fn resolve_expedition(&mut self, biome: Biome, at_ms: Millis) {
        if let SessionStatus::Expedition(trip) = std::mem::take(&mut self.status) {
            trip.cancel_timers(&mut self.clock);
        }

        let name = self.profile.name().to_string();
        match expedition::draw_outcome(biome, &mut self.rng) {
            ExpeditionOutcome::Success => {
                let artifact = ArtifactRecord::new(biome, unix_millis());
                self.economy.add_artifact(artifact.clone());
                tracing::info!("Expedition to {} succeeded: {}", biome.label(), artifact.name);
                self.log_line_at(
                    at_ms,
                    format!("{} returned from the {} with a {}!", name, biome.label(), artifact.name),
                );
                self.emit_at(at_ms, EventKind::ExpeditionSucceeded { artifact });
            }
            ExpeditionOutcome::Failure => {
                tracing::info!("Expedition to {} came back empty", biome.label());
                self.log_line_at(
                    at_ms,
                    format!("{} came back from the {} empty-pawed.", name, biome.label()),
                );
                self.emit_at(at_ms, EventKind::ExpeditionFailed { biome });
            }
        }
    }

    // === HELPERS ===

    fn start_decay(&mut self) {
        self.stop_decay();
        self.decay_timer = Some(
            self.clock
                .schedule_repeating(TimerKind::Decay, self.config.decay_interval_ms),
        );
    }

    fn stop_decay(&mut self) {
        if let Some(id) = self.decay_timer.take() {
            self.clock.cancel(id);
        }
    }

    fn emit(&mut self, kind: EventKind) {
        self.emit_at(self.clock.now_ms(), kind);
    }

    fn emit_at(&mut self, at_ms: Millis, kind: EventKind) {
        self.events.push(PetEvent { at_ms, kind });
    }

    fn log_line(&mut self, message: String) {
        self.log_line_at(self.clock.now_ms(), message);
    }

    fn log_line_at(&mut self, at_ms: Millis, message: String) {
        self.log.push(at_ms, message);
    }
}

fn drop_stale(fired: Fired) {
    tracing::debug!("Ignoring stale {:?} timer {:?} at {}ms", fired.kind, fired.id, fired.at_ms);
}
