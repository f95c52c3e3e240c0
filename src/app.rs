//! Application root - adoption flow, command dispatch and save syncing
//!
//! Startup reads the save. With a usable snapshot the pet resumes at full
//! vitals; otherwise the app waits in the adoption phase. After every
//! command or advance, economy changes are written through the bridge.

use std::str::FromStr;

use crate::core::config::PetConfig;
use crate::core::error::{PetError, Result};
use crate::core::types::{Accessory, Biome};
use crate::engine::{PetEngine, PetView};
use crate::persistence::{PersistenceBridge, PetSnapshot, SaveStore};
use crate::pet::AdoptionForm;

/// Player commands exposed to front-ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Feed,
    Play,
    ToggleSleep,
    StartMiniGame,
    CatchTarget,
    LaunchExpedition(Biome),
    Purchase(Accessory),
    ResetAllData,
}

impl FromStr for Command {
    type Err = PetError;

    fn from_str(input: &str) -> Result<Self> {
        let mut words = input.split_whitespace();
        let verb = words.next().unwrap_or("").to_ascii_lowercase();
        let arg = words.next();

        let command = match (verb.as_str(), arg) {
            ("feed", None) => Command::Feed,
            ("play", None) => Command::Play,
            ("sleep" | "wake", None) => Command::ToggleSleep,
            ("game" | "minigame", None) => Command::StartMiniGame,
            ("catch" | "c", None) => Command::CatchTarget,
            ("expedition" | "explore", Some(id)) => {
                Command::LaunchExpedition(Biome::from_id(id).ok_or_else(|| PetError::UnknownCommand(input.to_string()))?)
            }
            ("buy", Some(id)) => {
                Command::Purchase(Accessory::from_id(id).ok_or_else(|| PetError::UnknownCommand(input.to_string()))?)
            }
            ("reset", None) => Command::ResetAllData,
            _ => return Err(PetError::UnknownCommand(input.to_string())),
        };
        Ok(command)
    }
}

pub enum Phase {
    Adoption,
    Playing(PetEngine),
}

pub struct PetApp {
    config: PetConfig,
    bridge: PersistenceBridge,
    phase: Phase,
    saved_revision: u64,
}

impl PetApp {
    /// Load the saved pet if there is one, otherwise wait for adoption.
    /// Fails only on an invalid config.
    pub fn start(config: PetConfig, store: Box<dyn SaveStore>) -> Result<Self> {
        config.validate().map_err(PetError::InvalidConfig)?;
        let bridge = PersistenceBridge::new(store, config.save_key.clone());

        let phase = match bridge.load().map(PetSnapshot::restore) {
            Some(Ok((profile, economy))) => {
                tracing::info!("Welcome back, {}", profile.name());
                Phase::Playing(PetEngine::new(profile, economy, config.clone()))
            }
            Some(Err(e)) => {
                tracing::warn!("Saved pet could not be restored: {}", e);
                Phase::Adoption
            }
            None => Phase::Adoption,
        };

        Ok(Self {
            config,
            bridge,
            phase,
            saved_revision: 0,
        })
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn needs_adoption(&self) -> bool {
        matches!(self.phase, Phase::Adoption)
    }

    pub fn engine(&self) -> Option<&PetEngine> {
        match &self.phase {
            Phase::Playing(engine) => Some(engine),
            Phase::Adoption => None,
        }
    }

    pub fn engine_mut(&mut self) -> Option<&mut PetEngine> {
        match &mut self.phase {
            Phase::Playing(engine) => Some(engine),
            Phase::Adoption => None,
        }
    }

    pub fn view(&self, log_tail: usize) -> Option<PetView> {
        self.engine().map(|e| e.view(log_tail))
    }

    pub fn bridge(&self) -> &PersistenceBridge {
        &self.bridge
    }

    /// Adopt a pet and save its identity. Returns false if one is already adopted.
    pub fn adopt(&mut self, form: AdoptionForm) -> Result<bool> {
        if !self.needs_adoption() {
            return Ok(false);
        }
        let engine = PetEngine::adopt(form, self.config.clone())?;
        self.bridge
            .save(&PetSnapshot::capture(engine.profile(), engine.economy()));
        self.saved_revision = engine.economy().revision();
        self.phase = Phase::Playing(engine);
        Ok(true)
    }

    /// Run a command. Refused gameplay commands return `Ok(false)`.
    pub fn dispatch(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Feed => self.with_engine(PetEngine::feed),
            Command::Play => self.with_engine(PetEngine::play),
            Command::ToggleSleep => self.with_engine(PetEngine::toggle_sleep),
            Command::StartMiniGame => self.with_engine(PetEngine::start_minigame),
            Command::CatchTarget => self.with_engine(PetEngine::catch_target),
            Command::LaunchExpedition(biome) => self.with_engine(|e| e.launch_expedition(biome)),
            Command::Purchase(item) => self.with_engine(|e| e.purchase(item)),
            Command::ResetAllData => {
                self.reset_all_data();
                Ok(true)
            }
        }
    }

    fn with_engine(&mut self, apply: impl FnOnce(&mut PetEngine) -> bool) -> Result<bool> {
        let engine = self.engine_mut().ok_or(PetError::NotAdopted)?;
        let applied = apply(engine);
        self.sync();
        Ok(applied)
    }

    /// Advance engine time and persist whatever the timers changed
    pub fn advance(&mut self, elapsed_ms: u64) {
        if let Some(engine) = self.engine_mut() {
            engine.advance(elapsed_ms);
        }
        self.sync();
    }

    /// Drop the pet and its save; the next step is adoption again
    pub fn reset_all_data(&mut self) {
        if let Phase::Playing(engine) = &mut self.phase {
            engine.shutdown();
        }
        self.bridge.clear();
        self.phase = Phase::Adoption;
        self.saved_revision = 0;
        tracing::info!("All data reset");
    }

    fn sync(&mut self) {
        let Phase::Playing(engine) = &self.phase else {
            return;
        };
        let revision = engine.economy().revision();
        if revision == self.saved_revision {
            return;
        }
        let snapshot = PetSnapshot::capture(engine.profile(), engine.economy());
        self.bridge.save(&snapshot);
        // a failed write is not retried until the next change
        self.saved_revision = revision;
    }
}
