//! Engine configuration with documented constants
//!
//! All timing and balance numbers live here. Defaults reproduce the
//! reference pacing; a TOML file may override any subset of them.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::Result;
use crate::core::types::Millis;

/// Tunables for the pet engine
///
/// Changing these affects pacing only. The engine never assumes the
/// defaults, except that vitals are always clamped to 0..=100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetConfig {
    // === VITALS ===
    /// Amount subtracted from hunger and morale on every decay tick
    pub decay_amount: u8,

    /// Interval between decay ticks while the pet is awake
    ///
    /// At 3000 ms and 2 points per tick, a full stat empties in 150 s.
    pub decay_interval_ms: Millis,

    /// Amount restored by one Feed or Play
    pub care_amount: u8,

    // === MINI-GAME ===
    /// Length of a mini-game round in countdown seconds
    pub minigame_seconds: u32,

    /// Countdown step for both timed sessions
    pub countdown_interval_ms: Millis,

    /// How often the catch target jumps to a new spot
    pub target_shuffle_ms: Millis,

    /// Coins awarded per catch
    pub catch_reward: u64,

    /// Horizontal target range, percent of the play area
    pub target_x_range: (f32, f32),

    /// Vertical target range, percent of the play area
    pub target_y_range: (f32, f32),

    // === EXPEDITION ===
    /// Length of an expedition in countdown seconds
    pub expedition_seconds: u32,

    /// Morale spent to launch an expedition; also the minimum morale required
    pub expedition_morale_cost: u8,

    /// Remaining-second marks at which a flavor line is logged
    pub expedition_flavor_marks: Vec<u32>,

    // === PRESENTATION ===
    /// Mission log capacity; oldest entries are dropped first
    pub mission_log_capacity: usize,

    // === PERSISTENCE ===
    /// Storage key for the snapshot
    pub save_key: String,

    // === RANDOMNESS ===
    /// Fixed seed for reproducible runs; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            // Vitals
            decay_amount: 2,
            decay_interval_ms: 3000,
            care_amount: 15,

            // Mini-game
            minigame_seconds: 10,
            countdown_interval_ms: 1000,
            target_shuffle_ms: 1400,
            catch_reward: 5,
            target_x_range: (8.0, 73.0),
            target_y_range: (12.0, 67.0),

            // Expedition
            expedition_seconds: 10,
            expedition_morale_cost: 20,
            expedition_flavor_marks: vec![9, 7, 5, 3, 1],

            mission_log_capacity: 50,
            save_key: "pixel-pet-v2".to_string(),
            seed: None,
        }
    }
}

impl PetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; keys not present keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PetConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Read and parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.decay_interval_ms == 0
            || self.countdown_interval_ms == 0
            || self.target_shuffle_ms == 0
        {
            return Err("Timer intervals must be positive".into());
        }

        if self.minigame_seconds == 0 || self.expedition_seconds == 0 {
            return Err("Session lengths must be at least one second".into());
        }

        if self.expedition_morale_cost > 100 {
            return Err(format!(
                "expedition_morale_cost ({}) cannot exceed the morale cap",
                self.expedition_morale_cost
            ));
        }

        let (x_lo, x_hi) = self.target_x_range;
        let (y_lo, y_hi) = self.target_y_range;
        if x_lo > x_hi || y_lo > y_hi {
            return Err("Target ranges must be ordered low..high".into());
        }

        if self.mission_log_capacity == 0 {
            return Err("mission_log_capacity must be positive".into());
        }

        Ok(())
    }
}
