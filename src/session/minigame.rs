//! Catch-the-pet reflex mini-game
//!
//! A fixed-length round: the countdown drops once per second, the target
//! jumps around on its own timer, and every catch adds to `earned`. Coins
//! are only credited when the round ends.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::clock::{Clock, TimerId, TimerKind};
use crate::core::config::PetConfig;

/// Target location as percentages of the play area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetPosition {
    pub x: f32,
    pub y: f32,
}

impl TargetPosition {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, config: &PetConfig) -> Self {
        let (x_lo, x_hi) = config.target_x_range;
        let (y_lo, y_hi) = config.target_y_range;
        Self {
            x: rng.gen_range(x_lo..=x_hi),
            y: rng.gen_range(y_lo..=y_hi),
        }
    }
}

/// Result of one countdown step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundTick {
    Running { time_left: u32 },
    Finished { earned: u64, catches: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MiniGameSession {
    time_left: u32,
    earned: u64,
    catches: u32,
    target: TargetPosition,
    countdown: TimerId,
    shuffle: TimerId,
}

impl MiniGameSession {
    /// Start a round and schedule its two timers
    pub fn start<R: Rng + ?Sized>(clock: &mut Clock, config: &PetConfig, rng: &mut R) -> Self {
        let countdown = clock.schedule_repeating(TimerKind::MiniGameCountdown, config.countdown_interval_ms);
        let shuffle = clock.schedule_repeating(TimerKind::TargetShuffle, config.target_shuffle_ms);
        Self {
            time_left: config.minigame_seconds,
            earned: 0,
            catches: 0,
            target: TargetPosition::random(rng, config),
            countdown,
            shuffle,
        }
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn earned(&self) -> u64 {
        self.earned
    }

    pub fn catches(&self) -> u32 {
        self.catches
    }

    pub fn target(&self) -> TargetPosition {
        self.target
    }

    pub fn owns_timer(&self, id: TimerId) -> bool {
        id == self.countdown || id == self.shuffle
    }

    /// Register a catch. Any number per second is honoured while time remains.
    pub fn catch(&mut self, reward: u64) -> bool {
        if self.time_left == 0 {
            return false;
        }
        self.catches += 1;
        self.earned += reward;
        true
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R, config: &PetConfig) -> TargetPosition {
        self.target = TargetPosition::random(rng, config);
        self.target
    }

    pub fn countdown(&mut self) -> RoundTick {
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            RoundTick::Finished {
                earned: self.earned,
                catches: self.catches,
            }
        } else {
            RoundTick::Running {
                time_left: self.time_left,
            }
        }
    }

    pub fn cancel_timers(&self, clock: &mut Clock) {
        clock.cancel(self.countdown);
        clock.cancel(self.shuffle);
    }
}
