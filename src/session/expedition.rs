//! Expeditions - a timed trip with a single probabilistic payoff

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::clock::{Clock, TimerId, TimerKind};
use crate::core::config::PetConfig;
use crate::core::types::Biome;

/// Result of one countdown step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripTick {
    Underway { seconds_remaining: u32 },
    Arrived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpeditionOutcome {
    Success,
    Failure,
}

/// One Bernoulli draw at the biome's success rate
pub fn draw_outcome<R: Rng + ?Sized>(biome: Biome, rng: &mut R) -> ExpeditionOutcome {
    if rng.gen_bool(biome.success_rate()) {
        ExpeditionOutcome::Success
    } else {
        ExpeditionOutcome::Failure
    }
}

/// Cosmetic log line for a given countdown mark
pub fn flavor_line(pet: &str, biome: Biome, step: usize) -> String {
    match step % 5 {
        0 => format!("{} sets off into the {}.", pet, biome.label()),
        1 => format!("{} sniffs out a hidden path.", pet),
        2 => format!("Strange echoes surround {}...", pet),
        3 => format!("{} spots something shiny ahead!", pet),
        _ => format!("{} is heading home from the {}.", pet, biome.label()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpeditionSession {
    biome: Biome,
    seconds_remaining: u32,
    countdown: TimerId,
}

impl ExpeditionSession {
    pub fn launch(biome: Biome, clock: &mut Clock, config: &PetConfig) -> Self {
        let countdown = clock.schedule_repeating(TimerKind::ExpeditionCountdown, config.countdown_interval_ms);
        Self {
            biome,
            seconds_remaining: config.expedition_seconds,
            countdown,
        }
    }

    pub fn biome(&self) -> Biome {
        self.biome
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn owns_timer(&self, id: TimerId) -> bool {
        id == self.countdown
    }

    pub fn countdown(&mut self) -> TripTick {
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            TripTick::Arrived
        } else {
            TripTick::Underway {
                seconds_remaining: self.seconds_remaining,
            }
        }
    }

    pub fn cancel_timers(&self, clock: &mut Clock) {
        clock.cancel(self.countdown);
    }
}
