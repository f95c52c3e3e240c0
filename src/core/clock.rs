//! Virtual clock with repeating timers
//!
//! Every timed behaviour in the engine (decay, countdowns, target shuffling)
//! is a repeating timer here. Time only moves when the owner advances it,
//! so tests can drive whole sessions without sleeping.

use serde::{Deserialize, Serialize};

use crate::core::types::Millis;

/// Handle returned when a timer is scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u32);

/// What a timer drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    Decay,
    MiniGameCountdown,
    TargetShuffle,
    ExpeditionCountdown,
}

/// A timer that came due during `pop_due`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub id: TimerId,
    pub kind: TimerKind,
    pub at_ms: Millis,
}

#[derive(Debug, Clone)]
struct Ticker {
    id: TimerId,
    kind: TimerKind,
    interval_ms: Millis,
    next_fire_ms: Millis,
}

/// Owns the current time and all live timers
#[derive(Debug, Clone, Default)]
pub struct Clock {
    now_ms: Millis,
    next_id: u32,
    tickers: Vec<Ticker>,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> Millis {
        self.now_ms
    }

    /// Schedule a timer that first fires one interval from now
    pub fn schedule_repeating(&mut self, kind: TimerKind, interval_ms: Millis) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.tickers.push(Ticker {
            id,
            kind,
            interval_ms: interval_ms.max(1),
            next_fire_ms: self.now_ms + interval_ms.max(1),
        });
        id
    }

    /// Remove a timer. Returns false if it was already gone.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.tickers.len();
        self.tickers.retain(|t| t.id != id);
        self.tickers.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.tickers.clear();
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.tickers.iter().any(|t| t.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.tickers.len()
    }

    /// Pop the earliest timer due at or before `until_ms`.
    ///
    /// Time moves to the fire instant and the timer is rescheduled one
    /// interval later. Ties go to the timer scheduled first. Callers loop
    /// until `None`, so a handler that cancels another timer prevents it
    /// from firing later in the same advance.
    pub fn pop_due(&mut self, until_ms: Millis) -> Option<Fired> {
        let ticker = self
            .tickers
            .iter_mut()
            .filter(|t| t.next_fire_ms <= until_ms)
            .min_by_key(|t| (t.next_fire_ms, t.id.0))?;

        let fired = Fired {
            id: ticker.id,
            kind: ticker.kind,
            at_ms: ticker.next_fire_ms,
        };
        ticker.next_fire_ms += ticker.interval_ms;
        self.now_ms = self.now_ms.max(fired.at_ms);
        Some(fired)
    }

    /// Move time forward to `until_ms` once no timers remain due
    pub fn settle(&mut self, until_ms: Millis) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}
