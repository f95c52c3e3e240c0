//! Bounded mission log shown to the player

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::types::Millis;

/// Default maximum log entries to keep
pub const MAX_LOG_ENTRIES: usize = 50;

/// An entry in the mission log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub at_ms: Millis,
    pub message: String,
}

/// Write-only display log; oldest entries fall off the front
#[derive(Debug, Clone)]
pub struct MissionLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl MissionLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add an entry to the log
    pub fn push(&mut self, at_ms: Millis, message: String) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry { at_ms, message });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The newest `n` entries, oldest first
    pub fn tail(&self, n: usize) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }
}

impl Default for MissionLog {
    fn default() -> Self {
        Self::new(MAX_LOG_ENTRIES)
    }
}
