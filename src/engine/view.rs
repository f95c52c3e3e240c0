//! Read-only view of engine state for renderers
//!
//! This module never modifies engine state. Front-ends take a fresh view
//! after each command or advance and draw from it.

use serde::{Deserialize, Serialize};

use crate::core::types::{Accessory, Species, ThemeId};
use crate::economy::ArtifactRecord;
use crate::pet::Mood;
use crate::session::StatusSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetView {
    pub name: String,
    pub species: Species,
    pub theme: ThemeId,
    pub hunger: u8,
    pub morale: u8,
    pub mood: Mood,
    pub status: StatusSummary,
    pub coins: u64,
    pub accessories: Vec<Accessory>,
    /// Highest-tier owned accessory, the one drawn on the pet
    pub worn: Option<Accessory>,
    pub artifacts: Vec<ArtifactRecord>,
    pub log_tail: Vec<String>,
}

impl PetView {
    pub fn can_feed(&self) -> bool {
        matches!(self.status, StatusSummary::Idle) && self.hunger < 100
    }

    pub fn can_play(&self) -> bool {
        matches!(self.status, StatusSummary::Idle) && self.morale < 100
    }

    pub fn can_toggle_sleep(&self) -> bool {
        matches!(self.status, StatusSummary::Idle | StatusSummary::Sleeping)
    }
}
