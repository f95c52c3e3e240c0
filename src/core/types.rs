//! Core type definitions used throughout the codebase
//!
//! Every catalog here is a closed set chosen at compile time. String ids are
//! the persisted form and match the save format exactly.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds on the engine's virtual clock
pub type Millis = u64;

/// Pet species, chosen once at adoption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Cat,
    Dino,
    Slime,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Cat, Species::Dino, Species::Slime];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Cat => "cat",
            Self::Dino => "dino",
            Self::Slime => "slime",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cat => "Cat",
            Self::Dino => "Dino",
            Self::Slime => "Slime",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id().eq_ignore_ascii_case(id.trim()))
    }
}

/// Visual theme palette, chosen once at adoption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Pink,
    Blue,
    Green,
}

impl ThemeId {
    pub const ALL: [ThemeId; 3] = [ThemeId::Pink, ThemeId::Blue, ThemeId::Green];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Pink => "pink",
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id().eq_ignore_ascii_case(id.trim()))
    }
}

/// Expedition destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Biome {
    CrystalCaves,
    SunkenRuins,
    DragonPeak,
}

impl Biome {
    pub const ALL: [Biome; 3] = [Biome::CrystalCaves, Biome::SunkenRuins, Biome::DragonPeak];

    pub fn id(&self) -> &'static str {
        match self {
            Self::CrystalCaves => "crystalCaves",
            Self::SunkenRuins => "sunkenRuins",
            Self::DragonPeak => "dragonPeak",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CrystalCaves => "Crystal Caves",
            Self::SunkenRuins => "Sunken Ruins",
            Self::DragonPeak => "Dragon Peak",
        }
    }

    /// Probability that an expedition here brings back its reward
    pub fn success_rate(&self) -> f64 {
        match self {
            Self::CrystalCaves => 0.80,
            Self::SunkenRuins => 0.50,
            Self::DragonPeak => 0.20,
        }
    }

    /// Name of the artifact recorded on success
    pub fn reward_name(&self) -> &'static str {
        match self {
            Self::CrystalCaves => "Glow Crystal",
            Self::SunkenRuins => "Ancient Coin",
            Self::DragonPeak => "Dragon Scale",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.id().eq_ignore_ascii_case(id.trim()))
    }
}

/// One-time purchasable upgrade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Accessory {
    PartyHat,
    WizardHat,
    Crown,
}

impl Accessory {
    pub const ALL: [Accessory; 3] = [Accessory::PartyHat, Accessory::WizardHat, Accessory::Crown];

    pub fn id(&self) -> &'static str {
        match self {
            Self::PartyHat => "partyHat",
            Self::WizardHat => "wizardHat",
            Self::Crown => "crown",
        }
    }

    pub fn cost(&self) -> u64 {
        match self {
            Self::PartyHat => 50,
            Self::WizardHat => 120,
            Self::Crown => 250,
        }
    }

    /// Display precedence: the highest owned tier is the one worn
    pub fn tier(&self) -> u8 {
        match self {
            Self::PartyHat => 1,
            Self::WizardHat => 2,
            Self::Crown => 3,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id().eq_ignore_ascii_case(id.trim()))
    }
}

/// Wall-clock timestamp in Unix milliseconds, used for artifact records
pub fn unix_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
