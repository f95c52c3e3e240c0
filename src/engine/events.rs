//! Engine events for front-ends
//!
//! The engine never animates or plays sound. It emits timestamped events
//! and the renderer decides how long a "fed" pulse or result toast lasts.

use serde::{Deserialize, Serialize};

use crate::core::types::{Accessory, Biome, Millis, Species};
use crate::economy::ArtifactRecord;
use crate::session::TargetPosition;

/// Something that happened, stamped with engine-clock time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetEvent {
    pub at_ms: Millis,
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EventKind {
    Adopted { name: String, species: Species },
    Decayed { hunger: u8, morale: u8 },
    Fed { hunger: u8 },
    Played { morale: u8 },
    FellAsleep,
    WokeUp,

    MiniGameStarted { target: TargetPosition },
    TargetMoved { target: TargetPosition },
    TargetCaught { earned: u64 },
    MiniGameEnded { earned: u64, catches: u32 },

    ExpeditionLaunched { biome: Biome },
    ExpeditionSucceeded { artifact: ArtifactRecord },
    ExpeditionFailed { biome: Biome },

    Purchased { item: Accessory, coins_left: u64 },
}

/// Fire-and-forget sound hint for the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    /// Short sweep between two frequencies over ~100 ms
    Chirp { from_hz: u32, to_hz: u32 },
}

impl EventKind {
    pub fn audio_cue(&self) -> Option<AudioCue> {
        let (from_hz, to_hz) = match self {
            Self::Adopted { .. } => (400, 800),
            Self::Fed { .. } => (300, 500),
            Self::Played { .. } => (500, 700),
            Self::TargetCaught { .. } => (600, 900),
            Self::MiniGameEnded { .. } => (500, 1000),
            Self::ExpeditionSucceeded { .. } => (700, 1200),
            Self::Purchased { .. } => (450, 900),
            _ => return None,
        };
        Some(AudioCue::Chirp { from_hz, to_hz })
    }
}
