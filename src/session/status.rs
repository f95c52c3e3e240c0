use serde::{Deserialize, Serialize};

use crate::core::types::Biome;
use crate::session::expedition::ExpeditionSession;
use crate::session::minigame::{MiniGameSession, TargetPosition};

/// What the pet is doing right now. Exactly one holds at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    Sleeping,
    MiniGame(MiniGameSession),
    Expedition(ExpeditionSession),
}

impl SessionStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_sleeping(&self) -> bool {
        matches!(self, Self::Sleeping)
    }

    /// True while a timed sub-session is running
    pub fn in_session(&self) -> bool {
        matches!(self, Self::MiniGame(_) | Self::Expedition(_))
    }

    pub fn summary(&self) -> StatusSummary {
        match self {
            Self::Idle => StatusSummary::Idle,
            Self::Sleeping => StatusSummary::Sleeping,
            Self::MiniGame(round) => StatusSummary::MiniGame {
                time_left: round.time_left(),
                earned: round.earned(),
                target: round.target(),
            },
            Self::Expedition(trip) => StatusSummary::Expedition {
                biome: trip.biome(),
                seconds_remaining: trip.seconds_remaining(),
            },
        }
    }
}

/// Timer-free copy of the status for renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum StatusSummary {
    Idle,
    Sleeping,
    MiniGame {
        time_left: u32,
        earned: u64,
        target: TargetPosition,
    },
    Expedition {
        biome: Biome,
        seconds_remaining: u32,
    },
}

impl StatusSummary {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sleeping => "sleeping",
            Self::MiniGame { .. } => "mini-game",
            Self::Expedition { .. } => "expedition",
        }
    }
}
