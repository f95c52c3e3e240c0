//! Timed sub-sessions that temporarily lock out the primary actions

pub mod expedition;
pub mod minigame;
pub mod status;

pub use expedition::{draw_outcome, ExpeditionOutcome, ExpeditionSession, TripTick};
pub use minigame::{MiniGameSession, RoundTick, TargetPosition};
pub use status::{SessionStatus, StatusSummary};
