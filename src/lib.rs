//! Pixel Pet - virtual pet simulation engine
//!
//! A single pet with two decaying needs, a reflex mini-game that earns
//! coins, and expeditions that may bring back artifacts. The engine is a
//! plain state machine driven by a virtual clock; front-ends feed it
//! elapsed time and commands and draw from `PetView`.

pub mod app;
pub mod core;
pub mod economy;
pub mod engine;
pub mod persistence;
pub mod pet;
pub mod render;
pub mod session;

pub use app::{Command, PetApp, Phase};
pub use engine::{PetEngine, PetEvent, PetView};
