pub mod clock;
pub mod config;
pub mod error;
pub mod types;

pub use clock::{Clock, Fired, TimerId, TimerKind};
pub use config::PetConfig;
pub use error::{PetError, Result};
