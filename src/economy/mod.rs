//! Economy - currency, upgrades and collectibles
//!
//! Everything in here survives a reload. Each mutation bumps `revision`
//! so the persistence bridge can tell when a save is due.

pub mod artifacts;
pub mod wallet;

pub use artifacts::{ArtifactRecord, ArtifactShelf};
pub use wallet::Wallet;

use crate::core::types::Accessory;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Economy {
    pub wallet: Wallet,
    pub artifacts: ArtifactShelf,
    revision: u64,
}

impl Economy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(wallet: Wallet, artifacts: ArtifactShelf) -> Self {
        Self {
            wallet,
            artifacts,
            revision: 0,
        }
    }

    /// Incremented on every successful mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn credit(&mut self, amount: u64) {
        if amount == 0 {
            return;
        }
        self.wallet.deposit(amount);
        self.revision += 1;
    }

    pub fn purchase(&mut self, item: Accessory) -> bool {
        let bought = self.wallet.purchase(item);
        if bought {
            self.revision += 1;
        }
        bought
    }

    pub fn add_artifact(&mut self, record: ArtifactRecord) {
        self.artifacts.push(record);
        self.revision += 1;
    }
}
