//! Snapshot/persistence bridge
//!
//! Writes are fire-and-forget: a failed write is logged and swallowed, so
//! in-memory state stays authoritative. A failed or unusable read means
//! "no existing pet".

pub mod snapshot;
pub mod store;

pub use snapshot::PetSnapshot;
pub use store::{FileStore, MemoryStore, SaveStore};

pub struct PersistenceBridge {
    store: Box<dyn SaveStore>,
    key: String,
}

impl PersistenceBridge {
    pub fn new(store: Box<dyn SaveStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &dyn SaveStore {
        self.store.as_ref()
    }

    /// Read the saved pet, if there is a usable one
    pub fn load(&self) -> Option<PetSnapshot> {
        let text = match self.store.read(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Could not read save {:?}: {}", self.key, e);
                return None;
            }
        };
        let snapshot = PetSnapshot::from_json(&text);
        if snapshot.is_none() {
            tracing::warn!("Save {:?} is unusable; starting adoption", self.key);
        }
        snapshot
    }

    /// Write a snapshot. Returns whether it landed; never fails the caller.
    pub fn save(&mut self, snapshot: &PetSnapshot) -> bool {
        let result = snapshot
            .to_json()
            .and_then(|json| self.store.write(&self.key, &json));
        match result {
            Ok(()) => {
                tracing::debug!("Saved {} ({} coins)", snapshot.name, snapshot.coins);
                true
            }
            Err(e) => {
                tracing::warn!("Save failed, progress kept in memory only: {}", e);
                false
            }
        }
    }

    pub fn clear(&mut self) {
        if let Err(e) = self.store.clear(&self.key) {
            tracing::warn!("Could not clear save {:?}: {}", self.key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Accessory, Biome, Species, ThemeId};
    use crate::economy::ArtifactRecord;

    fn snapshot() -> PetSnapshot {
        PetSnapshot {
            name: "Mochi".into(),
            species: Species::Cat,
            theme: ThemeId::Pink,
            coins: 10,
            accessories: vec![Accessory::Crown, Accessory::PartyHat],
            artifacts: vec![
                ArtifactRecord::new(Biome::SunkenRuins, 1_700_000_000_123),
                ArtifactRecord::new(Biome::DragonPeak, 1_700_000_450_000),
            ],
        }
    }

    #[test]
    fn test_save_then_load() {
        let mut bridge = PersistenceBridge::new(Box::new(MemoryStore::new()), "pixel-pet-v2");
        assert!(bridge.load().is_none());
        assert!(bridge.save(&snapshot()));
        assert_eq!(bridge.load(), Some(snapshot()));
        bridge.clear();
        assert!(bridge.load().is_none());
    }

    #[test]
    fn test_failed_write_is_swallowed() {
        let store = MemoryStore::new().with_failing_writes();
        let mut bridge = PersistenceBridge::new(Box::new(store), "pixel-pet-v2");
        assert!(!bridge.save(&snapshot()));
        assert!(bridge.load().is_none());
    }

    #[test]
    fn test_corrupt_save_reads_as_no_pet() {
        let store = MemoryStore::with_entry("pixel-pet-v2", "{\"name\": \"Mo");
        let bridge = PersistenceBridge::new(Box::new(store), "pixel-pet-v2");
        assert!(bridge.load().is_none());
    }
}
