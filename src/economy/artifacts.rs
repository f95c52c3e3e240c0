//! Collected expedition rewards

use serde::{Deserialize, Serialize};

use crate::core::types::Biome;

/// One artifact brought back from a successful expedition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    pub biome: Biome,
    pub name: String,
    /// Unix milliseconds at acquisition
    pub timestamp: i64,
}

impl ArtifactRecord {
    pub fn new(biome: Biome, timestamp: i64) -> Self {
        Self {
            biome,
            name: biome.reward_name().to_string(),
            timestamp,
        }
    }
}

/// Append-only artifact collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactShelf {
    records: Vec<ArtifactRecord>,
}

impl ArtifactShelf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ArtifactRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: ArtifactRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ArtifactRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn count_from(&self, biome: Biome) -> usize {
        self.records.iter().filter(|r| r.biome == biome).count()
    }
}
