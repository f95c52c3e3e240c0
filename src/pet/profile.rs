//! Pet identity fixed at adoption

use serde::{Deserialize, Serialize};

use crate::core::error::{PetError, Result};
use crate::core::types::{Species, ThemeId};

/// Longest allowed name, in characters
pub const MAX_NAME_CHARS: usize = 16;

/// Immutable identity of the adopted pet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetProfile {
    name: String,
    species: Species,
    theme: ThemeId,
}

impl PetProfile {
    /// Validate and build a profile. The name is trimmed and capped at
    /// 16 characters; only an empty name is rejected.
    pub fn new(name: &str, species: Species, theme: ThemeId) -> Result<Self> {
        let name = normalize_name(name).ok_or_else(|| PetError::InvalidName(name.to_string()))?;
        Ok(Self { name, species, theme })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn theme(&self) -> ThemeId {
        self.theme
    }
}

/// Trim and cap a name, or `None` if nothing is left
pub fn normalize_name(name: &str) -> Option<String> {
    let capped: String = name.trim().chars().take(MAX_NAME_CHARS).collect();
    let capped = capped.trim_end();
    (!capped.is_empty()).then(|| capped.to_string())
}

/// Output of the adoption form, produced once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdoptionForm {
    pub name: String,
    pub species: Species,
    pub theme: ThemeId,
}

impl AdoptionForm {
    pub fn new(name: impl Into<String>, species: Species, theme: ThemeId) -> Self {
        Self {
            name: name.into(),
            species,
            theme,
        }
    }

    pub fn into_profile(self) -> Result<PetProfile> {
        PetProfile::new(&self.name, self.species, self.theme)
    }
}
