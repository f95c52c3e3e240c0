//! Persisted snapshot of identity and economy
//!
//! Vitals and session status are deliberately absent: a reload always
//! wakes the pet at full stats and idle.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::Result;
use crate::core::types::{Accessory, Species, ThemeId};
use crate::economy::{ArtifactRecord, ArtifactShelf, Economy, Wallet};
use crate::pet::{normalize_name, PetProfile};
use crate::render::colors::palette;

/// On-disk shape:
/// `{name, species, theme, coins, accessories: [id], artifacts: [{biome, name, timestamp}]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetSnapshot {
    pub name: String,
    pub species: Species,
    pub theme: ThemeId,
    pub coins: u64,
    #[serde(default)]
    pub accessories: Vec<Accessory>,
    #[serde(default)]
    pub artifacts: Vec<ArtifactRecord>,
}

impl PetSnapshot {
    pub fn capture(profile: &PetProfile, economy: &Economy) -> Self {
        Self {
            name: profile.name().to_string(),
            species: profile.species(),
            theme: profile.theme(),
            coins: economy.wallet.coins(),
            accessories: economy.wallet.accessories().to_vec(),
            artifacts: economy.artifacts.records().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a stored snapshot.
    ///
    /// Returns `None` when there is no usable pet (unparseable text, or a
    /// missing/invalid name or species). Everything else falls back to
    /// defaults field by field.
    pub fn from_json(text: &str) -> Option<Self> {
        let mut snapshot = match serde_json::from_str::<PetSnapshot>(text) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::debug!("Strict snapshot parse failed ({}), recovering fields", e);
                let value: Value = serde_json::from_str(text).ok()?;
                Self::recover(&value)?
            }
        };
        // same trim and cap as adoption; only an empty name loses the pet
        snapshot.name = normalize_name(&snapshot.name)?;
        Some(snapshot)
    }

    /// Field-by-field rebuild from loosely shaped JSON
    fn recover(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let name = obj.get("name")?.as_str()?.to_string();
        let species = ["species", "type", "animal"]
            .iter()
            .filter_map(|key| obj.get(*key).and_then(Value::as_str))
            .find_map(Species::from_id)?;

        let theme = match obj.get("theme") {
            Some(value) => theme_from_value(value),
            None => obj.get("color").and_then(Value::as_str).and_then(theme_from_accent),
        }
        .unwrap_or_default();

        let coins = obj.get("coins").and_then(coins_from_value).unwrap_or(0);

        let accessories = obj
            .get("accessories")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .filter_map(Accessory::from_id)
                    .collect()
            })
            .unwrap_or_default();

        let artifacts = obj
            .get("artifacts")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| serde_json::from_value::<ArtifactRecord>(v.clone()).ok())
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            name,
            species,
            theme,
            coins,
            accessories,
            artifacts,
        })
    }

    /// Split into the immutable profile and a fresh economy
    pub fn restore(self) -> Result<(PetProfile, Economy)> {
        let profile = PetProfile::new(&self.name, self.species, self.theme)?;
        let wallet = Wallet::from_parts(self.coins, self.accessories);
        let artifacts = ArtifactShelf::from_records(self.artifacts);
        Ok((profile, Economy::from_parts(wallet, artifacts)))
    }
}

/// Theme may be stored as an id or as the full palette object
fn theme_from_value(value: &Value) -> Option<ThemeId> {
    match value {
        Value::String(id) => ThemeId::from_id(id),
        Value::Object(palette) => palette.get("id").and_then(Value::as_str).and_then(ThemeId::from_id),
        _ => None,
    }
}

/// Older saves kept only the accent color, e.g. `"#38bdf8"`
fn theme_from_accent(hex: &str) -> Option<ThemeId> {
    ThemeId::ALL
        .into_iter()
        .find(|t| palette(*t).accent.hex().eq_ignore_ascii_case(hex.trim()))
}

fn coins_from_value(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    value.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f.floor() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Biome;

    fn sample() -> PetSnapshot {
        PetSnapshot {
            name: "Mochi".into(),
            species: Species::Cat,
            theme: ThemeId::Blue,
            coins: 35,
            accessories: vec![Accessory::PartyHat],
            artifacts: vec![ArtifactRecord::new(Biome::CrystalCaves, 1_700_000_000_000)],
        }
    }

    #[test]
    fn test_json_shape() {
        let json: Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["species"], "cat");
        assert_eq!(json["theme"], "blue");
        assert_eq!(json["accessories"][0], "partyHat");
        assert_eq!(json["artifacts"][0]["biome"], "crystalCaves");
        assert_eq!(json["artifacts"][0]["name"], "Glow Crystal");
    }

    #[test]
    fn test_missing_collections_default_empty() {
        let snap = PetSnapshot::from_json(r#"{"name":"Rex","species":"dino","theme":"green","coins":3}"#).unwrap();
        assert!(snap.accessories.is_empty());
        assert!(snap.artifacts.is_empty());
        assert_eq!(snap.coins, 3);
    }

    #[test]
    fn test_garbage_means_no_pet() {
        assert_eq!(PetSnapshot::from_json("not json"), None);
        assert_eq!(PetSnapshot::from_json("[1,2,3]"), None);
        assert_eq!(PetSnapshot::from_json(r#"{"species":"cat"}"#), None);
        assert_eq!(PetSnapshot::from_json(r#"{"name":"","species":"cat"}"#), None);
        assert_eq!(PetSnapshot::from_json(r#"{"name":"Mochi","species":"dragon"}"#), None);
    }

    #[test]
    fn test_bad_fields_fall_back_individually() {
        let text = r#"{
            "name": "Mochi",
            "type": "slime",
            "theme": {"id": "green", "label": "Slime Green", "accent": "4ade80"},
            "coins": -12,
            "accessories": ["partyHat", "jetpack", 7, "partyHat"],
            "artifacts": [
                {"biome": "sunkenRuins", "name": "Ancient Coin", "timestamp": 5},
                {"biome": "moon", "name": "?", "timestamp": 6},
                "junk"
            ]
        }"#;
        let snap = PetSnapshot::from_json(text).unwrap();
        assert_eq!(snap.species, Species::Slime);
        assert_eq!(snap.theme, ThemeId::Green);
        assert_eq!(snap.coins, 0);
        assert_eq!(snap.artifacts.len(), 1);

        let (_, economy) = snap.restore().unwrap();
        assert_eq!(economy.wallet.accessories(), &[Accessory::PartyHat]);
    }

    #[test]
    fn test_long_legacy_name_is_capped_not_dropped() {
        let text = r##"{"name":"Sir Fluffington III","type":"cat","color":"#f472b6","coins":500,"accessories":["crown"]}"##;
        let snap = PetSnapshot::from_json(text).unwrap();
        assert_eq!(snap.name, "Sir Fluffington");
        assert_eq!(snap.coins, 500);
        assert_eq!(snap.accessories, vec![Accessory::Crown]);

        // strict shape goes through the same cap
        let strict = r#"{"name":"  A name well over sixteen  ","species":"dino","theme":"blue","coins":1}"#;
        assert_eq!(PetSnapshot::from_json(strict).unwrap().name, "A name well over");
    }

    #[test]
    fn test_legacy_color_picks_theme() {
        let blue = r##"{"name":"Bluey","type":"cat","color":"#38bdf8","coins":0}"##;
        assert_eq!(PetSnapshot::from_json(blue).unwrap().theme, ThemeId::Blue);

        let green = r##"{"name":"Gloop","animal":"slime","color":"#4ADE80"}"##;
        assert_eq!(PetSnapshot::from_json(green).unwrap().theme, ThemeId::Green);

        let odd = r##"{"name":"Rex","type":"dino","color":"#123456"}"##;
        assert_eq!(PetSnapshot::from_json(odd).unwrap().theme, ThemeId::Pink);
    }

    #[test]
    fn test_unknown_theme_uses_default() {
        let snap = PetSnapshot::from_json(r#"{"name":"Mochi","species":"cat","theme":"plaid","coins":1}"#).unwrap();
        assert_eq!(snap.theme, ThemeId::Pink);
    }
}
