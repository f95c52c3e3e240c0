//! Hunger and morale, the two needs that decay over time

use serde::{Deserialize, Serialize};

/// Upper bound for both vitals
pub const VITAL_MAX: u8 = 100;

/// Current needs of the pet
///
/// 100 = fully satisfied, 0 = neglected. Never persisted: every load
/// starts a fresh session at full stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub hunger: u8,
    pub morale: u8,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            hunger: VITAL_MAX,
            morale: VITAL_MAX,
        }
    }
}

impl Vitals {
    pub fn new(hunger: u8, morale: u8) -> Self {
        Self {
            hunger: hunger.min(VITAL_MAX),
            morale: morale.min(VITAL_MAX),
        }
    }

    /// One decay tick, floored at zero
    pub fn decay(&mut self, amount: u8) {
        self.hunger = self.hunger.saturating_sub(amount);
        self.morale = self.morale.saturating_sub(amount);
    }

    /// Raise a vital, capped at the max. Returns false if it was already full.
    pub fn restore(&mut self, vital: VitalKind, amount: u8) -> bool {
        let slot = match vital {
            VitalKind::Hunger => &mut self.hunger,
            VitalKind::Morale => &mut self.morale,
        };
        if *slot >= VITAL_MAX {
            return false;
        }
        *slot = slot.saturating_add(amount).min(VITAL_MAX);
        true
    }

    /// Deduct morale only when the full cost is available
    pub fn spend_morale(&mut self, cost: u8) -> bool {
        if self.morale < cost {
            return false;
        }
        self.morale -= cost;
        true
    }

    pub fn mood(&self) -> Mood {
        Mood::from_vitals(self.hunger, self.morale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VitalKind {
    Hunger,
    Morale,
}

/// Derived three-way mood, recomputed on every read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
}

impl Mood {
    /// happy when the average is at least 60, sad below 30.
    /// Compared on the sum to stay in integers.
    pub fn from_vitals(hunger: u8, morale: u8) -> Self {
        let sum = hunger as u16 + morale as u16;
        if sum >= 120 {
            Mood::Happy
        } else if sum < 60 {
            Mood::Sad
        } else {
            Mood::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_full() {
        let v = Vitals::default();
        assert_eq!((v.hunger, v.morale), (100, 100));
        assert_eq!(v.mood(), Mood::Happy);
    }

    #[test]
    fn test_decay_floors_at_zero() {
        let mut v = Vitals::new(3, 1);
        v.decay(2);
        assert_eq!((v.hunger, v.morale), (1, 0));
        v.decay(2);
        assert_eq!((v.hunger, v.morale), (0, 0));
    }

    #[test]
    fn test_restore_caps_and_refuses_when_full() {
        let mut v = Vitals::new(95, 100);
        assert!(v.restore(VitalKind::Hunger, 15));
        assert_eq!(v.hunger, 100);
        assert!(!v.restore(VitalKind::Hunger, 15));
        assert!(!v.restore(VitalKind::Morale, 15));
    }

    #[test]
    fn test_spend_morale_is_all_or_nothing() {
        let mut v = Vitals::new(100, 15);
        assert!(!v.spend_morale(20));
        assert_eq!(v.morale, 15);
        let mut v = Vitals::new(100, 20);
        assert!(v.spend_morale(20));
        assert_eq!(v.morale, 0);
    }

    #[test]
    fn test_mood_boundaries() {
        assert_eq!(Mood::from_vitals(60, 60), Mood::Happy);
        assert_eq!(Mood::from_vitals(59, 60), Mood::Neutral); // avg 59.5
        assert_eq!(Mood::from_vitals(59, 59), Mood::Neutral);
        assert_eq!(Mood::from_vitals(30, 30), Mood::Neutral);
        assert_eq!(Mood::from_vitals(29, 30), Mood::Sad); // avg 29.5
        assert_eq!(Mood::from_vitals(29, 29), Mood::Sad);
        assert_eq!(Mood::from_vitals(100, 20), Mood::Happy);
        assert_eq!(Mood::from_vitals(0, 0), Mood::Sad);
    }
}
