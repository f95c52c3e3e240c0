//! Wallet - coin balance and owned accessories

use serde::{Deserialize, Serialize};

use crate::core::types::Accessory;

/// Coins plus the one-time upgrades bought with them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    coins: u64,
    /// Owned accessories in purchase order, each at most once
    accessories: Vec<Accessory>,
}

impl Wallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted parts, dropping duplicate accessories
    pub fn from_parts(coins: u64, accessories: impl IntoIterator<Item = Accessory>) -> Self {
        let mut wallet = Self {
            coins,
            accessories: Vec::new(),
        };
        for item in accessories {
            if !wallet.owns(item) {
                wallet.accessories.push(item);
            }
        }
        wallet
    }

    pub fn coins(&self) -> u64 {
        self.coins
    }

    pub fn accessories(&self) -> &[Accessory] {
        &self.accessories
    }

    pub fn owns(&self, item: Accessory) -> bool {
        self.accessories.contains(&item)
    }

    pub fn deposit(&mut self, amount: u64) {
        self.coins = self.coins.saturating_add(amount);
    }

    pub fn can_afford(&self, item: Accessory) -> bool {
        self.coins >= item.cost()
    }

    /// Buy an accessory, returns true if successful.
    /// Refused when already owned or unaffordable; never partially applies.
    pub fn purchase(&mut self, item: Accessory) -> bool {
        if self.owns(item) || !self.can_afford(item) {
            return false;
        }
        self.coins -= item.cost();
        self.accessories.push(item);
        true
    }

    /// The accessory to draw: highest tier among those owned
    pub fn displayed_accessory(&self) -> Option<Accessory> {
        self.accessories.iter().copied().max_by_key(|a| a.tier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_requires_funds() {
        let mut wallet = Wallet::new();
        assert!(!wallet.purchase(Accessory::PartyHat));
        assert_eq!(wallet.coins(), 0);
        assert!(wallet.accessories().is_empty());

        wallet.deposit(60);
        assert!(wallet.purchase(Accessory::PartyHat));
        assert_eq!(wallet.coins(), 10);
        assert_eq!(wallet.accessories(), &[Accessory::PartyHat]);
    }

    #[test]
    fn test_second_purchase_is_noop() {
        let mut wallet = Wallet::new();
        wallet.deposit(500);
        assert!(wallet.purchase(Accessory::Crown));
        assert!(!wallet.purchase(Accessory::Crown));
        assert_eq!(wallet.coins(), 250);
        assert_eq!(wallet.accessories(), &[Accessory::Crown]);
    }

    #[test]
    fn test_displayed_accessory_prefers_higher_tier() {
        let mut wallet = Wallet::new();
        assert_eq!(wallet.displayed_accessory(), None);
        wallet.deposit(1000);
        wallet.purchase(Accessory::WizardHat);
        wallet.purchase(Accessory::PartyHat);
        assert_eq!(wallet.displayed_accessory(), Some(Accessory::WizardHat));
        wallet.purchase(Accessory::Crown);
        assert_eq!(wallet.displayed_accessory(), Some(Accessory::Crown));
    }

    #[test]
    fn test_from_parts_dedups() {
        let wallet = Wallet::from_parts(
            5,
            [Accessory::PartyHat, Accessory::Crown, Accessory::PartyHat],
        );
        assert_eq!(wallet.accessories(), &[Accessory::PartyHat, Accessory::Crown]);
    }
}
