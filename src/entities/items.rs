//! Equipment and consumables carried by heroes.
//!
//! Buying and selling happens outside the engine (see `io::market`); the
//! engine only equips what a hero already carries and drinks potions.

use serde::{Deserialize, Serialize};

use super::Skill;

/// A hand weapon. Its damage adds to strength when attacking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    /// Display name.
    pub name: String,
    /// Flat damage added to strength.
    pub damage: f64,
}

impl Weapon {
    /// Create a weapon.
    pub fn new(name: impl Into<String>, damage: f64) -> Self {
        Self {
            name: name.into(),
            damage,
        }
    }
}

/// Body armor. Its reduction is subtracted from incoming monster damage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Armor {
    /// Display name.
    pub name: String,
    /// Damage reduction before scaling.
    pub reduction: f64,
}

impl Armor {
    /// Create an armor piece.
    pub fn new(name: impl Into<String>, reduction: f64) -> Self {
        Self {
            name: name.into(),
            reduction,
        }
    }
}

/// What a potion raises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PotionEffect {
    /// Current HP.
    Health,
    /// Current mana.
    Mana,
    /// A permanent skill increase.
    Skill(Skill),
}

/// A single-use potion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Potion {
    /// Display name.
    pub name: String,
    /// Stat raised.
    pub effect: PotionEffect,
    /// Amount added.
    pub amount: f64,
}

impl Potion {
    /// Create a potion.
    pub fn new(name: impl Into<String>, effect: PotionEffect, amount: f64) -> Self {
        Self {
            name: name.into(),
            effect,
            amount,
        }
    }
}

/// Items a hero carries but has not equipped.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    /// Unequipped weapons.
    pub weapons: Vec<Weapon>,
    /// Unequipped armor.
    pub armor: Vec<Armor>,
    /// Potions.
    pub potions: Vec<Potion>,
}

impl Inventory {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Nothing carried.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty() && self.armor.is_empty() && self.potions.is_empty()
    }

    /// Remove and return the weapon at `index`.
    pub fn take_weapon(&mut self, index: usize) -> Option<Weapon> {
        (index < self.weapons.len()).then(|| self.weapons.remove(index))
    }

    /// Remove and return the armor at `index`.
    pub fn take_armor(&mut self, index: usize) -> Option<Armor> {
        (index < self.armor.len()).then(|| self.armor.remove(index))
    }

    /// Remove and return the potion at `index`.
    pub fn take_potion(&mut self, index: usize) -> Option<Potion> {
        (index < self.potions.len()).then(|| self.potions.remove(index))
    }
}
