//! Stat templates for heroes and monsters.
//!
//! Templates are static data (usually loaded by an `AssetLoader`). Heroes are
//! created from a template once at party setup; monsters are instantiated
//! from a random catalog entry at every spawn.

use serde::{Deserialize, Serialize};

use super::hero::HeroClass;
use super::monster::MonsterKind;
use crate::core::GameRng;

/// Starting stats of a recruitable hero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroTemplate {
    /// Display name.
    pub name: String,
    /// Class.
    pub class: HeroClass,
    /// Starting level.
    pub level: u32,
    /// Starting mana.
    pub mana: f64,
    /// Starting strength.
    pub strength: f64,
    /// Starting agility.
    pub agility: f64,
    /// Starting dexterity.
    pub dexterity: f64,
    /// Starting gold.
    pub gold: f64,
    /// Starting experience.
    pub experience: u32,
}

impl HeroTemplate {
    /// Level 1 template with zeroed stats.
    pub fn new(name: impl Into<String>, class: HeroClass) -> Self {
        Self {
            name: name.into(),
            class,
            level: 1,
            mana: 0.0,
            strength: 0.0,
            agility: 0.0,
            dexterity: 0.0,
            gold: 0.0,
            experience: 0,
        }
    }

    /// Set strength, agility and dexterity (data file column order).
    #[must_use]
    pub fn with_skills(mut self, strength: f64, agility: f64, dexterity: f64) -> Self {
        self.strength = strength;
        self.agility = agility;
        self.dexterity = dexterity;
        self
    }

    /// Set starting mana.
    #[must_use]
    pub fn with_mana(mut self, mana: f64) -> Self {
        self.mana = mana;
        self
    }

    /// Set starting gold.
    #[must_use]
    pub fn with_gold(mut self, gold: f64) -> Self {
        self.gold = gold;
        self
    }

    /// Set starting level.
    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }
}

/// Monster stats before level assignment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    /// Display name.
    pub name: String,
    /// Family.
    pub kind: MonsterKind,
    /// Catalog level. Spawned monsters use the party's level instead.
    pub level: u32,
    /// Raw damage.
    pub base_damage: f64,
    /// Defense.
    pub defense: f64,
    /// Dodge probability in `[0, 1]`.
    pub dodge_chance: f64,
}

impl MonsterTemplate {
    /// Template with zeroed combat stats.
    pub fn new(name: impl Into<String>, kind: MonsterKind, level: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            level,
            base_damage: 0.0,
            defense: 0.0,
            dodge_chance: 0.0,
        }
    }

    /// Set damage, defense and dodge probability.
    #[must_use]
    pub fn with_combat(mut self, base_damage: f64, defense: f64, dodge_chance: f64) -> Self {
        self.base_damage = base_damage;
        self.defense = defense;
        self.dodge_chance = dodge_chance;
        self
    }
}

/// All monster templates a spawn wave may draw from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MonsterCatalog {
    templates: Vec<MonsterTemplate>,
}

impl MonsterCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add templates.
    pub fn extend(&mut self, templates: impl IntoIterator<Item = MonsterTemplate>) {
        self.templates.extend(templates);
    }

    /// Add one template.
    pub fn push(&mut self, template: MonsterTemplate) {
        self.templates.push(template);
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterate over templates.
    pub fn iter(&self) -> impl Iterator<Item = &MonsterTemplate> {
        self.templates.iter()
    }

    /// Uniformly random template.
    #[must_use]
    pub fn pick(&self, rng: &mut GameRng) -> Option<&MonsterTemplate> {
        rng.pick(&self.templates)
    }
}

impl FromIterator<MonsterTemplate> for MonsterCatalog {
    fn from_iter<I: IntoIterator<Item = MonsterTemplate>>(iter: I) -> Self {
        Self {
            templates: iter.into_iter().collect(),
        }
    }
}
