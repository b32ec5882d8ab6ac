//! Heroes: the player-controlled party members.
//!
//! A hero is never destroyed during a session. At zero HP it faints, sits out
//! until the end of the round, and is then revived at its nexus.
//!
//! ## Progression
//!
//! A hero levels up whenever its experience reaches `10 * level`. Each level
//! resets HP to the new maximum (`100 * level`), raises mana by 10%, the
//! class's two favored skills by 10% and the remaining skill by 5%.

use serde::{Deserialize, Serialize};

use super::items::{Armor, Inventory, Potion, PotionEffect, Weapon};
use super::template::HeroTemplate;
use crate::board::{Lane, Position};
use crate::core::{HeroId, RuleViolation};

/// HP granted per level.
pub const HP_PER_LEVEL: f64 = 100.0;

/// Experience needed per level to reach the next one.
pub const XP_PER_LEVEL_UP: u32 = 10;

/// The three trainable skills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    /// Adds to attack damage.
    Strength,
    /// Spell power; boosted by bush terrain.
    Dexterity,
    /// Dodge chance; boosted by cave terrain.
    Agility,
}

/// Hero class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroClass {
    /// Favors strength and agility.
    Warrior,
    /// Favors dexterity and agility.
    Sorcerer,
    /// Favors strength and dexterity.
    Paladin,
}

impl HeroClass {
    /// Skills that grow faster on level up.
    #[must_use]
    pub const fn favored(self) -> [Skill; 2] {
        match self {
            HeroClass::Warrior => [Skill::Strength, Skill::Agility],
            HeroClass::Sorcerer => [Skill::Dexterity, Skill::Agility],
            HeroClass::Paladin => [Skill::Strength, Skill::Dexterity],
        }
    }
}

impl std::fmt::Display for HeroClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HeroClass::Warrior => "Warrior",
            HeroClass::Sorcerer => "Sorcerer",
            HeroClass::Paladin => "Paladin",
        };
        f.write_str(name)
    }
}

/// A hero's stat block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroStats {
    /// Current level, starting at 1.
    pub level: u32,
    /// Current HP. Regeneration may push it above the level maximum.
    pub hp: f64,
    /// Current mana.
    pub mana: f64,
    /// Mana restored on revive.
    pub base_mana: f64,
    /// Strength.
    pub strength: f64,
    /// Dexterity.
    pub dexterity: f64,
    /// Agility.
    pub agility: f64,
}

impl HeroStats {
    /// HP at full health for the current level.
    #[must_use]
    pub fn max_hp(&self) -> f64 {
        f64::from(self.level) * HP_PER_LEVEL
    }

    /// Value of a skill.
    #[must_use]
    pub fn skill(&self, skill: Skill) -> f64 {
        match skill {
            Skill::Strength => self.strength,
            Skill::Dexterity => self.dexterity,
            Skill::Agility => self.agility,
        }
    }

    fn skill_mut(&mut self, skill: Skill) -> &mut f64 {
        match skill {
            Skill::Strength => &mut self.strength,
            Skill::Dexterity => &mut self.dexterity,
            Skill::Agility => &mut self.agility,
        }
    }
}

/// A party member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    /// Party index.
    pub id: HeroId,
    /// Display name.
    pub name: String,
    /// Class.
    pub class: HeroClass,
    /// Stat block.
    pub stats: HeroStats,
    /// Gold carried.
    pub gold: f64,
    /// Experience toward the next level.
    pub experience: u32,
    /// Equipped weapon.
    pub weapon: Option<Weapon>,
    /// Equipped armor.
    pub armor: Option<Armor>,
    /// Carried items.
    pub inventory: Inventory,

    position: Position,
    lane: Lane,
    fainted: bool,
}

impl Hero {
    /// Create a hero from a template, standing on its lane's spawn cell.
    ///
    /// The hero is not placed on any board; the caller does that.
    #[must_use]
    pub fn from_template(id: HeroId, template: &HeroTemplate, lane: Lane) -> Self {
        let level = template.level.max(1);
        let stats = HeroStats {
            level,
            hp: f64::from(level) * HP_PER_LEVEL,
            mana: template.mana,
            base_mana: template.mana,
            strength: template.strength,
            dexterity: template.dexterity,
            agility: template.agility,
        };

        Self {
            id,
            name: template.name.clone(),
            class: template.class,
            stats,
            gold: template.gold,
            experience: template.experience,
            weapon: None,
            armor: None,
            inventory: Inventory::new(),
            position: lane.hero_spawn(),
            lane,
            fainted: false,
        }
    }

    // === Placement ===

    /// Current cell.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Lane the hero currently belongs to.
    #[must_use]
    pub fn lane(&self) -> Lane {
        self.lane
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn set_lane(&mut self, lane: Lane) {
        self.lane = lane;
    }

    // === Health ===

    /// Whether the hero is out of the fight until revived.
    #[must_use]
    pub fn is_fainted(&self) -> bool {
        self.fainted
    }

    /// Subtract HP. Returns true if this damage made the hero faint.
    pub fn take_damage(&mut self, amount: f64) -> bool {
        if self.fainted {
            return false;
        }
        self.stats.hp -= amount.max(0.0);
        if self.stats.hp <= 0.0 {
            self.stats.hp = 0.0;
            self.fainted = true;
            return true;
        }
        false
    }

    /// End-of-round regeneration: HP and mana grow by `rate` of their
    /// current value. Not clamped to the maximum.
    pub fn regenerate(&mut self, rate: f64) {
        if self.fainted {
            return;
        }
        self.stats.hp *= 1.0 + rate;
        self.stats.mana *= 1.0 + rate;
    }

    /// Restore a fainted hero to full HP and base mana.
    pub fn revive(&mut self) {
        self.fainted = false;
        self.stats.hp = self.stats.max_hp();
        self.stats.mana = self.stats.mana.max(self.stats.base_mana);
    }

    // === Combat stats ===

    /// Damage of the equipped weapon, 0 when bare-handed.
    #[must_use]
    pub fn weapon_damage(&self) -> f64 {
        self.weapon.as_ref().map_or(0.0, |w| w.damage)
    }

    /// Reduction of the equipped armor, 0 when unarmored.
    #[must_use]
    pub fn armor_reduction(&self) -> f64 {
        self.armor.as_ref().map_or(0.0, |a| a.reduction)
    }

    /// Skill value including a terrain multiplier for `boosted`, if any.
    #[must_use]
    pub fn effective_skill(&self, skill: Skill, boosted: Option<Skill>, multiplier: f64) -> f64 {
        let base = self.stats.skill(skill);
        if boosted == Some(skill) {
            base * multiplier
        } else {
            base
        }
    }

    // === Rewards ===

    /// Add gold.
    pub fn add_gold(&mut self, gold: f64) {
        self.gold += gold;
    }

    /// Add experience and apply every level up it unlocks.
    ///
    /// Returns the number of levels gained.
    pub fn gain_experience(&mut self, xp: u32) -> u32 {
        self.experience += xp;
        let mut gained = 0;
        while self.experience >= self.stats.level * XP_PER_LEVEL_UP {
            self.experience -= self.stats.level * XP_PER_LEVEL_UP;
            self.level_up();
            gained += 1;
        }
        gained
    }

    fn level_up(&mut self) {
        self.stats.level += 1;
        self.stats.hp = self.stats.max_hp();
        self.stats.mana *= 1.1;
        self.stats.base_mana *= 1.1;

        let favored = self.class.favored();
        for skill in [Skill::Strength, Skill::Dexterity, Skill::Agility] {
            let growth = if favored.contains(&skill) { 1.10 } else { 1.05 };
            *self.stats.skill_mut(skill) *= growth;
        }
    }

    // === Inventory ===

    /// Equip the carried weapon at `index`; the old one goes back to the bag.
    pub fn equip_weapon(&mut self, index: usize) -> Result<(), RuleViolation> {
        let weapon = self.inventory.take_weapon(index).ok_or(RuleViolation::NoSuchItem)?;
        if let Some(old) = self.weapon.replace(weapon) {
            self.inventory.weapons.push(old);
        }
        Ok(())
    }

    /// Equip the carried armor at `index`; the old one goes back to the bag.
    pub fn equip_armor(&mut self, index: usize) -> Result<(), RuleViolation> {
        let armor = self.inventory.take_armor(index).ok_or(RuleViolation::NoSuchItem)?;
        if let Some(old) = self.armor.replace(armor) {
            self.inventory.armor.push(old);
        }
        Ok(())
    }

    /// Drink the potion at `index`.
    pub fn use_potion(&mut self, index: usize) -> Result<Potion, RuleViolation> {
        let potion = self.inventory.take_potion(index).ok_or(RuleViolation::NoSuchItem)?;
        match potion.effect {
            PotionEffect::Health => self.stats.hp += potion.amount,
            PotionEffect::Mana => self.stats.mana += potion.amount,
            PotionEffect::Skill(skill) => *self.stats.skill_mut(skill) += potion.amount,
        }
        Ok(potion)
    }
}

impl std::fmt::Display for Hero {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] Lv{} HP {:.0} MP {:.0} STR {:.0} DEX {:.0} AGI {:.0} Gold {:.0} at {}",
            self.name,
            self.class,
            self.stats.level,
            self.stats.hp,
            self.stats.mana,
            self.stats.strength,
            self.stats.dexterity,
            self.stats.agility,
            self.gold,
            self.position,
        )
    }
}
