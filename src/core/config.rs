//! Game configuration types.
//!
//! Balance numbers are configuration, not structure. A game is built from a
//! `GameConfig`, which fixes:
//! - `TerrainWeights`: proportions of interior terrain kinds
//! - `Ruleset`: the closed set of rule variants
//! - combat, regeneration, spawn and reward constants
//!
//! Defaults reproduce the standard three-lane match.

use serde::{Deserialize, Serialize};

use crate::board::Terrain;

/// Relative weights for interior terrain generation.
///
/// Walls and nexus rows are fixed by the board layout; every other cell rolls
/// one of these kinds once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainWeights {
    /// Open ground.
    pub plain: f32,
    /// Dexterity terrain.
    pub bush: f32,
    /// Agility terrain.
    pub cave: f32,
    /// Strength terrain.
    pub koulou: f32,
    /// Destructible obstacle.
    pub obstacle: f32,
}

impl TerrainWeights {
    /// Terrain kinds in the order weights are rolled.
    pub const KINDS: [Terrain; 5] = [
        Terrain::Plain,
        Terrain::Bush,
        Terrain::Cave,
        Terrain::Koulou,
        Terrain::Obstacle,
    ];

    /// Weights in `KINDS` order.
    #[must_use]
    pub fn as_array(&self) -> [f32; 5] {
        [self.plain, self.bush, self.cave, self.koulou, self.obstacle]
    }

    /// Only open ground; handy for hand-built scenarios.
    #[must_use]
    pub fn all_plain() -> Self {
        Self {
            plain: 1.0,
            bush: 0.0,
            cave: 0.0,
            koulou: 0.0,
            obstacle: 0.0,
        }
    }
}

impl Default for TerrainWeights {
    fn default() -> Self {
        Self {
            plain: 40.0,
            bush: 15.0,
            cave: 15.0,
            koulou: 15.0,
            obstacle: 15.0,
        }
    }
}

/// Rule variant, selected once when the game is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ruleset {
    /// Terrain bonuses are announced only and monsters never attack.
    #[default]
    Valor,
    /// Terrain bonuses boost the hero while standing on the terrain, and
    /// monsters attack an adjacent hero instead of advancing.
    Siege,
}

impl Ruleset {
    /// Whether standing on boosting terrain changes effective stats.
    #[must_use]
    pub const fn terrain_bonus_applies(self) -> bool {
        matches!(self, Ruleset::Siege)
    }

    /// Whether monsters attack adjacent heroes during their phase.
    #[must_use]
    pub const fn monsters_attack(self) -> bool {
        matches!(self, Ruleset::Siege)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rule variant.
    pub ruleset: Ruleset,

    /// Interior terrain proportions.
    pub terrain: TerrainWeights,

    /// Multiplier from `strength + weapon damage` to raw hero damage.
    pub attack_scale: f64,

    /// Multiplier applied to defense (monster) or armor (hero) before it is
    /// subtracted from raw damage.
    pub defense_scale: f64,

    /// Multiplier from monster base damage to raw monster damage.
    pub monster_attack_scale: f64,

    /// Multiplier from hero agility to dodge probability.
    pub hero_dodge_scale: f64,

    /// Fraction of current HP and mana regained at the end of each round.
    pub regen_rate: f64,

    /// Multiplier applied to a hero's stat while standing on its terrain.
    pub terrain_bonus: f64,

    /// Rounds between monster waves.
    pub spawn_interval: u32,

    /// Gold granted per level of a defeated monster.
    pub gold_per_level: f64,

    /// Experience granted per level of a defeated monster.
    pub xp_per_level: u32,
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the rule variant.
    #[must_use]
    pub fn with_ruleset(mut self, ruleset: Ruleset) -> Self {
        self.ruleset = ruleset;
        self
    }

    /// Set terrain proportions.
    #[must_use]
    pub fn with_terrain(mut self, terrain: TerrainWeights) -> Self {
        self.terrain = terrain;
        self
    }

    /// Set the attack and defense multipliers.
    #[must_use]
    pub fn with_combat_scales(mut self, attack_scale: f64, defense_scale: f64) -> Self {
        self.attack_scale = attack_scale;
        self.defense_scale = defense_scale;
        self
    }

    /// Set the number of rounds between monster waves.
    ///
    /// Panics if `interval` is zero.
    #[must_use]
    pub fn with_spawn_interval(mut self, interval: u32) -> Self {
        assert!(interval > 0, "Spawn interval must be at least 1 round");
        self.spawn_interval = interval;
        self
    }

    /// Set the end-of-round regeneration fraction.
    #[must_use]
    pub fn with_regen_rate(mut self, rate: f64) -> Self {
        self.regen_rate = rate;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ruleset: Ruleset::Valor,
            terrain: TerrainWeights::default(),
            attack_scale: 0.05,
            defense_scale: 0.02,
            monster_attack_scale: 0.05,
            hero_dodge_scale: 0.002,
            regen_rate: 0.10,
            terrain_bonus: 1.10,
            spawn_interval: 8,
            gold_per_level: 500.0,
            xp_per_level: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = GameConfig::default();

        assert_eq!(config.ruleset, Ruleset::Valor);
        assert_eq!(config.spawn_interval, 8);
        assert!((config.attack_scale - 0.05).abs() < 1e-12);
        assert!((config.defense_scale - 0.02).abs() < 1e-12);
        assert!((config.gold_per_level - 500.0).abs() < 1e-12);
        assert_eq!(config.xp_per_level, 2);
        assert!(config.terrain.obstacle > 0.0);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_ruleset(Ruleset::Siege)
            .with_terrain(TerrainWeights::all_plain())
            .with_combat_scales(0.1, 0.5)
            .with_spawn_interval(4)
            .with_regen_rate(0.2);

        assert_eq!(config.ruleset, Ruleset::Siege);
        assert_eq!(config.terrain, TerrainWeights::all_plain());
        assert!((config.attack_scale - 0.1).abs() < 1e-12);
        assert_eq!(config.spawn_interval, 4);
    }

    #[test]
    #[should_panic(expected = "Spawn interval must be at least 1 round")]
    fn test_zero_spawn_interval() {
        let _ = GameConfig::new().with_spawn_interval(0);
    }

    #[test]
    fn test_ruleset_flags() {
        assert!(!Ruleset::Valor.monsters_attack());
        assert!(!Ruleset::Valor.terrain_bonus_applies());
        assert!(Ruleset::Siege.monsters_attack());
        assert!(Ruleset::Siege.terrain_bonus_applies());
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new().with_ruleset(Ruleset::Siege);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
