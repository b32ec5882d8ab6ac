//! A single board cell: terrain plus occupancy.

use serde::{Deserialize, Serialize};

use crate::core::{HeroId, MonsterId};
use crate::entities::Skill;

/// Terrain kind of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    /// Open ground.
    Plain,
    /// Impassable lane separator.
    Wall,
    /// Home row of either faction.
    Nexus,
    /// Boosts dexterity.
    Bush,
    /// Boosts agility.
    Cave,
    /// Boosts strength.
    Koulou,
    /// Blocks movement until cleared.
    Obstacle,
}

impl Terrain {
    /// Whether an entity may stand on this terrain.
    ///
    /// Obstacles count as inaccessible until they are cleared to `Plain`.
    #[must_use]
    pub const fn is_accessible(self) -> bool {
        !matches!(self, Terrain::Wall | Terrain::Obstacle)
    }

    /// Stat boosted while standing here, if any.
    #[must_use]
    pub const fn boost(self) -> Option<Skill> {
        match self {
            Terrain::Bush => Some(Skill::Dexterity),
            Terrain::Cave => Some(Skill::Agility),
            Terrain::Koulou => Some(Skill::Strength),
            _ => None,
        }
    }

    /// Fixed-width symbol used by the text renderer.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Terrain::Plain => "  P  ",
            Terrain::Wall => "XXXXX",
            Terrain::Nexus => "  N  ",
            Terrain::Bush => "  B  ",
            Terrain::Cave => "  C  ",
            Terrain::Koulou => "  K  ",
            Terrain::Obstacle => "  O  ",
        }
    }
}

/// One board cell.
///
/// A cell may hold a hero and a monster at the same time; the engine never
/// moves one onto the other, but the state allows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    terrain: Terrain,
    hero: Option<HeroId>,
    monster: Option<MonsterId>,
}

impl Cell {
    /// Create an empty cell.
    #[must_use]
    pub const fn new(terrain: Terrain) -> Self {
        Self {
            terrain,
            hero: None,
            monster: None,
        }
    }

    /// Terrain kind.
    #[must_use]
    pub const fn terrain(&self) -> Terrain {
        self.terrain
    }

    /// Whether an entity may stand here.
    #[must_use]
    pub const fn is_accessible(&self) -> bool {
        self.terrain.is_accessible()
    }

    /// Hero standing here.
    #[must_use]
    pub const fn hero(&self) -> Option<HeroId> {
        self.hero
    }

    /// Monster standing here.
    #[must_use]
    pub const fn monster(&self) -> Option<MonsterId> {
        self.monster
    }

    /// No hero and no monster.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.hero.is_none() && self.monster.is_none()
    }

    pub(crate) fn set_terrain(&mut self, terrain: Terrain) {
        self.terrain = terrain;
    }

    pub(crate) fn set_hero(&mut self, hero: Option<HeroId>) {
        self.hero = hero;
    }

    pub(crate) fn set_monster(&mut self, monster: Option<MonsterId>) {
        self.monster = monster;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessibility() {
        assert!(Terrain::Plain.is_accessible());
        assert!(Terrain::Nexus.is_accessible());
        assert!(Terrain::Koulou.is_accessible());
        assert!(!Terrain::Wall.is_accessible());
        assert!(!Terrain::Obstacle.is_accessible());
    }

    #[test]
    fn test_boosts() {
        assert_eq!(Terrain::Bush.boost(), Some(Skill::Dexterity));
        assert_eq!(Terrain::Cave.boost(), Some(Skill::Agility));
        assert_eq!(Terrain::Koulou.boost(), Some(Skill::Strength));
        assert_eq!(Terrain::Plain.boost(), None);
    }

    #[test]
    fn test_symbols_fixed_width() {
        for terrain in [
            Terrain::Plain,
            Terrain::Wall,
            Terrain::Nexus,
            Terrain::Bush,
            Terrain::Cave,
            Terrain::Koulou,
            Terrain::Obstacle,
        ] {
            assert_eq!(terrain.symbol().len(), 5);
        }
    }

    #[test]
    fn test_dual_occupancy() {
        let mut cell = Cell::new(Terrain::Plain);
        assert!(cell.is_empty());

        cell.set_hero(Some(HeroId(0)));
        cell.set_monster(Some(MonsterId(4)));
        assert_eq!(cell.hero(), Some(HeroId(0)));
        assert_eq!(cell.monster(), Some(MonsterId(4)));
        assert!(!cell.is_empty());
    }
}
