//! The entity arena: party and active monsters.
//!
//! The roster owns every hero and monster. The board refers to them by id
//! only. Monster iteration follows spawn order so that the monster phase is
//! deterministic.

use rustc_hash::FxHashMap;

use super::hero::Hero;
use super::monster::Monster;
use crate::core::{EngineError, HeroId, MonsterId};

/// Party plus active monsters.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    /// Party in lane order; `HeroId` is the index.
    heroes: Vec<Hero>,

    /// Active monsters by id.
    monsters: FxHashMap<MonsterId, Monster>,

    /// Spawn order of active monsters.
    order: Vec<MonsterId>,

    /// Next monster id to allocate.
    next_monster_id: u32,
}

impl Roster {
    /// Create a roster for a party. No monsters yet.
    #[must_use]
    pub fn new(heroes: Vec<Hero>) -> Self {
        Self {
            heroes,
            ..Self::default()
        }
    }

    // === Heroes ===

    /// Number of heroes in the party.
    #[must_use]
    pub fn party_size(&self) -> usize {
        self.heroes.len()
    }

    /// Iterate over the party in order.
    pub fn heroes(&self) -> impl Iterator<Item = &Hero> {
        self.heroes.iter()
    }

    /// All hero ids in party order.
    pub fn hero_ids(&self) -> impl Iterator<Item = HeroId> + '_ {
        self.heroes.iter().map(|h| h.id)
    }

    /// Get a hero.
    #[must_use]
    pub fn hero(&self, id: HeroId) -> Option<&Hero> {
        self.heroes.get(id.index())
    }

    /// Get a mutable hero.
    pub fn hero_mut(&mut self, id: HeroId) -> Option<&mut Hero> {
        self.heroes.get_mut(id.index())
    }

    /// Get a hero or fail with `UnknownHero`.
    pub fn try_hero(&self, id: HeroId) -> Result<&Hero, EngineError> {
        self.hero(id).ok_or(EngineError::UnknownHero(id))
    }

    /// Get a mutable hero or fail with `UnknownHero`.
    pub fn try_hero_mut(&mut self, id: HeroId) -> Result<&mut Hero, EngineError> {
        self.hero_mut(id).ok_or(EngineError::UnknownHero(id))
    }

    /// Highest level in the party, at least 1.
    #[must_use]
    pub fn max_hero_level(&self) -> u32 {
        self.heroes.iter().map(|h| h.stats.level).max().unwrap_or(1).max(1)
    }

    // === Monsters ===

    /// Reserve the next monster id.
    pub fn alloc_monster_id(&mut self) -> MonsterId {
        let id = MonsterId(self.next_monster_id);
        self.next_monster_id += 1;
        id
    }

    /// Add a monster to the active roster.
    ///
    /// Panics if a monster with the same id is already active.
    pub fn insert_monster(&mut self, monster: Monster) {
        let id = monster.id;
        if self.monsters.insert(id, monster).is_some() {
            panic!("Monster {:?} already in roster", id);
        }
        self.order.push(id);
    }

    /// Remove a monster from the active roster.
    pub fn remove_monster(&mut self, id: MonsterId) -> Option<Monster> {
        let monster = self.monsters.remove(&id)?;
        self.order.retain(|&m| m != id);
        Some(monster)
    }

    /// Number of active monsters.
    #[must_use]
    pub fn monster_count(&self) -> usize {
        self.order.len()
    }

    /// Active monster ids in spawn order.
    #[must_use]
    pub fn monster_ids(&self) -> Vec<MonsterId> {
        self.order.clone()
    }

    /// Iterate over active monsters in spawn order.
    pub fn monsters(&self) -> impl Iterator<Item = &Monster> {
        self.order.iter().filter_map(|id| self.monsters.get(id))
    }

    /// Get a monster.
    #[must_use]
    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.get(&id)
    }

    /// Get a mutable monster.
    pub fn monster_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.monsters.get_mut(&id)
    }

    /// Get a monster or fail with `UnknownMonster`.
    pub fn try_monster(&self, id: MonsterId) -> Result<&Monster, EngineError> {
        self.monster(id).ok_or(EngineError::UnknownMonster(id))
    }

    /// Get a mutable monster or fail with `UnknownMonster`.
    pub fn try_monster_mut(&mut self, id: MonsterId) -> Result<&mut Monster, EngineError> {
        self.monster_mut(id).ok_or(EngineError::UnknownMonster(id))
    }
}
