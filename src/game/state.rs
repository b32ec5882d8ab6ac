//! Shared session state: board, roster, RNG streams and the event log.
//!
//! ## Dual representation
//!
//! Positions are stored twice: on the entity and as an id in a cell. Only the
//! methods here change either side, and each does both in one step:
//! 1. clear the old cell's id
//! 2. update the entity's stored position
//! 3. set the new cell's id
//!
//! [`GameState::check_invariants`] verifies the two sides agree.

use im::Vector;

use super::event::{EventRecord, GameEvent};
use super::GameResult;
use crate::board::{Board, Lane, Position, Terrain};
use crate::core::{EngineError, Faction, GameConfig, GameRng, HeroId, MonsterId};
use crate::entities::{Hero, Monster, MonsterTemplate, Roster};

/// Everything the rules operate on.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Balance and rule variant.
    pub config: GameConfig,

    /// Terrain and occupancy.
    pub board: Board,

    /// Heroes and active monsters.
    pub roster: Roster,

    /// Current round, starting at 1.
    pub round: u32,

    /// Stream for dodge rolls.
    pub(crate) combat_rng: GameRng,

    /// Stream for spawn template selection.
    pub(crate) spawn_rng: GameRng,

    /// Append-only event log.
    events: Vector<EventRecord>,
}

impl GameState {
    /// Assemble a state and put every hero on its stored position.
    ///
    /// Fails with `Invariant` if a hero's cell is inaccessible or shared with
    /// another hero.
    pub fn new(
        config: GameConfig,
        board: Board,
        roster: Roster,
        rng: &GameRng,
    ) -> Result<Self, EngineError> {
        let mut state = Self {
            config,
            board,
            roster,
            round: 1,
            combat_rng: rng.for_context("combat"),
            spawn_rng: rng.for_context("spawn"),
            events: Vector::new(),
        };

        let placements: Vec<_> = state.roster.heroes().map(|h| (h.id, h.position())).collect();
        for (id, pos) in placements {
            if !state.board.is_accessible(pos) {
                return Err(EngineError::Invariant(format!("{id} starts on inaccessible {pos}")));
            }
            if let Some(other) = state.board.hero_at(pos) {
                return Err(EngineError::Invariant(format!("{id} and {other} share {pos}")));
            }
            state.board.set_hero(pos, Some(id));
        }

        Ok(state)
    }

    // === Event log ===

    /// Append an event for the current round.
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push_back(EventRecord::new(self.round, event));
    }

    /// Full event log.
    #[must_use]
    pub fn events(&self) -> &Vector<EventRecord> {
        &self.events
    }

    /// Events logged after the first `from` entries.
    pub fn events_since(&self, from: usize) -> impl Iterator<Item = &EventRecord> {
        self.events.iter().skip(from)
    }

    // === Lookups ===

    /// Hero by id.
    pub fn hero(&self, id: HeroId) -> Result<&Hero, EngineError> {
        self.roster.try_hero(id)
    }

    /// Monster by id.
    pub fn monster(&self, id: MonsterId) -> Result<&Monster, EngineError> {
        self.roster.try_monster(id)
    }

    // === Occupancy transitions ===

    /// Move a hero to `to`, keeping cell and entity in step.
    ///
    /// Returns the previous position. Does not check game rules.
    pub fn relocate_hero(&mut self, id: HeroId, to: Position) -> Result<Position, EngineError> {
        if self.board.cell_at(to).is_none() {
            return Err(EngineError::Invariant(format!("{id} relocated off board to {to}")));
        }
        let from = self.roster.try_hero(id)?.position();
        if self.board.hero_at(from) != Some(id) {
            return Err(EngineError::Invariant(format!("{id} not found at its cell {from}")));
        }

        self.board.set_hero(from, None);
        self.roster.try_hero_mut(id)?.set_position(to);
        self.board.set_hero(to, Some(id));
        Ok(from)
    }

    /// Move a hero and adopt a new lane.
    pub(crate) fn relocate_hero_to_lane(
        &mut self,
        id: HeroId,
        to: Position,
        lane: Lane,
    ) -> Result<Position, EngineError> {
        let from = self.relocate_hero(id, to)?;
        self.roster.try_hero_mut(id)?.set_lane(lane);
        Ok(from)
    }

    /// Move a monster to `to`, keeping cell and entity in step.
    pub fn relocate_monster(&mut self, id: MonsterId, to: Position) -> Result<Position, EngineError> {
        if self.board.cell_at(to).is_none() {
            return Err(EngineError::Invariant(format!("{id} relocated off board to {to}")));
        }
        let from = self.roster.try_monster(id)?.position();
        if self.board.monster_at(from) != Some(id) {
            return Err(EngineError::Invariant(format!("{id} not found at its cell {from}")));
        }

        self.board.set_monster(from, None);
        self.roster.try_monster_mut(id)?.set_position(to);
        self.board.set_monster(to, Some(id));
        Ok(from)
    }

    /// Instantiate a template and put the monster on `at`.
    ///
    /// Fails with `Invariant` if `at` is off board or already holds a monster;
    /// spawn logic checks that first.
    pub fn add_monster(
        &mut self,
        template: &MonsterTemplate,
        level: u32,
        lane: Lane,
        at: Position,
    ) -> Result<MonsterId, EngineError> {
        match self.board.cell_at(at) {
            None => return Err(EngineError::Invariant(format!("monster placed off board at {at}"))),
            Some(cell) if cell.monster().is_some() => {
                return Err(EngineError::Invariant(format!("two monsters placed on {at}")));
            }
            Some(_) => {}
        }

        let id = self.roster.alloc_monster_id();
        let mut monster = Monster::from_template(id, template, level, lane);
        monster.set_position(at);
        self.roster.insert_monster(monster);
        self.board.set_monster(at, Some(id));
        Ok(id)
    }

    /// Remove a monster from its cell and from the roster.
    pub fn remove_monster(&mut self, id: MonsterId) -> Result<Monster, EngineError> {
        let pos = self.roster.try_monster(id)?.position();
        if self.board.monster_at(pos) == Some(id) {
            self.board.set_monster(pos, None);
        } else {
            return Err(EngineError::Invariant(format!("{id} not found at its cell {pos}")));
        }
        self.roster.remove_monster(id).ok_or(EngineError::UnknownMonster(id))
    }

    /// Turn the obstacle at `pos` into plain ground.
    pub fn clear_obstacle(&mut self, pos: Position) -> Result<(), EngineError> {
        if self.board.terrain(pos) != Some(Terrain::Obstacle) {
            return Err(EngineError::Invariant(format!("no obstacle to clear at {pos}")));
        }
        self.board.set_terrain(pos, Terrain::Plain);
        Ok(())
    }

    // === Terminal conditions ===

    /// Victory if any hero stands on the monster home row, defeat if any
    /// monster stands on the hero home row.
    ///
    /// Victory is checked first; both cannot arise from the same move.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        let heroes_goal = Faction::Heroes.opponent().home_row();
        let monsters_goal = Faction::Monsters.opponent().home_row();
        if self.roster.heroes().any(|h| h.position().row == heroes_goal) {
            return Some(GameResult::Victory);
        }
        if self.roster.monsters().any(|m| m.position().row == monsters_goal) {
            return Some(GameResult::Defeat);
        }
        None
    }

    // === Invariants ===

    /// Verify that cells and entities agree on every position.
    pub fn check_invariants(&self) -> Result<(), EngineError> {
        for (pos, cell) in self.board.cells() {
            if let Some(id) = cell.hero() {
                let hero = self.roster.try_hero(id)?;
                if hero.position() != pos {
                    return Err(EngineError::Invariant(format!(
                        "cell {pos} holds {id} which thinks it is at {}",
                        hero.position()
                    )));
                }
            }
            if let Some(id) = cell.monster() {
                let monster = self.roster.try_monster(id)?;
                if monster.position() != pos {
                    return Err(EngineError::Invariant(format!(
                        "cell {pos} holds {id} which thinks it is at {}",
                        monster.position()
                    )));
                }
            }
        }

        for hero in self.roster.heroes() {
            if self.board.hero_at(hero.position()) != Some(hero.id) {
                return Err(EngineError::Invariant(format!(
                    "{} is missing from its cell {}",
                    hero.id,
                    hero.position()
                )));
            }
        }
        for monster in self.roster.monsters() {
            if self.board.monster_at(monster.position()) != Some(monster.id) {
                return Err(EngineError::Invariant(format!(
                    "{} is missing from its cell {}",
                    monster.id,
                    monster.position()
                )));
            }
        }

        Ok(())
    }
}
