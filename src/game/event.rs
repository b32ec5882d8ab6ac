//! Structured record of everything that happens in a session.
//!
//! The engine never prints. Every state change appends a `GameEvent` to the
//! state's log; renderers and tests read the log instead of parsing text.

use serde::{Deserialize, Serialize};

use crate::board::{Lane, Position, Terrain};
use crate::core::{HeroId, MonsterId};
use crate::entities::Skill;

use super::GameResult;

/// Either side of an attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combatant {
    /// A hero.
    Hero(HeroId),
    /// A monster.
    Monster(MonsterId),
}

/// Something that happened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new round began.
    RoundStarted {
        /// Round number, starting at 1.
        round: u32,
    },
    /// A hero stepped to an adjacent cell.
    HeroMoved {
        /// Mover.
        hero: HeroId,
        /// Previous cell.
        from: Position,
        /// New cell.
        to: Position,
    },
    /// A hero stepped onto boosting terrain.
    TerrainEntered {
        /// Hero.
        hero: HeroId,
        /// Terrain kind.
        terrain: Terrain,
        /// Skill the terrain boosts.
        skill: Skill,
        /// Whether the ruleset applies the bonus to combat.
        applied: bool,
    },
    /// An obstacle was turned into open ground.
    ObstacleCleared {
        /// Hero that spent its turn.
        hero: HeroId,
        /// Cleared cell.
        at: Position,
    },
    /// An attack missed.
    AttackDodged {
        /// Attacker.
        attacker: Combatant,
        /// Defender that dodged.
        defender: Combatant,
    },
    /// An attack landed.
    DamageDealt {
        /// Attacker.
        attacker: Combatant,
        /// Defender.
        defender: Combatant,
        /// HP removed.
        amount: f64,
    },
    /// A monster reached zero HP and left the board.
    MonsterDefeated {
        /// Defeated monster.
        monster: MonsterId,
        /// Hero that landed the final blow.
        by: HeroId,
        /// Gold granted.
        gold: f64,
        /// Experience granted.
        experience: u32,
    },
    /// A hero gained a level.
    LevelUp {
        /// Hero.
        hero: HeroId,
        /// New level.
        level: u32,
    },
    /// A hero reached zero HP.
    HeroFainted {
        /// Hero.
        hero: HeroId,
        /// Monster that landed the blow.
        by: MonsterId,
    },
    /// A hero teleported beside an ally in another lane.
    Teleported {
        /// Mover.
        hero: HeroId,
        /// Ally it joined.
        ally: HeroId,
        /// Previous cell.
        from: Position,
        /// New cell.
        to: Position,
        /// Lane adopted.
        lane: Lane,
    },
    /// A hero returned to its lane's spawn cell.
    Recalled {
        /// Hero.
        hero: HeroId,
        /// Previous cell.
        from: Position,
        /// Spawn cell.
        to: Position,
    },
    /// A hero visited the market.
    MarketVisited {
        /// Hero.
        hero: HeroId,
    },
    /// A hero equipped a weapon.
    WeaponEquipped {
        /// Hero.
        hero: HeroId,
        /// Weapon name.
        name: String,
    },
    /// A hero equipped armor.
    ArmorEquipped {
        /// Hero.
        hero: HeroId,
        /// Armor name.
        name: String,
    },
    /// A hero drank a potion.
    PotionUsed {
        /// Hero.
        hero: HeroId,
        /// Potion name.
        name: String,
    },
    /// A hero's status was requested.
    HeroInfo {
        /// Hero.
        hero: HeroId,
        /// One-line status.
        summary: String,
    },
    /// A monster advanced one row.
    MonsterMoved {
        /// Monster.
        monster: MonsterId,
        /// Previous cell.
        from: Position,
        /// New cell.
        to: Position,
    },
    /// A fainted monster was cleared from the board.
    MonsterRemoved {
        /// Monster.
        monster: MonsterId,
    },
    /// A living hero regenerated at round end.
    HeroRegenerated {
        /// Hero.
        hero: HeroId,
        /// HP after regeneration.
        hp: f64,
        /// Mana after regeneration.
        mana: f64,
    },
    /// A fainted hero was revived.
    HeroRevived {
        /// Hero.
        hero: HeroId,
        /// Cell it stands on after the forced recall.
        at: Position,
    },
    /// A monster entered the board.
    MonsterSpawned {
        /// New monster.
        monster: MonsterId,
        /// Lane.
        lane: Lane,
        /// Spawn cell.
        at: Position,
        /// Assigned level.
        level: u32,
    },
    /// A lane's spawn cell was occupied, so that lane got no monster.
    SpawnBlocked {
        /// Lane skipped.
        lane: Lane,
    },
    /// The session reached a terminal state.
    GameEnded {
        /// How it ended.
        result: GameResult,
    },
}

/// A logged event with the round it happened in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Round number.
    pub round: u32,
    /// What happened.
    pub event: GameEvent,
}

impl EventRecord {
    /// Create a record.
    #[must_use]
    pub fn new(round: u32, event: GameEvent) -> Self {
        Self { round, event }
    }
}
