//! Entity identification for heroes and monsters.
//!
//! Entities live in arenas owned by the [`Roster`](crate::entities::Roster).
//! Board cells never hold entities directly; they store these identifiers,
//! which are resolved against the roster on demand.
//!
//! ## ID Layout
//!
//! - `HeroId`: index into the party (0..3), stable for the whole session.
//! - `MonsterId`: allocated monotonically at spawn time and never reused,
//!   so a stale id of a defeated monster always fails to resolve.
//!
//! ```
//! use lane_valor::core::{HeroId, MonsterId};
//!
//! let hero = HeroId::new(2);
//! assert_eq!(hero.index(), 2);
//! assert_eq!(format!("{}", MonsterId(7)), "Monster(7)");
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a party member (its index in the party).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HeroId(pub u8);

impl HeroId {
    /// Create a hero ID from a party index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Party index of this hero.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for HeroId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hero({})", self.0)
    }
}

/// Identifier of a spawned monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

impl MonsterId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for MonsterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Monster({})", self.0)
    }
}

/// The two sides of the fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// The player-controlled party.
    Heroes,
    /// The AI-controlled monsters.
    Monsters,
}

impl Faction {
    /// Row this faction starts from and defends.
    #[must_use]
    pub const fn home_row(self) -> usize {
        match self {
            Faction::Heroes => crate::board::HERO_HOME_ROW,
            Faction::Monsters => crate::board::MONSTER_HOME_ROW,
        }
    }

    /// The opposing faction.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Faction::Heroes => Faction::Monsters,
            Faction::Monsters => Faction::Heroes,
        }
    }
}
