//! Hero actions and the request/response protocol of the controller.

use serde::{Deserialize, Serialize};

use super::GameResult;
use crate::board::{Direction, Position};
use crate::core::{HeroId, MonsterId, RuleViolation};
use crate::game::EventRecord;

/// Something the active hero can do on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroAction {
    /// Step one cell.
    Move(Direction),
    /// Attack a monster in reach.
    Attack(MonsterId),
    /// Jump beside an ally in another lane.
    Teleport(HeroId),
    /// Return to the lane's spawn cell.
    Recall,
    /// Visit the market. Nexus cells only; does not end the turn.
    Market,
    /// Drink a carried potion.
    UsePotion(usize),
    /// Equip a carried weapon.
    EquipWeapon(usize),
    /// Equip carried armor.
    EquipArmor(usize),
    /// Report the hero's status. Does not end the turn.
    Info,
    /// End the session immediately.
    Quit,
}

impl HeroAction {
    /// Whether a successful execution ends the hero's turn.
    #[must_use]
    pub const fn consumes_turn(self) -> bool {
        !matches!(self, HeroAction::Market | HeroAction::Info)
    }
}

/// Answer to the pending [`Prompt`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Answer to `Prompt::ChooseAction`.
    Act(HeroAction),
    /// Answer to `Prompt::ConfirmObstacle`: true spends the turn clearing it.
    ClearObstacle(bool),
}

/// What the controller is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prompt {
    /// The hero must choose an action.
    ChooseAction {
        /// Active hero.
        hero: HeroId,
    },
    /// The hero tried to move into an obstacle; clear it?
    ConfirmObstacle {
        /// Active hero.
        hero: HeroId,
        /// Obstacle cell.
        at: Position,
    },
    /// The session is over.
    Finished(GameResult),
}

/// How a submitted decision was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The hero's turn ended.
    Consumed,
    /// The action succeeded but the same hero acts again.
    NotConsumed,
    /// The action broke a rule; nothing changed and the same hero acts again.
    Rejected(RuleViolation),
    /// A follow-up question is pending (see `ValorGame::pending`).
    NeedsDecision,
}

/// Result of one `submit` call.
#[derive(Clone, Debug, PartialEq)]
pub struct StepReport {
    /// How the decision was handled.
    pub step: Step,
    /// Events logged while handling it, including any rounds it completed.
    pub events: Vec<EventRecord>,
}
