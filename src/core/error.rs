//! Error types.
//!
//! Two tiers:
//! - [`RuleViolation`]: the requested action breaks a game rule. Nothing
//!   changed; the same hero is asked again.
//! - [`EngineError`]: internal inconsistency or API misuse. Fatal for the
//!   session.
//!
//! [`ActionError`] carries either tier out of rule functions so they can use
//! `?` on both.

use std::path::PathBuf;

use thiserror::Error;

use super::entity::{HeroId, MonsterId};

/// A rejected action. Never fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RuleViolation {
    /// Target coordinate is outside the board.
    #[error("cannot move off the board")]
    OffBoard,
    /// Target cell is a wall or an obstacle that has not been cleared.
    #[error("terrain is inaccessible")]
    Blocked,
    /// A monster ahead in the lane prevents advancing past it.
    #[error("cannot move behind {0}")]
    LaneBlocked(MonsterId),
    /// Another hero stands on the target cell.
    #[error("another hero is standing there")]
    OccupiedByAlly,
    /// A monster stands on the target cell.
    #[error("cannot walk through a monster")]
    OccupiedByEnemy,
    /// No enemy within reach, or the chosen target is not in reach.
    #[error("no enemy in range")]
    NoTargetInRange,
    /// Teleport target is fainted, the mover itself, or in the same lane.
    #[error("teleport target must be a living ally in another lane")]
    NoTeleportTarget,
    /// None of the cells beside the teleport target is free.
    #[error("no open space beside the teleport target")]
    NoTeleportSlot,
    /// Another hero stands on the lane's spawn cell.
    #[error("nexus spawn is blocked")]
    RecallBlocked,
    /// The market can only be entered from a nexus cell.
    #[error("market is only reachable from a nexus cell")]
    NotOnNexus,
    /// Inventory index does not exist.
    #[error("no such item")]
    NoSuchItem,
    /// The named target does not exist on the board.
    #[error("no such target")]
    InvalidTarget,
}

/// Fatal engine failure.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Cell and entity disagree about a position.
    #[error("internal consistency fault: {0}")]
    Invariant(String),
    /// A hero id did not resolve.
    #[error("unknown hero {0}")]
    UnknownHero(HeroId),
    /// A monster id did not resolve (probably already defeated).
    #[error("unknown monster {0}")]
    UnknownMonster(MonsterId),
    /// The submitted decision does not answer the pending prompt.
    #[error("decision does not match the pending prompt: {0}")]
    UnexpectedDecision(&'static str),
    /// Input was submitted after the session ended.
    #[error("the session is already over")]
    SessionOver,
    /// Game could not be assembled.
    #[error("invalid setup: {0}")]
    Setup(String),
    /// Template data could not be loaded.
    #[error(transparent)]
    Asset(#[from] AssetError),
    /// Writing session output failed.
    #[error("output failed: {0}")]
    Output(#[from] std::io::Error),
}

/// Failure while loading hero or monster templates.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Source file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// A data line could not be parsed.
    #[error("line {line}: {reason}")]
    Malformed {
        /// 1-based line number in the source.
        line: usize,
        /// What was wrong.
        reason: String,
    },
    /// The source held a header but no entries.
    #[error("no entries in template source")]
    Empty,
}

/// Either tier, as returned by rule functions.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Rule violation; retry with another action.
    #[error(transparent)]
    Rule(#[from] RuleViolation),
    /// Fatal engine failure.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_violation_messages() {
        assert_eq!(RuleViolation::OffBoard.to_string(), "cannot move off the board");
        assert_eq!(
            RuleViolation::LaneBlocked(MonsterId(3)).to_string(),
            "cannot move behind Monster(3)"
        );
    }

    #[test]
    fn test_action_error_from() {
        let err: ActionError = RuleViolation::Blocked.into();
        assert!(matches!(err, ActionError::Rule(RuleViolation::Blocked)));

        let err: ActionError = EngineError::UnknownHero(HeroId(1)).into();
        assert!(matches!(err, ActionError::Engine(EngineError::UnknownHero(_))));
    }

    #[test]
    fn test_asset_error_wraps() {
        let err: EngineError = AssetError::Empty.into();
        assert_eq!(err.to_string(), "no entries in template source");
    }
}
