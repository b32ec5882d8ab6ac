//! Teleport and recall.
//!
//! Teleport drops a hero beside a living ally in another lane. The candidate
//! cells are tried in a fixed order: left of the ally, right of the ally,
//! then one step toward the hero home row. The first accessible empty cell
//! wins and the hero adopts the ally's lane.
//!
//! Recall returns a hero to its current lane's spawn cell.

use smallvec::SmallVec;

use crate::board::{Direction, Position};
use crate::core::{ActionError, EngineError, HeroId, RuleViolation};
use crate::game::{GameEvent, GameState};

/// Cells beside `ally` a teleporting hero may land on, in preference order.
#[must_use]
pub fn teleport_candidates(ally: Position) -> SmallVec<[Position; 3]> {
    let (row, col) = (ally.row as isize, ally.col as isize);
    [
        Position::checked(row, col - 1),
        Position::checked(row, col + 1),
        ally.step(Direction::South),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Living allies in another lane that `hero` could teleport to.
pub fn teleport_targets(state: &GameState, hero: HeroId) -> Result<Vec<HeroId>, EngineError> {
    let lane = state.hero(hero)?.lane();
    Ok(state
        .roster
        .heroes()
        .filter(|h| h.id != hero && !h.is_fainted() && h.lane() != lane)
        .map(|h| h.id)
        .collect())
}

/// Landing cell for a teleport, without changing anything.
pub fn check_teleport(
    state: &GameState,
    hero: HeroId,
    ally: HeroId,
) -> Result<Position, ActionError> {
    let mover = state.hero(hero)?;
    let target = state.roster.hero(ally).ok_or(RuleViolation::NoTeleportTarget)?;
    if ally == hero || target.is_fainted() || target.lane() == mover.lane() {
        return Err(RuleViolation::NoTeleportTarget.into());
    }

    teleport_candidates(target.position())
        .into_iter()
        .find(|&pos| {
            state
                .board
                .cell_at(pos)
                .is_some_and(|cell| cell.is_accessible() && cell.is_empty())
        })
        .ok_or_else(|| RuleViolation::NoTeleportSlot.into())
}

/// Teleport `hero` beside `ally`. Returns the landing cell.
pub fn teleport(state: &mut GameState, hero: HeroId, ally: HeroId) -> Result<Position, ActionError> {
    let to = check_teleport(state, hero, ally)?;
    let lane = state.hero(ally)?.lane();

    let from = state.relocate_hero_to_lane(hero, to, lane)?;
    state.emit(GameEvent::Teleported {
        hero,
        ally,
        from,
        to,
        lane,
    });
    log::debug!("{hero} teleported {from} -> {to} ({lane})");

    if let Some(terrain) = state.board.terrain(to) {
        super::movement::announce_terrain(state, hero, terrain);
    }
    Ok(to)
}

/// Return `hero` to its lane's spawn cell. Returns the spawn cell.
///
/// Fails with `RecallBlocked` if another hero stands there. A hero already on
/// its spawn cell succeeds without moving.
pub fn recall(state: &mut GameState, hero: HeroId) -> Result<Position, ActionError> {
    let spawn = state.hero(hero)?.lane().hero_spawn();
    match state.board.hero_at(spawn) {
        Some(other) if other != hero => return Err(RuleViolation::RecallBlocked.into()),
        _ => {}
    }

    let from = state.relocate_hero(hero, spawn)?;
    state.emit(GameEvent::Recalled {
        hero,
        from,
        to: spawn,
    });
    log::debug!("{hero} recalled to {spawn}");
    Ok(spawn)
}
