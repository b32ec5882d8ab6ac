//! Movement rules: hero steps, obstacle clearing and monster advance.
//!
//! ## Hero move checks
//!
//! Checked in this order, first failure wins:
//! 1. target on the board (`OffBoard`)
//! 2. obstacle on the target (reported, not an error; the hero may clear it)
//! 3. zone of control (`LaneBlocked`)
//! 4. accessible terrain (`Blocked`)
//! 5. no other hero (`OccupiedByAlly`)
//! 6. no monster (`OccupiedByEnemy`)
//!
//! ## Zone of control
//!
//! A living monster in the hero's lane that is level with or ahead of the
//! hero (row <= hero row) forbids any move to a row above its own. Heroes
//! cannot slip past a monster; they must defeat it first.

use crate::board::{Direction, Position, Terrain};
use crate::core::{ActionError, EngineError, HeroId, MonsterId, RuleViolation};
use crate::game::{GameEvent, GameState};

/// What a validated hero move would do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveCheck {
    /// The hero can step onto `to`.
    Clear(Position),
    /// An obstacle stands on `at`; the hero may spend its turn clearing it.
    Obstacle(Position),
}

/// Result of an executed hero move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The hero moved.
    Moved {
        /// Previous cell.
        from: Position,
        /// New cell.
        to: Position,
        /// Terrain of the new cell.
        terrain: Terrain,
    },
    /// Nothing moved; an obstacle is in the way.
    ObstacleAhead {
        /// Obstacle cell.
        at: Position,
    },
}

/// Monster enforcing zone of control over a move to `target`, if any.
pub fn lane_blocker(
    state: &GameState,
    hero: HeroId,
    target: Position,
) -> Result<Option<MonsterId>, EngineError> {
    let hero = state.hero(hero)?;
    let here = hero.position();
    if target.row >= here.row {
        return Ok(None);
    }

    let blocker = state
        .roster
        .monsters()
        .filter(|m| !m.is_fainted() && m.lane() == hero.lane())
        .filter(|m| m.position().row <= here.row)
        .find(|m| target.row < m.position().row)
        .map(|m| m.id);
    Ok(blocker)
}

/// Validate a hero move without changing anything.
pub fn check_move(
    state: &GameState,
    hero: HeroId,
    direction: Direction,
) -> Result<MoveCheck, ActionError> {
    let from = state.hero(hero)?.position();
    let to = from.step(direction).ok_or(RuleViolation::OffBoard)?;
    let cell = state.board.cell_at(to).ok_or(RuleViolation::OffBoard)?;

    if cell.terrain() == Terrain::Obstacle {
        return Ok(MoveCheck::Obstacle(to));
    }
    if let Some(blocker) = lane_blocker(state, hero, to)? {
        return Err(RuleViolation::LaneBlocked(blocker).into());
    }
    if !cell.is_accessible() {
        return Err(RuleViolation::Blocked.into());
    }
    if cell.hero().is_some() {
        return Err(RuleViolation::OccupiedByAlly.into());
    }
    if cell.monster().is_some() {
        return Err(RuleViolation::OccupiedByEnemy.into());
    }

    Ok(MoveCheck::Clear(to))
}

/// Move a hero one step.
///
/// An obstacle ahead is returned as [`MoveOutcome::ObstacleAhead`] with the
/// state untouched; the caller decides whether to [`clear_obstacle`].
pub fn move_hero(
    state: &mut GameState,
    hero: HeroId,
    direction: Direction,
) -> Result<MoveOutcome, ActionError> {
    let to = match check_move(state, hero, direction)? {
        MoveCheck::Obstacle(at) => return Ok(MoveOutcome::ObstacleAhead { at }),
        MoveCheck::Clear(to) => to,
    };

    let from = state.relocate_hero(hero, to)?;
    state.emit(GameEvent::HeroMoved { hero, from, to });
    log::debug!("{hero} moved {from} -> {to}");

    let terrain = state.board.terrain(to).unwrap_or(Terrain::Plain);
    announce_terrain(state, hero, terrain);

    Ok(MoveOutcome::Moved { from, to, terrain })
}

/// Report boosting terrain under a hero that just arrived.
pub(crate) fn announce_terrain(state: &mut GameState, hero: HeroId, terrain: Terrain) {
    if let Some(skill) = terrain.boost() {
        let applied = state.config.ruleset.terrain_bonus_applies();
        state.emit(GameEvent::TerrainEntered {
            hero,
            terrain,
            skill,
            applied,
        });
    }
}

/// Turn an obstacle into plain ground. The hero does not move.
pub fn clear_obstacle(state: &mut GameState, hero: HeroId, at: Position) -> Result<(), EngineError> {
    state.hero(hero)?;
    state.clear_obstacle(at)?;
    state.emit(GameEvent::ObstacleCleared { hero, at });
    log::debug!("{hero} cleared obstacle at {at}");
    Ok(())
}

/// Advance a monster one row toward the hero home row.
///
/// The monster stays put when the cell below is off board, inaccessible or
/// occupied. Returns the new position if it moved.
pub fn advance_monster(
    state: &mut GameState,
    monster: MonsterId,
) -> Result<Option<Position>, EngineError> {
    let from = state.monster(monster)?.position();
    let Some(to) = from.step(Direction::South) else {
        return Ok(None);
    };
    let free = state
        .board
        .cell_at(to)
        .is_some_and(|cell| cell.is_accessible() && cell.is_empty());
    if !free {
        return Ok(None);
    }

    state.relocate_monster(monster, to)?;
    state.emit(GameEvent::MonsterMoved { monster, from, to });
    Ok(Some(to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Lane};
    use crate::core::{GameConfig, GameRng};
    use crate::entities::{Hero, HeroClass, HeroTemplate, MonsterKind, MonsterTemplate, Roster};

    fn state() -> GameState {
        let heroes = Lane::ALL
            .iter()
            .enumerate()
            .map(|(i, &lane)| {
                let template = HeroTemplate::new(format!("H{i}"), HeroClass::Sorcerer);
                Hero::from_template(HeroId(i as u8), &template, lane)
            })
            .collect();
        GameState::new(GameConfig::default(), Board::open(), Roster::new(heroes), &GameRng::new(3))
            .unwrap()
    }

    fn spawn(state: &mut GameState, lane: usize, at: Position) -> MonsterId {
        let template = MonsterTemplate::new("Casper", MonsterKind::Spirit, 1);
        state.add_monster(&template, 1, Lane::new(lane), at).unwrap()
    }

    #[test]
    fn test_move_north() {
        let mut state = state();
        let outcome = move_hero(&mut state, HeroId(0), Direction::North).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                from: Position::new(7, 0),
                to: Position::new(6, 0),
                terrain: Terrain::Plain,
            }
        );
        state.check_invariants().unwrap();
    }

    #[test]
    fn test_off_board_and_wall() {
        let mut state = state();
        assert!(matches!(
            move_hero(&mut state, HeroId(0), Direction::West),
            Err(ActionError::Rule(RuleViolation::OffBoard))
        ));
        assert!(matches!(
            move_hero(&mut state, HeroId(0), Direction::South),
            Err(ActionError::Rule(RuleViolation::OffBoard))
        ));
        // Column 2 is a wall
        state.relocate_hero(HeroId(0), Position::new(5, 1)).unwrap();
        assert!(matches!(
            move_hero(&mut state, HeroId(0), Direction::East),
            Err(ActionError::Rule(RuleViolation::Blocked))
        ));
    }

    #[test]
    fn test_zone_of_control() {
        let mut state = state();
        state.relocate_hero(HeroId(0), Position::new(5, 0)).unwrap();
        let monster = spawn(&mut state, 0, Position::new(4, 1));

        // Row 4 is level with the monster, allowed
        assert_eq!(lane_blocker(&state, HeroId(0), Position::new(4, 0)).unwrap(), None);
        move_hero(&mut state, HeroId(0), Direction::North).unwrap();

        // Row 3 is behind it
        assert!(matches!(
            move_hero(&mut state, HeroId(0), Direction::North),
            Err(ActionError::Rule(RuleViolation::LaneBlocked(m))) if m == monster
        ));
    }

    #[test]
    fn test_zone_of_control_ignores_other_lanes_and_monsters_behind() {
        let mut state = state();
        state.relocate_hero(HeroId(0), Position::new(4, 0)).unwrap();
        spawn(&mut state, 1, Position::new(2, 3));
        spawn(&mut state, 0, Position::new(6, 1));

        assert_eq!(lane_blocker(&state, HeroId(0), Position::new(3, 0)).unwrap(), None);
    }

    #[test]
    fn test_occupied() {
        let mut state = state();
        state.relocate_hero(HeroId(1), Position::new(6, 3)).unwrap();
        state.relocate_hero(HeroId(2), Position::new(7, 3)).unwrap();
        assert!(matches!(
            move_hero(&mut state, HeroId(2), Direction::North),
            Err(ActionError::Rule(RuleViolation::OccupiedByAlly))
        ));

        spawn(&mut state, 1, Position::new(5, 3));
        assert!(matches!(
            move_hero(&mut state, HeroId(1), Direction::North),
            Err(ActionError::Rule(RuleViolation::OccupiedByEnemy))
        ));
    }

    #[test]
    fn test_obstacle_reported_then_cleared() {
        let mut state = state();
        state.board.set_terrain(Position::new(6, 0), Terrain::Obstacle);

        let outcome = move_hero(&mut state, HeroId(0), Direction::North).unwrap();
        assert_eq!(outcome, MoveOutcome::ObstacleAhead { at: Position::new(6, 0) });
        assert_eq!(state.hero(HeroId(0)).unwrap().position(), Position::new(7, 0));

        clear_obstacle(&mut state, HeroId(0), Position::new(6, 0)).unwrap();
        assert_eq!(state.board.terrain(Position::new(6, 0)), Some(Terrain::Plain));
        assert_eq!(state.hero(HeroId(0)).unwrap().position(), Position::new(7, 0));
    }

    #[test]
    fn test_terrain_announced() {
        let mut state = state();
        state.board.set_terrain(Position::new(6, 3), Terrain::Koulou);
        move_hero(&mut state, HeroId(1), Direction::North).unwrap();

        let last = state.events().last().unwrap();
        assert!(matches!(
            last.event,
            GameEvent::TerrainEntered {
                terrain: Terrain::Koulou,
                applied: false,
                ..
            }
        ));
    }

    #[test]
    fn test_advance_monster() {
        let mut state = state();
        let monster = spawn(&mut state, 2, Position::new(5, 7));

        assert_eq!(advance_monster(&mut state, monster).unwrap(), Some(Position::new(6, 7)));
        // Hero 2 stands on (7, 6), not (7, 7)
        assert_eq!(advance_monster(&mut state, monster).unwrap(), Some(Position::new(7, 7)));
        assert_eq!(advance_monster(&mut state, monster).unwrap(), None);
        state.check_invariants().unwrap();
    }

    #[test]
    fn test_advance_monster_blocked_by_hero() {
        let mut state = state();
        let monster = spawn(&mut state, 0, Position::new(6, 0));
        assert_eq!(advance_monster(&mut state, monster).unwrap(), None);
        assert_eq!(state.monster(monster).unwrap().position(), Position::new(6, 0));
    }
}
