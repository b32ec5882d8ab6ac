//! Movement, zone of control, teleport and recall integration tests.
//!
//! Scenarios are staged on a fixed board through the public state API, then
//! driven through the rule functions or the round controller.

use lane_valor::board::{Board, Direction, Lane, Position, Terrain};
use lane_valor::core::{ActionError, HeroId, MonsterId, RuleViolation};
use lane_valor::entities::{HeroClass, HeroTemplate, MonsterKind, MonsterTemplate};
use lane_valor::game::{GameEvent, HeroAction, Step, ValorGame, ValorGameBuilder};
use lane_valor::rules::{self, MoveCheck};

fn builder() -> ValorGameBuilder {
    ValorGameBuilder::new()
        .heroes([
            HeroTemplate::new("Muamman_Duathall", HeroClass::Warrior).with_skills(900.0, 500.0, 750.0),
            HeroTemplate::new("Segojan_Earthcaller", HeroClass::Sorcerer).with_skills(800.0, 500.0, 650.0),
            HeroTemplate::new("Skoraeus_Stonebones", HeroClass::Paladin).with_skills(650.0, 600.0, 350.0),
        ])
        .monsters(
            [MonsterTemplate::new("Chrysophylax", MonsterKind::Dragon, 2).with_combat(200.0, 500.0, 0.2)]
                .into_iter()
                .collect(),
        )
        .initial_wave(false)
}

fn open_game() -> ValorGame {
    builder().board(Board::open()).build(17).unwrap()
}

fn spawn(game: &mut ValorGame, lane: usize, at: Position) -> MonsterId {
    let template = MonsterTemplate::new("Desghidorrah", MonsterKind::Dragon, 1);
    game.state_mut()
        .add_monster(&template, 1, Lane::new(lane), at)
        .unwrap()
}

fn rule_error(result: Result<MoveCheck, ActionError>) -> RuleViolation {
    match result {
        Err(ActionError::Rule(violation)) => violation,
        other => panic!("expected a rule violation, got {other:?}"),
    }
}

// =============================================================================
// Zone of Control
// =============================================================================

/// A monster level with the hero forbids stepping past it.
#[test]
fn test_monster_alongside_blocks_advance() {
    let mut game = open_game();
    game.state_mut().relocate_hero(HeroId(0), Position::new(5, 0)).unwrap();
    let blocker = spawn(&mut game, 0, Position::new(5, 1));

    let state = game.state();
    assert_eq!(
        rule_error(rules::check_move(state, HeroId(0), Direction::North)),
        RuleViolation::LaneBlocked(blocker)
    );
    assert_eq!(
        rule_error(rules::check_move(state, HeroId(0), Direction::East)),
        RuleViolation::OccupiedByEnemy
    );
    // Retreating is always allowed
    assert_eq!(
        rules::check_move(state, HeroId(0), Direction::South).unwrap(),
        MoveCheck::Clear(Position::new(6, 0))
    );
}

/// A hero may walk up to the monster's row but not beyond it.
#[test]
fn test_monster_ahead_allows_approach() {
    let mut game = open_game();
    game.state_mut().relocate_hero(HeroId(0), Position::new(6, 0)).unwrap();
    let blocker = spawn(&mut game, 0, Position::new(5, 1));

    assert_eq!(
        rules::check_move(game.state(), HeroId(0), Direction::North).unwrap(),
        MoveCheck::Clear(Position::new(5, 0))
    );
    rules::move_hero(game.state_mut(), HeroId(0), Direction::North).unwrap();

    assert_eq!(
        rules::lane_blocker(game.state(), HeroId(0), Position::new(4, 0)).unwrap(),
        Some(blocker)
    );
}

/// Monsters behind the hero or in other lanes never block.
#[test]
fn test_only_lane_monsters_ahead_block() {
    let mut game = open_game();
    game.state_mut().relocate_hero(HeroId(0), Position::new(5, 0)).unwrap();
    spawn(&mut game, 0, Position::new(6, 1));
    spawn(&mut game, 1, Position::new(3, 3));

    assert_eq!(
        rules::check_move(game.state(), HeroId(0), Direction::North).unwrap(),
        MoveCheck::Clear(Position::new(4, 0))
    );
}

/// The blocker is judged by the hero's current lane, which teleport changes.
#[test]
fn test_lane_follows_teleport() {
    let mut game = open_game();
    spawn(&mut game, 1, Position::new(7, 4));
    game.state_mut().relocate_hero(HeroId(1), Position::new(4, 3)).unwrap();

    // Hero 0 lands beside hero 1 and joins lane 1
    let to = rules::teleport(game.state_mut(), HeroId(0), HeroId(1)).unwrap();
    assert_eq!(to, Position::new(4, 4));
    assert_eq!(game.state().hero(HeroId(0)).unwrap().lane(), Lane::new(1));

    // A lane 0 monster at the same height does not matter any more
    spawn(&mut game, 0, Position::new(4, 1));
    assert!(rules::check_move(game.state(), HeroId(0), Direction::North).is_ok());
}

// =============================================================================
// Terrain and Occupancy
// =============================================================================

#[test]
fn test_walls_and_allies_block() {
    let mut game = open_game();
    game.state_mut().relocate_hero(HeroId(0), Position::new(7, 1)).unwrap();
    assert_eq!(
        rule_error(rules::check_move(game.state(), HeroId(0), Direction::East)),
        RuleViolation::Blocked
    );

    game.state_mut().relocate_hero(HeroId(1), Position::new(6, 1)).unwrap();
    assert_eq!(
        rule_error(rules::check_move(game.state(), HeroId(0), Direction::North)),
        RuleViolation::OccupiedByAlly
    );
    assert_eq!(
        rule_error(rules::check_move(game.state(), HeroId(0), Direction::South)),
        RuleViolation::OffBoard
    );
}

/// An obstacle is reported before the zone of control check.
#[test]
fn test_obstacle_reported_first() {
    let board = Board::with_interior(|p| {
        if p == Position::new(4, 0) {
            Terrain::Obstacle
        } else {
            Terrain::Plain
        }
    });
    let mut game = builder().board(board).build(3).unwrap();
    game.state_mut().relocate_hero(HeroId(0), Position::new(5, 0)).unwrap();
    spawn(&mut game, 0, Position::new(5, 1));

    assert_eq!(
        rules::check_move(game.state(), HeroId(0), Direction::North).unwrap(),
        MoveCheck::Obstacle(Position::new(4, 0))
    );
}

/// Stepping onto boosting terrain is announced; Valor does not apply it.
#[test]
fn test_terrain_entered_event() {
    let board = Board::with_interior(|p| {
        if p == Position::new(6, 0) {
            Terrain::Koulou
        } else {
            Terrain::Plain
        }
    });
    let mut game = builder().board(board).build(5).unwrap();

    let report = game.act(HeroAction::Move(Direction::North)).unwrap();
    assert_eq!(report.step, Step::Consumed);
    assert!(report.events.iter().any(|r| matches!(
        r.event,
        GameEvent::TerrainEntered {
            hero: HeroId(0),
            terrain: Terrain::Koulou,
            applied: false,
            ..
        }
    )));
}

// =============================================================================
// Teleport and Recall
// =============================================================================

#[test]
fn test_teleport_prefers_left_then_right() {
    let mut game = open_game();
    game.state_mut().relocate_hero(HeroId(1), Position::new(3, 4)).unwrap();

    let to = rules::teleport(game.state_mut(), HeroId(2), HeroId(1)).unwrap();
    assert_eq!(to, Position::new(3, 3));

    // Beside hero 2: wall on the left, hero 1 on the right
    let to = rules::teleport(game.state_mut(), HeroId(0), HeroId(2)).unwrap();
    assert_eq!(to, Position::new(4, 3));
    game.state().check_invariants().unwrap();
}

#[test]
fn test_teleport_rejections() {
    let mut game = open_game();

    // Hero 1 stands on (7,3): wall on the left, monster on the right
    spawn(&mut game, 1, Position::new(7, 4));
    assert!(matches!(
        rules::teleport(game.state_mut(), HeroId(0), HeroId(1)),
        Err(ActionError::Rule(RuleViolation::NoTeleportSlot))
    ));

    assert!(matches!(
        rules::teleport(game.state_mut(), HeroId(0), HeroId(0)),
        Err(ActionError::Rule(RuleViolation::NoTeleportTarget))
    ));

    game.state_mut().roster.try_hero_mut(HeroId(2)).unwrap().take_damage(1.0e6);
    assert!(matches!(
        rules::teleport(game.state_mut(), HeroId(0), HeroId(2)),
        Err(ActionError::Rule(RuleViolation::NoTeleportTarget))
    ));

    // Nothing moved
    assert_eq!(game.state().hero(HeroId(0)).unwrap().position(), Position::new(7, 0));
    game.state().check_invariants().unwrap();
}

/// Recall goes to the spawn of the hero's current lane.
#[test]
fn test_recall_after_teleport() {
    let mut game = open_game();
    game.state_mut().relocate_hero(HeroId(2), Position::new(4, 6)).unwrap();
    rules::teleport(game.state_mut(), HeroId(0), HeroId(2)).unwrap();

    let spawn = rules::recall(game.state_mut(), HeroId(0)).unwrap();
    assert_eq!(spawn, Lane::new(2).hero_spawn());
    assert_eq!(game.state().board.hero_at(spawn), Some(HeroId(0)));

    // Hero 2 now finds its own spawn taken
    assert!(matches!(
        rules::recall(game.state_mut(), HeroId(2)),
        Err(ActionError::Rule(RuleViolation::RecallBlocked))
    ));
}
