//! Non-interactive round phases: the monster phase and end-of-round upkeep.

use crate::core::{ActionError, EngineError, MonsterId};
use crate::game::{GameEvent, GameState};

use super::combat::{heroes_in_range, monster_attack};
use super::movement::advance_monster;
use super::special::recall;

/// Act once for every active monster, in spawn order.
///
/// Fainted monsters are cleared from the board first. Under
/// `Ruleset::Siege` a monster with a living hero in reach attacks it instead
/// of advancing.
pub fn monster_phase(state: &mut GameState) -> Result<(), EngineError> {
    prune_fainted_monsters(state)?;

    for id in state.roster.monster_ids() {
        if state.roster.monster(id).is_none() {
            continue;
        }

        if state.config.ruleset.monsters_attack() {
            if let Some(&target) = heroes_in_range(state, id)?.first() {
                monster_attack(state, id, target)?;
                continue;
            }
        }

        advance_monster(state, id)?;
    }

    Ok(())
}

/// Remove every fainted monster from board and roster.
pub fn prune_fainted_monsters(state: &mut GameState) -> Result<(), EngineError> {
    let fainted: Vec<MonsterId> = state
        .roster
        .monsters()
        .filter(|m| m.is_fainted())
        .map(|m| m.id)
        .collect();

    for monster in fainted {
        state.remove_monster(monster)?;
        state.emit(GameEvent::MonsterRemoved { monster });
    }
    Ok(())
}

/// End-of-round upkeep for the party.
///
/// Living heroes regenerate. Fainted heroes are revived and recalled to their
/// lane's spawn cell; if another hero stands there the revived hero stays
/// where it fell.
pub fn regenerate_party(state: &mut GameState) -> Result<(), EngineError> {
    let rate = state.config.regen_rate;
    let ids: Vec<_> = state.roster.hero_ids().collect();

    for hero in ids {
        let fainted = state.hero(hero)?.is_fainted();
        if !fainted {
            let h = state.roster.try_hero_mut(hero)?;
            h.regenerate(rate);
            let (hp, mana) = (h.stats.hp, h.stats.mana);
            state.emit(GameEvent::HeroRegenerated { hero, hp, mana });
            continue;
        }

        state.roster.try_hero_mut(hero)?.revive();
        match recall(state, hero) {
            Ok(_) => {}
            Err(ActionError::Rule(violation)) => {
                log::warn!("{hero} revived in place: {violation}");
            }
            Err(ActionError::Engine(err)) => return Err(err),
        }
        let at = state.hero(hero)?.position();
        state.emit(GameEvent::HeroRevived { hero, at });
        log::info!("{hero} revived at {at}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Lane, Position};
    use crate::core::{GameConfig, GameRng, HeroId, Ruleset};
    use crate::entities::{Hero, HeroClass, HeroTemplate, MonsterKind, MonsterTemplate, Roster};

    fn state(config: GameConfig) -> GameState {
        let heroes = Lane::ALL
            .iter()
            .enumerate()
            .map(|(i, &lane)| {
                let template = HeroTemplate::new(format!("H{i}"), HeroClass::Sorcerer).with_mana(50.0);
                Hero::from_template(HeroId(i as u8), &template, lane)
            })
            .collect();
        GameState::new(config, Board::open(), Roster::new(heroes), &GameRng::new(13)).unwrap()
    }

    fn monster(state: &mut GameState, lane: usize, at: Position) -> MonsterId {
        let template =
            MonsterTemplate::new("Merrshaullk", MonsterKind::Dragon, 1).with_combat(5000.0, 0.0, 0.0);
        state.add_monster(&template, 1, Lane::new(lane), at).unwrap()
    }

    #[test]
    fn test_monsters_advance_in_valor() {
        let mut state = state(GameConfig::default());
        let a = monster(&mut state, 0, Position::new(0, 1));
        let b = monster(&mut state, 0, Position::new(6, 0));

        monster_phase(&mut state).unwrap();

        assert_eq!(state.monster(a).unwrap().position(), Position::new(1, 1));
        // Hero 0 blocks the cell below and valor monsters never attack
        assert_eq!(state.monster(b).unwrap().position(), Position::new(6, 0));
        assert!(!state.hero(HeroId(0)).unwrap().is_fainted());
    }

    #[test]
    fn test_monsters_attack_in_siege() {
        let mut state = state(GameConfig::default().with_ruleset(Ruleset::Siege));
        let m = monster(&mut state, 0, Position::new(6, 0));

        monster_phase(&mut state).unwrap();

        assert_eq!(state.monster(m).unwrap().position(), Position::new(6, 0));
        assert!(state.hero(HeroId(0)).unwrap().is_fainted());
    }

    #[test]
    fn test_prune_fainted() {
        let mut state = state(GameConfig::default());
        let m = monster(&mut state, 1, Position::new(3, 3));
        state.roster.try_monster_mut(m).unwrap().take_damage(1000.0);

        monster_phase(&mut state).unwrap();

        assert!(state.roster.monster(m).is_none());
        assert_eq!(state.board.monster_at(Position::new(3, 3)), None);
        state.check_invariants().unwrap();
    }

    #[test]
    fn test_regeneration() {
        let mut state = state(GameConfig::default());
        regenerate_party(&mut state).unwrap();

        let hero = state.hero(HeroId(1)).unwrap();
        assert!((hero.stats.hp - 110.0).abs() < 1e-9);
        assert!((hero.stats.mana - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_fainted_hero_revived_and_recalled() {
        let mut state = state(GameConfig::default());
        state.relocate_hero(HeroId(2), Position::new(3, 6)).unwrap();
        state.roster.try_hero_mut(HeroId(2)).unwrap().take_damage(500.0);

        regenerate_party(&mut state).unwrap();

        let hero = state.hero(HeroId(2)).unwrap();
        assert!(!hero.is_fainted());
        assert!((hero.stats.hp - 100.0).abs() < 1e-9);
        assert_eq!(hero.position(), Position::new(7, 6));
        state.check_invariants().unwrap();
    }

    #[test]
    fn test_revive_in_place_when_spawn_taken() {
        let mut state = state(GameConfig::default());
        state.relocate_hero(HeroId(2), Position::new(3, 6)).unwrap();
        state.relocate_hero(HeroId(1), Position::new(7, 6)).unwrap();
        state.roster.try_hero_mut(HeroId(2)).unwrap().take_damage(500.0);

        regenerate_party(&mut state).unwrap();

        let hero = state.hero(HeroId(2)).unwrap();
        assert!(!hero.is_fainted());
        assert_eq!(hero.position(), Position::new(3, 6));
    }
}
