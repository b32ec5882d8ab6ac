//! Monster waves.
//!
//! One wave puts a monster on each lane's monster spawn cell. The template is
//! drawn uniformly from the catalog and the monster's level is the party's
//! highest hero level at that moment. A lane whose spawn cell already holds a
//! monster is skipped for the wave.

use smallvec::SmallVec;

use crate::board::Lane;
use crate::core::{EngineError, MonsterId};
use crate::entities::MonsterCatalog;
use crate::game::{GameEvent, GameState};

/// What a wave produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpawnReport {
    /// Monsters added, in lane order.
    pub spawned: SmallVec<[MonsterId; 3]>,
    /// Lanes skipped because the spawn cell was occupied.
    pub blocked: SmallVec<[Lane; 3]>,
}

/// Decides when waves arrive and spawns them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnScheduler {
    interval: u32,
}

impl SpawnScheduler {
    /// Scheduler firing every `interval` rounds.
    ///
    /// Panics if `interval` is zero.
    #[must_use]
    pub fn new(interval: u32) -> Self {
        assert!(interval > 0, "Spawn interval must be at least 1 round");
        Self { interval }
    }

    /// Rounds between waves.
    #[must_use]
    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Whether a wave arrives at the end of `round`.
    #[must_use]
    pub fn is_due(&self, round: u32) -> bool {
        round > 0 && round % self.interval == 0
    }

    /// Spawn one monster per lane.
    ///
    /// Fails with `Setup` if the catalog is empty.
    pub fn spawn_wave(
        &self,
        state: &mut GameState,
        catalog: &MonsterCatalog,
    ) -> Result<SpawnReport, EngineError> {
        let mut report = SpawnReport::default();
        let level = state.roster.max_hero_level();

        for lane in Lane::ALL {
            let at = lane.monster_spawn();
            if state.board.monster_at(at).is_some() {
                state.emit(GameEvent::SpawnBlocked { lane });
                log::debug!("{lane} spawn blocked");
                report.blocked.push(lane);
                continue;
            }

            let template = catalog
                .pick(&mut state.spawn_rng)
                .ok_or_else(|| EngineError::Setup("monster catalog is empty".into()))?
                .clone();
            let monster = state.add_monster(&template, level, lane, at)?;
            state.emit(GameEvent::MonsterSpawned {
                monster,
                lane,
                at,
                level,
            });
            log::info!("{} (level {level}) spawned in {lane} as {monster}", template.name);
            report.spawned.push(monster);
        }

        Ok(report)
    }
}

impl Default for SpawnScheduler {
    fn default() -> Self {
        Self::new(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Position};
    use crate::core::{GameConfig, GameRng, HeroId};
    use crate::entities::{Hero, HeroClass, HeroTemplate, MonsterKind, MonsterTemplate, Roster};

    fn state() -> GameState {
        let heroes = Lane::ALL
            .iter()
            .enumerate()
            .map(|(i, &lane)| {
                let template = HeroTemplate::new(format!("H{i}"), HeroClass::Warrior)
                    .with_level(i as u32 + 1);
                Hero::from_template(HeroId(i as u8), &template, lane)
            })
            .collect();
        GameState::new(GameConfig::default(), Board::open(), Roster::new(heroes), &GameRng::new(11))
            .unwrap()
    }

    fn catalog() -> MonsterCatalog {
        [
            MonsterTemplate::new("BigBad-Wolf", MonsterKind::Exoskeleton, 1),
            MonsterTemplate::new("Taltecuhtli", MonsterKind::Dragon, 6),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_is_due() {
        let scheduler = SpawnScheduler::new(8);
        assert!(!scheduler.is_due(0));
        assert!(!scheduler.is_due(7));
        assert!(scheduler.is_due(8));
        assert!(scheduler.is_due(16));
        assert!(SpawnScheduler::new(1).is_due(1));
    }

    #[test]
    #[should_panic(expected = "at least 1 round")]
    fn test_zero_interval() {
        let _ = SpawnScheduler::new(0);
    }

    #[test]
    fn test_wave_uses_max_hero_level() {
        let mut state = state();
        let report = SpawnScheduler::default().spawn_wave(&mut state, &catalog()).unwrap();

        assert_eq!(report.spawned.len(), 3);
        assert!(report.blocked.is_empty());
        for (lane, id) in Lane::ALL.iter().zip(&report.spawned) {
            let monster = state.monster(*id).unwrap();
            assert_eq!(monster.level, 3);
            assert!((monster.hp - 300.0).abs() < 1e-9);
            assert_eq!(monster.position(), lane.monster_spawn());
        }
        state.check_invariants().unwrap();
    }

    #[test]
    fn test_blocked_lane_skipped() {
        let mut state = state();
        let scheduler = SpawnScheduler::default();
        let first = scheduler.spawn_wave(&mut state, &catalog()).unwrap();

        // Lane 1's monster stays home, the others walk off their spawn cells
        state.relocate_monster(first.spawned[0], Position::new(1, 1)).unwrap();
        state.relocate_monster(first.spawned[2], Position::new(1, 7)).unwrap();

        let second = scheduler.spawn_wave(&mut state, &catalog()).unwrap();
        assert_eq!(second.spawned.len(), 2);
        assert_eq!(second.blocked.as_slice(), &[Lane::new(1)]);
        assert_eq!(state.roster.monster_count(), 5);
    }

    #[test]
    fn test_empty_catalog() {
        let mut state = state();
        let result = SpawnScheduler::default().spawn_wave(&mut state, &MonsterCatalog::new());
        assert!(matches!(result, Err(EngineError::Setup(_))));
    }
}
