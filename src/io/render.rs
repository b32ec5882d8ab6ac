//! Text output: the board grid and event narration.

use std::fmt::Write;

use crate::board::BOARD_SIZE;
use crate::game::{Combatant, GameEvent, GameState};

/// Turns state and events into text. Never mutates anything.
pub trait Renderer {
    /// Draw the board.
    fn render(&self, state: &GameState) -> String;

    /// One line describing an event, or `None` to stay silent.
    fn describe(&self, state: &GameState, event: &GameEvent) -> Option<String> {
        let _ = state;
        Some(format!("{event:?}"))
    }
}

/// Fixed-width 8x8 grid with three text rows per cell.
///
/// ```text
/// +-------+-------+ ...
/// |       |       | ...
/// | | H1| |   N   | ...
/// |       |       | ...
/// +-------+-------+ ...
/// ```
///
/// Heroes are labelled by party slot (`H1`..`H3`), monsters by lane
/// (`M1`..`M3`), and a shared cell shows `H&M`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    fn cell_label(state: &GameState, row: usize, col: usize) -> String {
        let Some(cell) = state.board.cell(row, col) else {
            return "  ?  ".to_string();
        };
        match (cell.hero(), cell.monster()) {
            (Some(_), Some(_)) => "|H&M|".to_string(),
            (Some(hero), None) => format!("| H{}|", hero.index() + 1),
            (None, Some(monster)) => {
                let lane = state.monster(monster).map_or(0, |m| m.lane().index());
                format!("| M{}|", lane + 1)
            }
            (None, None) => cell.terrain().symbol().to_string(),
        }
    }

    fn name(state: &GameState, who: Combatant) -> String {
        match who {
            Combatant::Hero(id) => state.hero(id).map_or_else(|_| id.to_string(), |h| h.name.clone()),
            Combatant::Monster(id) => state
                .monster(id)
                .map_or_else(|_| id.to_string(), |m| m.name.clone()),
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, state: &GameState) -> String {
        let border = format!("+{}", "-------+".repeat(BOARD_SIZE));
        let padding = format!("|{}", "       |".repeat(BOARD_SIZE));

        let mut out = String::new();
        let _ = writeln!(out, "{border}");
        for row in 0..BOARD_SIZE {
            let _ = writeln!(out, "{padding}");
            out.push('|');
            for col in 0..BOARD_SIZE {
                let _ = write!(out, " {} |", Self::cell_label(state, row, col));
            }
            out.push('\n');
            let _ = writeln!(out, "{padding}");
            let _ = writeln!(out, "{border}");
        }
        out
    }

    fn describe(&self, state: &GameState, event: &GameEvent) -> Option<String> {
        let hero_name = |id| Self::name(state, Combatant::Hero(id));
        let line = match event {
            GameEvent::RoundStarted { round } => format!("=== ROUND {round} ==="),
            GameEvent::HeroMoved { hero, to, .. } => format!("{} moved to {to}.", hero_name(*hero)),
            GameEvent::TerrainEntered {
                hero,
                terrain,
                skill,
                applied,
            } => {
                let effect = if *applied { "boosts" } else { "inspires" };
                format!("The {terrain:?} {effect} {}'s {skill:?}.", hero_name(*hero))
            }
            GameEvent::ObstacleCleared { hero, at } => {
                format!("{} cleared the obstacle at {at}.", hero_name(*hero))
            }
            GameEvent::AttackDodged { attacker, defender } => format!(
                "{} dodged {}'s attack!",
                Self::name(state, *defender),
                Self::name(state, *attacker)
            ),
            GameEvent::DamageDealt {
                attacker,
                defender,
                amount,
            } => format!(
                "{} hit {} for {amount:.1} damage.",
                Self::name(state, *attacker),
                Self::name(state, *defender)
            ),
            GameEvent::MonsterDefeated {
                monster,
                by,
                gold,
                experience,
            } => format!(
                "{monster} was defeated by {}! +{gold:.0} gold, +{experience} xp.",
                hero_name(*by)
            ),
            GameEvent::LevelUp { hero, level } => {
                format!("{} reached level {level}!", hero_name(*hero))
            }
            GameEvent::HeroFainted { hero, .. } => format!("{} fainted.", hero_name(*hero)),
            GameEvent::Teleported { hero, to, lane, .. } => {
                format!("{} teleported to {to} in {lane}.", hero_name(*hero))
            }
            GameEvent::Recalled { hero, .. } => format!("{} recalled to the Nexus.", hero_name(*hero)),
            GameEvent::MarketVisited { hero } => format!("{} visited the market.", hero_name(*hero)),
            GameEvent::WeaponEquipped { hero, name } | GameEvent::ArmorEquipped { hero, name } => {
                format!("{} equipped {name}.", hero_name(*hero))
            }
            GameEvent::PotionUsed { hero, name } => format!("{} drank {name}.", hero_name(*hero)),
            GameEvent::HeroInfo { summary, .. } => summary.clone(),
            GameEvent::MonsterMoved { monster, to, .. } => format!(
                "{} moved south to {to}.",
                Self::name(state, Combatant::Monster(*monster))
            ),
            GameEvent::MonsterRemoved { .. } | GameEvent::HeroRegenerated { .. } => return None,
            GameEvent::HeroRevived { hero, .. } => {
                format!("{} has respawned at the Nexus!", hero_name(*hero))
            }
            GameEvent::MonsterSpawned { monster, lane, level, .. } => format!(
                "{} (level {level}) appears in {lane}.",
                Self::name(state, Combatant::Monster(*monster))
            ),
            GameEvent::SpawnBlocked { lane } => format!("The spawn in {lane} is blocked."),
            GameEvent::GameEnded { result } => format!("Game over: {result}."),
        };
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Lane, Position};
    use crate::core::{GameConfig, GameRng, HeroId};
    use crate::entities::{Hero, HeroClass, HeroTemplate, MonsterKind, MonsterTemplate, Roster};

    fn state() -> GameState {
        let heroes = Lane::ALL
            .iter()
            .enumerate()
            .map(|(i, &lane)| {
                let template = HeroTemplate::new(format!("Hero{i}"), HeroClass::Warrior);
                Hero::from_template(HeroId(i as u8), &template, lane)
            })
            .collect();
        GameState::new(GameConfig::default(), Board::open(), Roster::new(heroes), &GameRng::new(2))
            .unwrap()
    }

    #[test]
    fn test_grid_shape() {
        let mut state = state();
        let template = MonsterTemplate::new("Blinky", MonsterKind::Spirit, 1);
        state
            .add_monster(&template, 1, Lane::new(2), Position::new(7, 6))
            .unwrap();

        let text = TextRenderer.render(&state);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 1 + 4 * BOARD_SIZE);
        assert!(lines.iter().all(|l| l.len() == 1 + 8 * BOARD_SIZE));
        assert_eq!(lines[0], "+-------+-------+-------+-------+-------+-------+-------+-------+");

        // Row 7 content line
        let row7 = lines[1 + 4 * 7 + 1];
        assert!(row7.starts_with("| | H1| |"));
        assert!(row7.contains("|H&M|"));
    }

    #[test]
    fn test_describe() {
        let state = state();
        let text = TextRenderer
            .describe(&state, &GameEvent::LevelUp { hero: HeroId(1), level: 2 })
            .unwrap();
        assert_eq!(text, "Hero1 reached level 2!");
        assert!(TextRenderer
            .describe(&state, &GameEvent::MonsterRemoved { monster: crate::core::MonsterId(0) })
            .is_none());
    }
}
