//! Interactive session driver.
//!
//! Connects a `ValorGame` to an `InputProvider` and a `Renderer`: draws the
//! board at the start of every round, turns menu choices into decisions and
//! narrates what happened.

use std::io::Write;

use super::action::{Decision, HeroAction, Prompt, Step};
use super::controller::{GameResult, ValorGame};
use crate::board::Direction;
use crate::core::{EngineError, HeroId};
use crate::io::{InputProvider, Renderer};
use crate::rules;

const ACTIONS: [&str; 9] = [
    "Move", "Attack", "Teleport", "Recall", "Market", "Potion", "Equip", "Info", "Quit",
];

const DIRECTIONS: [(&str, Direction); 4] = [
    ("North", Direction::North),
    ("West", Direction::West),
    ("South", Direction::South),
    ("East", Direction::East),
];

/// Run `game` until it ends. Closed input counts as quitting.
pub fn run_session(
    game: &mut ValorGame,
    input: &mut dyn InputProvider,
    renderer: &dyn Renderer,
    out: &mut impl Write,
) -> Result<GameResult, EngineError> {
    let mut narrated = 0;
    let mut drawn_round = 0;

    loop {
        for record in game.state().events_since(narrated) {
            if let Some(line) = renderer.describe(game.state(), &record.event) {
                writeln!(out, "{line}")?;
            }
        }
        narrated = game.state().events().len();

        let decision = match game.pending() {
            Prompt::Finished(result) => return Ok(result),
            Prompt::ConfirmObstacle { hero, at } => {
                let prompt = format!("{hero}: an obstacle blocks {at}. Spend the turn clearing it?");
                match input.request_choice(&prompt, &["Yes", "No"]) {
                    Some(choice) => Decision::ClearObstacle(choice == 0),
                    None => Decision::ClearObstacle(false),
                }
            }
            Prompt::ChooseAction { hero } => {
                if game.round() != drawn_round {
                    drawn_round = game.round();
                    write!(out, "{}", renderer.render(game.state()))?;
                }
                let action = choose_action(game, hero, input, out)?.unwrap_or(HeroAction::Quit);
                Decision::Act(action)
            }
        };

        let report = game.submit(decision)?;
        if let Step::Rejected(violation) = report.step {
            writeln!(out, "Blocked: {violation}.")?;
        }
    }
}

/// Walk the menu until the player names a complete action.
///
/// Returns `None` if the input closes.
fn choose_action(
    game: &ValorGame,
    hero: HeroId,
    input: &mut dyn InputProvider,
    out: &mut impl Write,
) -> Result<Option<HeroAction>, EngineError> {
    let state = game.state();
    let current = state.hero(hero)?;
    let prompt = format!("Turn: {} [H{}] ({})", current.name, hero.index() + 1, current.lane());

    loop {
        let Some(choice) = input.request_choice(&prompt, &ACTIONS) else {
            return Ok(None);
        };

        let action = match ACTIONS[choice] {
            "Move" => {
                let labels = DIRECTIONS.map(|(label, _)| label);
                input
                    .request_choice("Direction", &labels)
                    .map(|i| HeroAction::Move(DIRECTIONS[i].1))
            }
            "Attack" => {
                let targets = rules::monsters_in_range(state, hero)?;
                if targets.is_empty() {
                    writeln!(out, "No enemy in range.")?;
                    continue;
                }
                let labels: Vec<String> = targets
                    .iter()
                    .filter_map(|&id| state.roster.monster(id))
                    .map(|m| format!("{} ({:.0} HP)", m.name, m.hp))
                    .collect();
                let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
                input
                    .request_choice("Target", &labels)
                    .map(|i| HeroAction::Attack(targets[i]))
            }
            "Teleport" => {
                let allies: Vec<_> = state.roster.heroes().filter(|h| h.id != hero).collect();
                let labels: Vec<&str> = allies.iter().map(|h| h.name.as_str()).collect();
                input
                    .request_choice("Teleport to", &labels)
                    .map(|i| HeroAction::Teleport(allies[i].id))
            }
            "Recall" => Some(HeroAction::Recall),
            "Market" => Some(HeroAction::Market),
            "Potion" => {
                let labels: Vec<&str> = current.inventory.potions.iter().map(|p| p.name.as_str()).collect();
                if labels.is_empty() {
                    writeln!(out, "No potions!")?;
                    continue;
                }
                input.request_choice("Use", &labels).map(HeroAction::UsePotion)
            }
            "Equip" => match input.request_choice("Equip", &["Weapon", "Armor"]) {
                Some(0) => {
                    let labels: Vec<&str> = current.inventory.weapons.iter().map(|w| w.name.as_str()).collect();
                    if labels.is_empty() {
                        writeln!(out, "No weapons.")?;
                        continue;
                    }
                    input.request_choice("Weapon", &labels).map(HeroAction::EquipWeapon)
                }
                Some(_) => {
                    let labels: Vec<&str> = current.inventory.armor.iter().map(|a| a.name.as_str()).collect();
                    if labels.is_empty() {
                        writeln!(out, "No armor.")?;
                        continue;
                    }
                    input.request_choice("Armor", &labels).map(HeroAction::EquipArmor)
                }
                None => None,
            },
            "Info" => Some(HeroAction::Info),
            _ => Some(HeroAction::Quit),
        };

        return Ok(action);
    }
}
