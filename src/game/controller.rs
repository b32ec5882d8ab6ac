//! Round and turn controller.
//!
//! `ValorGame` owns the state and drives the round state machine:
//!
//! ```text
//! HeroPhase(i) --consuming action--> HeroPhase(i+1) ... --> MonsterPhase
//!      ^  |                                                      |
//!      |  +--non-consuming / rejected: same hero again           v
//!      +------------ round += 1 <-- SpawnCheck <-- RegenPhase <--+
//! ```
//!
//! The controller never blocks. It exposes the pending [`Prompt`] and
//! advances only when [`ValorGame::submit`] receives a matching
//! [`Decision`]. Monster, regeneration and spawn phases run inside the
//! `submit` call that ends the last hero's turn.
//!
//! ## Terminal states
//!
//! - `Victory` once any hero stands on row 0 (checked after every hero action)
//! - `Defeat` once any monster stands on row 7 (checked after the monster phase)
//! - `Quit` immediately when the active hero quits

use serde::{Deserialize, Serialize};

use super::action::{Decision, HeroAction, Prompt, Step, StepReport};
use super::event::GameEvent;
use super::state::GameState;
use crate::board::{Board, Direction, Lane, Position, Terrain};
use crate::core::{ActionError, EngineError, GameConfig, GameRng, HeroId, RuleViolation};
use crate::entities::{Hero, HeroTemplate, MonsterCatalog, Roster};
use crate::io::{ClosedMarket, MarketService};
use crate::rules::{self, MoveOutcome, SpawnScheduler};

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// A hero reached the monster home row.
    Victory,
    /// A monster reached the hero home row.
    Defeat,
    /// A hero chose to quit.
    Quit,
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            GameResult::Victory => "Victory",
            GameResult::Defeat => "Defeat",
            GameResult::Quit => "Quit",
        };
        f.write_str(text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Party member `index` is acting; `obstacle` is set while a clear
    /// confirmation is pending.
    Hero {
        index: usize,
        obstacle: Option<Position>,
    },
    Finished(GameResult),
}

/// A running session.
pub struct ValorGame {
    state: GameState,
    catalog: MonsterCatalog,
    market: Box<dyn MarketService>,
    scheduler: SpawnScheduler,
    phase: Phase,
}

/// Builder for creating a `ValorGame`.
pub struct ValorGameBuilder {
    config: GameConfig,
    heroes: Vec<HeroTemplate>,
    catalog: MonsterCatalog,
    market: Box<dyn MarketService>,
    board: Option<Board>,
    initial_wave: bool,
}

impl Default for ValorGameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            heroes: Vec::new(),
            catalog: MonsterCatalog::new(),
            market: Box::new(ClosedMarket),
            board: None,
            initial_wave: true,
        }
    }
}

impl ValorGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a party member. The n-th hero starts in lane n.
    pub fn hero(mut self, template: HeroTemplate) -> Self {
        self.heroes.push(template);
        self
    }

    pub fn heroes(mut self, templates: impl IntoIterator<Item = HeroTemplate>) -> Self {
        self.heroes.extend(templates);
        self
    }

    pub fn monsters(mut self, catalog: MonsterCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn market(mut self, market: impl MarketService + 'static) -> Self {
        self.market = Box::new(market);
        self
    }

    /// Use a fixed board instead of generating one from the seed.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Whether a monster wave spawns before round 1 (default true).
    pub fn initial_wave(mut self, enabled: bool) -> Self {
        self.initial_wave = enabled;
        self
    }

    /// Build the game. Round 1 starts with the first hero to act.
    pub fn build(self, seed: u64) -> Result<ValorGame, EngineError> {
        if self.heroes.len() != Lane::COUNT {
            return Err(EngineError::Setup(format!(
                "party needs exactly {} heroes, got {}",
                Lane::COUNT,
                self.heroes.len()
            )));
        }
        if self.catalog.is_empty() {
            return Err(EngineError::Setup("monster catalog is empty".into()));
        }
        if self.config.spawn_interval == 0 {
            return Err(EngineError::Setup("spawn interval must be at least 1 round".into()));
        }

        let rng = GameRng::new(seed);
        let board = match self.board {
            Some(board) => board,
            None => Board::generate(&self.config.terrain, &mut rng.for_context("terrain")),
        };

        let heroes = self
            .heroes
            .iter()
            .zip(Lane::ALL)
            .enumerate()
            .map(|(i, (template, lane))| Hero::from_template(HeroId(i as u8), template, lane))
            .collect();

        let scheduler = SpawnScheduler::new(self.config.spawn_interval);
        let state = GameState::new(self.config, board, Roster::new(heroes), &rng)?;

        let mut game = ValorGame {
            state,
            catalog: self.catalog,
            market: self.market,
            scheduler,
            phase: Phase::Hero {
                index: 0,
                obstacle: None,
            },
        };

        if self.initial_wave {
            game.scheduler.spawn_wave(&mut game.state, &game.catalog)?;
        }
        game.state.emit(GameEvent::RoundStarted { round: 1 });
        log::info!("session started with seed {seed}");

        game.state.check_invariants()?;
        Ok(game)
    }
}

impl ValorGame {
    // === Accessors ===

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state, for scenario setup.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Current round, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.state.round
    }

    /// Monster templates waves draw from.
    #[must_use]
    pub fn catalog(&self) -> &MonsterCatalog {
        &self.catalog
    }

    /// Wave timing.
    #[must_use]
    pub fn scheduler(&self) -> SpawnScheduler {
        self.scheduler
    }

    /// Final result, once the session is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::Finished(result) => Some(result),
            Phase::Hero { .. } => None,
        }
    }

    /// Hero whose turn it is.
    #[must_use]
    pub fn current_hero(&self) -> Option<HeroId> {
        match self.phase {
            Phase::Hero { index, .. } => Some(HeroId(index as u8)),
            Phase::Finished(_) => None,
        }
    }

    /// What the controller is waiting for.
    #[must_use]
    pub fn pending(&self) -> Prompt {
        match self.phase {
            Phase::Hero {
                index,
                obstacle: None,
            } => Prompt::ChooseAction {
                hero: HeroId(index as u8),
            },
            Phase::Hero {
                index,
                obstacle: Some(at),
            } => Prompt::ConfirmObstacle {
                hero: HeroId(index as u8),
                at,
            },
            Phase::Finished(result) => Prompt::Finished(result),
        }
    }

    // === Driving ===

    /// Answer the pending prompt.
    ///
    /// Rule violations come back as `Step::Rejected` with the state
    /// unchanged. An `Err` is fatal for the session.
    pub fn submit(&mut self, decision: Decision) -> Result<StepReport, EngineError> {
        let mark = self.state.events().len();

        let step = match (self.phase, decision) {
            (Phase::Finished(_), _) => return Err(EngineError::SessionOver),
            (Phase::Hero { obstacle: Some(_), .. }, Decision::Act(_)) => {
                return Err(EngineError::UnexpectedDecision("obstacle confirmation is pending"));
            }
            (Phase::Hero { obstacle: None, .. }, Decision::ClearObstacle(_)) => {
                return Err(EngineError::UnexpectedDecision("no obstacle confirmation is pending"));
            }
            (Phase::Hero { index, obstacle: Some(at) }, Decision::ClearObstacle(clear)) => {
                self.phase = Phase::Hero {
                    index,
                    obstacle: None,
                };
                if clear {
                    rules::clear_obstacle(&mut self.state, HeroId(index as u8), at)?;
                    Step::Consumed
                } else {
                    Step::NotConsumed
                }
            }
            (Phase::Hero { index, obstacle: None }, Decision::Act(action)) => {
                self.perform(HeroId(index as u8), action)?
            }
        };

        if step == Step::Consumed && self.result().is_none() {
            self.end_turn()?;
        }
        if cfg!(debug_assertions) {
            self.state.check_invariants()?;
        }

        Ok(StepReport {
            step,
            events: self.state.events_since(mark).cloned().collect(),
        })
    }

    /// Submit an action for the active hero.
    pub fn act(&mut self, action: HeroAction) -> Result<StepReport, EngineError> {
        self.submit(Decision::Act(action))
    }

    fn perform(&mut self, hero: HeroId, action: HeroAction) -> Result<Step, EngineError> {
        match self.execute(hero, action) {
            Ok(step) => Ok(step),
            Err(ActionError::Rule(violation)) => {
                log::debug!("{hero} {action:?} rejected: {violation}");
                Ok(Step::Rejected(violation))
            }
            Err(ActionError::Engine(err)) => Err(err),
        }
    }

    fn execute(&mut self, hero: HeroId, action: HeroAction) -> Result<Step, ActionError> {
        let state = &mut self.state;
        match action {
            HeroAction::Move(direction) => match rules::move_hero(state, hero, direction)? {
                MoveOutcome::Moved { .. } => Ok(Step::Consumed),
                MoveOutcome::ObstacleAhead { at } => {
                    self.phase = Phase::Hero {
                        index: hero.index(),
                        obstacle: Some(at),
                    };
                    Ok(Step::NeedsDecision)
                }
            },
            HeroAction::Attack(target) => {
                rules::hero_attack(state, hero, target)?;
                Ok(Step::Consumed)
            }
            HeroAction::Teleport(ally) => {
                rules::teleport(state, hero, ally)?;
                Ok(Step::Consumed)
            }
            HeroAction::Recall => {
                rules::recall(state, hero)?;
                Ok(Step::Consumed)
            }
            HeroAction::Market => {
                let pos = state.hero(hero)?.position();
                if state.board.terrain(pos) != Some(Terrain::Nexus) {
                    return Err(RuleViolation::NotOnNexus.into());
                }
                self.market.enter_market(state.roster.try_hero_mut(hero)?);
                state.emit(GameEvent::MarketVisited { hero });
                Ok(Step::NotConsumed)
            }
            HeroAction::UsePotion(index) => {
                let potion = state.roster.try_hero_mut(hero)?.use_potion(index)?;
                state.emit(GameEvent::PotionUsed {
                    hero,
                    name: potion.name,
                });
                Ok(Step::Consumed)
            }
            HeroAction::EquipWeapon(index) => {
                let h = state.roster.try_hero_mut(hero)?;
                h.equip_weapon(index)?;
                let name = h.weapon.as_ref().map(|w| w.name.clone()).unwrap_or_default();
                state.emit(GameEvent::WeaponEquipped { hero, name });
                Ok(Step::Consumed)
            }
            HeroAction::EquipArmor(index) => {
                let h = state.roster.try_hero_mut(hero)?;
                h.equip_armor(index)?;
                let name = h.armor.as_ref().map(|a| a.name.clone()).unwrap_or_default();
                state.emit(GameEvent::ArmorEquipped { hero, name });
                Ok(Step::Consumed)
            }
            HeroAction::Info => {
                let summary = state.hero(hero)?.to_string();
                state.emit(GameEvent::HeroInfo { hero, summary });
                Ok(Step::NotConsumed)
            }
            HeroAction::Quit => {
                log::info!("{hero} quit the session");
                self.finish(GameResult::Quit);
                Ok(Step::Consumed)
            }
        }
    }

    // === Phase transitions ===

    fn finish(&mut self, result: GameResult) {
        self.state.emit(GameEvent::GameEnded { result });
        log::info!("session ended in round {}: {result}", self.state.round);
        self.phase = Phase::Finished(result);
    }

    /// Hand the turn to the next living hero, running the non-interactive
    /// phases whenever the party is done.
    fn end_turn(&mut self) -> Result<(), EngineError> {
        if let Some(result) = self.state.outcome() {
            self.finish(result);
            return Ok(());
        }

        let mut next = match self.phase {
            Phase::Hero { index, .. } => index + 1,
            Phase::Finished(_) => return Ok(()),
        };

        loop {
            if let Some(index) = self.next_living_hero(next) {
                self.phase = Phase::Hero {
                    index,
                    obstacle: None,
                };
                return Ok(());
            }

            self.finish_round()?;
            if self.result().is_some() {
                return Ok(());
            }
            next = 0;
        }
    }

    fn next_living_hero(&self, from: usize) -> Option<usize> {
        self.state
            .roster
            .heroes()
            .skip(from)
            .find(|h| !h.is_fainted())
            .map(|h| h.id.index())
    }

    /// Monster phase, regeneration, spawn check and round advance.
    fn finish_round(&mut self) -> Result<(), EngineError> {
        log::debug!("round {}: monster phase", self.state.round);
        rules::monster_phase(&mut self.state)?;
        if let Some(result) = self.state.outcome() {
            self.finish(result);
            return Ok(());
        }

        rules::regenerate_party(&mut self.state)?;

        if self.scheduler.is_due(self.state.round) {
            self.scheduler.spawn_wave(&mut self.state, &self.catalog)?;
        }

        self.state.round += 1;
        let round = self.state.round;
        self.state.emit(GameEvent::RoundStarted { round });
        log::debug!("round {round} started");
        Ok(())
    }

    // === Legal actions ===

    /// Every action the active hero could take without being rejected.
    ///
    /// Empty once the session is over or while an obstacle confirmation is
    /// pending.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<HeroAction> {
        let Phase::Hero {
            index,
            obstacle: None,
        } = self.phase
        else {
            return Vec::new();
        };
        let id = HeroId(index as u8);
        let state = &self.state;
        let Some(hero) = state.roster.hero(id) else {
            return Vec::new();
        };

        let mut actions: Vec<HeroAction> = Direction::ALL
            .into_iter()
            .filter(|&dir| rules::check_move(state, id, dir).is_ok())
            .map(HeroAction::Move)
            .collect();

        if let Ok(targets) = rules::monsters_in_range(state, id) {
            actions.extend(targets.into_iter().map(HeroAction::Attack));
        }
        if let Ok(allies) = rules::teleport_targets(state, id) {
            actions.extend(
                allies
                    .into_iter()
                    .filter(|&ally| rules::check_teleport(state, id, ally).is_ok())
                    .map(HeroAction::Teleport),
            );
        }
        if state
            .board
            .hero_at(hero.lane().hero_spawn())
            .map_or(true, |other| other == id)
        {
            actions.push(HeroAction::Recall);
        }
        if state.board.terrain(hero.position()) == Some(Terrain::Nexus) {
            actions.push(HeroAction::Market);
        }
        actions.extend((0..hero.inventory.potions.len()).map(HeroAction::UsePotion));
        actions.extend((0..hero.inventory.weapons.len()).map(HeroAction::EquipWeapon));
        actions.extend((0..hero.inventory.armor.len()).map(HeroAction::EquipArmor));
        actions.push(HeroAction::Info);
        actions.push(HeroAction::Quit);

        actions
    }
}
