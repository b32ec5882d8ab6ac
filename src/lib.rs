//! # lane-valor
//!
//! A deterministic engine for a three-lane, turn-based hero vs monster
//! skirmish on a fixed 8x8 board.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: Heroes and monsters live in one `Roster`; board cells
//!    hold only their ids. Every position change goes through `GameState`,
//!    which updates both sides in one step.
//!
//! 2. **Rules Are Values**: Rejected actions return a `RuleViolation` and
//!    leave the state untouched. Internal faults are a separate
//!    `EngineError` and end the session.
//!
//! 3. **Injectable Randomness**: Terrain, dodge rolls and spawn picks each
//!    draw from their own seeded stream, so a seed replays a session exactly.
//!
//! ## Modules
//!
//! - `core`: ids, configuration, RNG, error types
//! - `board`: positions, lanes, terrain and the grid
//! - `entities`: heroes, monsters, items, templates and the roster
//! - `rules`: movement, combat, teleport/recall, spawning, round phases
//! - `game`: shared state, the round controller and the session driver
//! - `io`: input, template loading, market and text rendering

pub mod core;
pub mod board;
pub mod entities;
pub mod rules;
pub mod game;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    ActionError, AssetError, EngineError, RuleViolation,
    GameConfig, Ruleset, TerrainWeights,
    GameRng,
    Faction, HeroId, MonsterId,
};

pub use crate::board::{Board, Cell, Direction, Lane, Position, Terrain};

pub use crate::entities::{
    Hero, HeroClass, HeroTemplate, Monster, MonsterCatalog, MonsterKind, MonsterTemplate, Roster,
    Skill,
};

pub use crate::rules::{AttackOutcome, MoveOutcome, Reward, SpawnReport, SpawnScheduler};

pub use crate::game::{
    run_session, Decision, EventRecord, GameEvent, GameResult, GameState, HeroAction, Prompt,
    Step, StepReport, ValorGame, ValorGameBuilder,
};

pub use crate::io::{
    AssetLoader, ClosedMarket, InputProvider, MarketService, Renderer, ScriptedInput, TableLoader,
    TextRenderer,
};
