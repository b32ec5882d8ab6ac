//! Core engine types: entity ids, RNG, configuration, errors.
//!
//! Everything here is independent of the board layout and the round flow.

pub mod config;
pub mod entity;
pub mod error;
pub mod rng;

pub use config::{GameConfig, Ruleset, TerrainWeights};
pub use entity::{Faction, HeroId, MonsterId};
pub use error::{ActionError, AssetError, EngineError, RuleViolation};
pub use rng::GameRng;
