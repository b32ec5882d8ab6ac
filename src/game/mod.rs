//! Session state, the round controller and the interactive driver.
//!
//! ## Key Types
//!
//! - `GameState`: board, roster, RNG streams and event log
//! - `ValorGame`: the round/turn state machine; built by `ValorGameBuilder`
//! - `HeroAction`, `Decision`, `Prompt`: the controller's request/response protocol
//! - `GameEvent`: structured log of everything that happened

pub mod action;
pub mod controller;
pub mod event;
pub mod session;
pub mod state;

pub use action::{Decision, HeroAction, Prompt, Step, StepReport};
pub use controller::{GameResult, ValorGame, ValorGameBuilder};
pub use event::{Combatant, EventRecord, GameEvent};
pub use session::run_session;
pub use state::GameState;
