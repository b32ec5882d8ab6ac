//! Collaborators at the edge of the engine: input, template data, the
//! market and text output.
//!
//! Each is a trait with one small implementation, so sessions can run
//! against a terminal, a script or a test double.

pub mod assets;
pub mod input;
pub mod market;
pub mod render;

pub use assets::{parse_hero_table, parse_monster_table, AssetLoader, TableLoader};
pub use input::{InputProvider, LineInput, ScriptedInput};
pub use market::{ClosedMarket, MarketService};
pub use render::{Renderer, TextRenderer};
