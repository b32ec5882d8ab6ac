//! Entity model: heroes, monsters, items, templates and the roster arena.
//!
//! ## Key Types
//!
//! - `Hero`: party member with stats, equipment and progression
//! - `Monster`: spawned enemy, removed on defeat
//! - `Roster`: owns both; the board stores only their ids
//! - `HeroTemplate`, `MonsterTemplate`, `MonsterCatalog`: static stat data

pub mod hero;
pub mod items;
pub mod monster;
pub mod roster;
pub mod template;

pub use hero::{Hero, HeroClass, HeroStats, Skill};
pub use items::{Armor, Inventory, Potion, PotionEffect, Weapon};
pub use monster::{Monster, MonsterKind};
pub use roster::Roster;
pub use template::{HeroTemplate, MonsterCatalog, MonsterTemplate};
