//! Game rules as free functions over `GameState`.
//!
//! Every function either validates without side effects (`check_*`) or
//! applies a full transition and logs it. A rejected action returns a
//! `RuleViolation` and leaves the state untouched.
//!
//! The round controller (`game::ValorGame`) decides *when* each rule runs;
//! this module decides *what* it does.

pub mod combat;
pub mod movement;
pub mod round;
pub mod spawn;
pub mod special;

pub use combat::{
    heroes_in_range, hero_attack, mitigated_damage, monster_attack, monsters_in_range,
    AttackOutcome, Reward,
};
pub use movement::{advance_monster, check_move, clear_obstacle, lane_blocker, move_hero, MoveCheck, MoveOutcome};
pub use round::{monster_phase, prune_fainted_monsters, regenerate_party};
pub use spawn::{SpawnReport, SpawnScheduler};
pub use special::{check_teleport, recall, teleport, teleport_candidates, teleport_targets};
