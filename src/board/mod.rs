//! Board model: terrain, occupancy and coordinates.
//!
//! ## Key Types
//!
//! - `Board`: the fixed 8x8 grid with three lanes
//! - `Cell`: terrain plus at most one hero id and one monster id
//! - `Terrain`: open, wall, nexus, boosting terrain, obstacle
//! - `Position`, `Direction`, `Lane`: coordinates and movement

pub mod cell;
pub mod grid;
pub mod position;

pub use cell::{Cell, Terrain};
pub use grid::Board;
pub use position::{
    is_valid_coordinate, Direction, Lane, Position, BOARD_SIZE, HERO_HOME_ROW, MONSTER_HOME_ROW,
    WALL_COLUMNS,
};
