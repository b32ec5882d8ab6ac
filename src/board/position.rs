//! Coordinates, directions and lanes.
//!
//! ## Layout
//!
//! ```text
//!  col:  0 1 | 2 | 3 4 | 5 | 6 7
//!        lane 0  wall  lane 1  wall  lane 2
//! ```
//!
//! Row 0 is the monster nexus, row 7 the hero nexus. Heroes enter a lane on
//! its left column, monsters on its right column.

use serde::{Deserialize, Serialize};

/// Side length of the square board.
pub const BOARD_SIZE: usize = 8;

/// Row the monsters spawn on and the heroes try to reach.
pub const MONSTER_HOME_ROW: usize = 0;

/// Row the heroes spawn on and the monsters try to reach.
pub const HERO_HOME_ROW: usize = BOARD_SIZE - 1;

/// Impassable columns separating the lanes.
pub const WALL_COLUMNS: [usize; 2] = [2, 5];

/// A cell coordinate on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row, 0 at the monster nexus.
    pub row: usize,
    /// Column, 0 on the left.
    pub col: usize,
}

impl Position {
    /// Create a position. Does not check bounds.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Create a position if it lies on the board.
    #[must_use]
    pub fn checked(row: isize, col: isize) -> Option<Self> {
        if is_valid_coordinate(row, col) {
            Some(Self::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Neighbor in `direction`, or `None` past the board edge.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        Self::checked(self.row as isize + dr, self.col as isize + dc)
    }

    /// Chebyshev (king move) distance.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Positions within Chebyshev distance 1, including this one, on the board.
    pub fn neighborhood(self) -> impl Iterator<Item = Position> {
        let (row, col) = (self.row as isize, self.col as isize);
        (row - 1..=row + 1)
            .flat_map(move |r| (col - 1..=col + 1).map(move |c| (r, c)))
            .filter_map(|(r, c)| Position::checked(r, c))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Whether a signed coordinate lies on the board.
#[must_use]
pub fn is_valid_coordinate(row: isize, col: isize) -> bool {
    (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col)
}

/// Cardinal movement directions. There is no diagonal movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward row 0 (the monster nexus).
    North,
    /// Toward row 7 (the hero nexus).
    South,
    /// Toward column 0.
    West,
    /// Toward column 7.
    East,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];

    /// Row and column delta.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
        }
    }
}

/// One of the three vertical corridors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Lane(u8);

impl Lane {
    /// Number of lanes on the board.
    pub const COUNT: usize = 3;

    /// All lanes, left to right.
    pub const ALL: [Lane; 3] = [Lane(0), Lane(1), Lane(2)];

    /// Create a lane from its index.
    ///
    /// Panics if `index >= 3`.
    #[must_use]
    pub fn new(index: usize) -> Self {
        assert!(index < Self::COUNT, "Lane index must be 0, 1 or 2");
        Self(index as u8)
    }

    /// Lane index, 0-based.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Lane containing a column, or `None` for wall columns.
    #[must_use]
    pub fn of_column(col: usize) -> Option<Self> {
        match col {
            0 | 1 => Some(Lane(0)),
            3 | 4 => Some(Lane(1)),
            6 | 7 => Some(Lane(2)),
            _ => None,
        }
    }

    /// Left column of the lane.
    #[must_use]
    pub const fn left_column(self) -> usize {
        self.0 as usize * 3
    }

    /// Cell where a hero of this lane enters and is recalled to.
    #[must_use]
    pub const fn hero_spawn(self) -> Position {
        Position::new(HERO_HOME_ROW, self.left_column())
    }

    /// Cell where monsters of this lane enter.
    #[must_use]
    pub const fn monster_spawn(self) -> Position {
        Position::new(MONSTER_HOME_ROW, self.left_column() + 1)
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lane {}", self.0)
    }
}
