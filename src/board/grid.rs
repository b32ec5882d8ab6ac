//! The fixed 8x8 three-lane board.
//!
//! The board owns terrain and occupancy identifiers. It does not own heroes
//! or monsters; callers keep the roster and the cells in step (see
//! `GameState::relocate_hero`).

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Terrain};
use super::position::{
    Position, BOARD_SIZE, HERO_HOME_ROW, MONSTER_HOME_ROW, WALL_COLUMNS,
};
use crate::core::{GameRng, HeroId, MonsterId, TerrainWeights};

/// The battlefield.
///
/// ## Usage
///
/// ```
/// use lane_valor::board::{Board, Position, Terrain};
///
/// let board = Board::open();
/// assert_eq!(board.terrain(Position::new(0, 0)), Some(Terrain::Nexus));
/// assert_eq!(board.terrain(Position::new(3, 2)), Some(Terrain::Wall));
/// assert!(board.cell(8, 0).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Build a board, rolling interior terrain from `weights`.
    ///
    /// Falls back to plain ground if every weight is zero.
    #[must_use]
    pub fn generate(weights: &TerrainWeights, rng: &mut GameRng) -> Self {
        let weights = weights.as_array();
        Self::with_interior(|_| {
            rng.weighted(&weights)
                .map_or(Terrain::Plain, |i| TerrainWeights::KINDS[i])
        })
    }

    /// Board with plain ground on every interior cell.
    #[must_use]
    pub fn open() -> Self {
        Self::with_interior(|_| Terrain::Plain)
    }

    /// Build a board with caller-chosen interior terrain.
    ///
    /// Walls and nexus rows are always laid out by the fixed layout; `interior`
    /// is asked only for the remaining cells, in row-major order.
    pub fn with_interior(mut interior: impl FnMut(Position) -> Terrain) -> Self {
        let mut cells = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Position::new(row, col);
                let terrain = if WALL_COLUMNS.contains(&col) {
                    Terrain::Wall
                } else if row == MONSTER_HOME_ROW || row == HERO_HOME_ROW {
                    Terrain::Nexus
                } else {
                    interior(pos)
                };
                cells.push(Cell::new(terrain));
            }
        }
        Self { cells }
    }

    fn index(pos: Position) -> Option<usize> {
        (pos.row < BOARD_SIZE && pos.col < BOARD_SIZE).then(|| pos.row * BOARD_SIZE + pos.col)
    }

    /// Whether a signed coordinate lies on the board.
    #[must_use]
    pub fn is_valid_coordinate(row: isize, col: isize) -> bool {
        super::position::is_valid_coordinate(row, col)
    }

    /// Cell at a row and column, or `None` out of bounds.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cell_at(Position::new(row, col))
    }

    /// Cell at a position, or `None` out of bounds.
    #[must_use]
    pub fn cell_at(&self, pos: Position) -> Option<&Cell> {
        Self::index(pos).map(|i| &self.cells[i])
    }

    fn cell_at_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        Self::index(pos).map(|i| &mut self.cells[i])
    }

    /// Terrain at a position.
    #[must_use]
    pub fn terrain(&self, pos: Position) -> Option<Terrain> {
        self.cell_at(pos).map(Cell::terrain)
    }

    /// Whether an entity may stand at `pos`. False out of bounds.
    #[must_use]
    pub fn is_accessible(&self, pos: Position) -> bool {
        self.cell_at(pos).is_some_and(Cell::is_accessible)
    }

    /// Hero standing at `pos`.
    #[must_use]
    pub fn hero_at(&self, pos: Position) -> Option<HeroId> {
        self.cell_at(pos).and_then(Cell::hero)
    }

    /// Monster standing at `pos`.
    #[must_use]
    pub fn monster_at(&self, pos: Position) -> Option<MonsterId> {
        self.cell_at(pos).and_then(Cell::monster)
    }

    /// Every cell with its position, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, c)| (Position::new(i / BOARD_SIZE, i % BOARD_SIZE), c))
    }

    // === Mutation (crate-internal; callers keep entities in step) ===

    /// Replace the terrain at `pos`. Returns false out of bounds.
    pub(crate) fn set_terrain(&mut self, pos: Position, terrain: Terrain) -> bool {
        match self.cell_at_mut(pos) {
            Some(cell) => {
                cell.set_terrain(terrain);
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_hero(&mut self, pos: Position, hero: Option<HeroId>) -> bool {
        match self.cell_at_mut(pos) {
            Some(cell) => {
                cell.set_hero(hero);
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_monster(&mut self, pos: Position, monster: Option<MonsterId>) -> bool {
        match self.cell_at_mut(pos) {
            Some(cell) => {
                cell.set_monster(monster);
                true
            }
            None => false,
        }
    }
}
