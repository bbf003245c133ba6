//! Board representation: identity-bearing tiles on a fixed 4x4 grid.
//!
//! Cells hold handles into a tile arena rather than raw values, so a tile
//! can be tracked across a move (a front-end animating slides needs to know
//! which tile went where). The grid is mutated only by the move engine and
//! the spawn policy; rendering reads it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Board side length. The game is defined on a 4x4 board.
pub const SIZE: usize = 4;

/// Handle to a tile in the arena. Allocated monotonically per grid.
pub type TileId = u32;

/// A single tile: a power-of-two value at a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    /// Power-of-two value, >= 2.
    pub value: u32,
    pub row: usize,
    pub col: usize,
}

/// The 4x4 board: a matrix of optional tile handles plus the tile arena.
///
/// Invariant: each occupied cell holds exactly one tile whose stored
/// position matches its matrix coordinates, and each tile appears in
/// exactly one cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Option<TileId>; SIZE]; SIZE],
    tiles: HashMap<TileId, Tile>,
    next_id: TileId,
}

impl Grid {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[None; SIZE]; SIZE],
            tiles: HashMap::new(),
            next_id: 0,
        }
    }

    /// Build a board from a value matrix (0 = empty). Test and setup helper.
    pub fn from_values(values: [[u32; SIZE]; SIZE]) -> Self {
        let mut grid = Self::new();
        for (row, line) in values.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value != 0 {
                    grid.insert_tile(row, col, value);
                }
            }
        }
        grid
    }

    /// The tile occupying a cell, if any.
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.cells[row][col].and_then(|id| self.tiles.get(&id))
    }

    /// Look up a tile by handle.
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].is_none()
    }

    /// All empty coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empties = Vec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.cells[row][col].is_none() {
                    empties.push((row, col));
                }
            }
        }
        empties
    }

    /// Number of tiles on the board.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Sum of all tile values.
    pub fn total_value(&self) -> u32 {
        self.tiles.values().map(|t| t.value).sum()
    }

    /// Iterate over all tiles in arbitrary order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Snapshot of the board as a value matrix (0 = empty).
    pub fn values(&self) -> [[u32; SIZE]; SIZE] {
        let mut values = [[0; SIZE]; SIZE];
        for row in 0..SIZE {
            for col in 0..SIZE {
                if let Some(tile) = self.get(row, col) {
                    values[row][col] = tile.value;
                }
            }
        }
        values
    }

    /// Create a new tile in an empty cell. Returns its handle.
    pub fn insert_tile(&mut self, row: usize, col: usize, value: u32) -> TileId {
        debug_assert!(self.cells[row][col].is_none(), "cell already occupied");
        let id = self.next_id;
        self.next_id += 1;
        self.tiles.insert(
            id,
            Tile {
                id,
                value,
                row,
                col,
            },
        );
        self.cells[row][col] = Some(id);
        id
    }

    /// Clear a cell without touching the arena. Move-engine internal.
    pub(crate) fn clear_cell(&mut self, row: usize, col: usize) {
        self.cells[row][col] = None;
    }

    /// Put an existing tile into a cell, updating its stored position and
    /// value. Move-engine internal; the caller manages the tile's old cell.
    pub(crate) fn put_tile(&mut self, id: TileId, row: usize, col: usize, value: u32) {
        debug_assert!(self.cells[row][col].is_none(), "cell already occupied");
        self.cells[row][col] = Some(id);
        if let Some(tile) = self.tiles.get_mut(&id) {
            tile.row = row;
            tile.col = col;
            tile.value = value;
        } else {
            debug_assert!(false, "unknown tile handle {id}");
        }
    }

    /// Drop a tile from the arena. Its cell must already be cleared.
    pub(crate) fn remove_tile(&mut self, id: TileId) {
        let removed = self.tiles.remove(&id);
        debug_assert!(removed.is_some(), "unknown tile handle {id}");
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        assert_eq!(grid.tile_count(), 0);
        assert_eq!(grid.empty_cells().len(), SIZE * SIZE);
    }

    #[test]
    fn test_insert_tile_keeps_back_references_consistent() {
        let mut grid = Grid::new();
        let id = grid.insert_tile(1, 2, 4);

        let tile = grid.get(1, 2).expect("cell should be occupied");
        assert_eq!(tile.id, id);
        assert_eq!(tile.value, 4);
        assert_eq!((tile.row, tile.col), (1, 2));
        assert!(!grid.is_empty(1, 2));
        assert!(grid.is_empty(0, 0));
    }

    #[test]
    fn test_from_values_round_trips() {
        let values = [[2, 0, 4, 0], [0, 8, 0, 0], [0, 0, 16, 0], [0, 0, 0, 2]];
        let grid = Grid::from_values(values);
        assert_eq!(grid.values(), values);
        assert_eq!(grid.tile_count(), 5);
        assert_eq!(grid.total_value(), 32);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut grid = Grid::from_values([[2; SIZE]; SIZE]);
        assert!(grid.empty_cells().is_empty());

        let id = grid.get(2, 3).unwrap().id;
        grid.clear_cell(2, 3);
        grid.remove_tile(id);
        assert_eq!(grid.empty_cells(), vec![(2, 3)]);
    }
}
