//! Slide-and-merge move engine.
//!
//! One direction-parameterized algorithm handles all four directions: each
//! line is extracted leading-edge first via [`Direction::cell`], compacted,
//! merged, and written back. Tile identity is preserved for sliding tiles;
//! a merge keeps the leading tile's identity and removes the absorbed one.

use crate::actions::Direction;
use crate::grid::{Grid, Tile, TileId, SIZE};

/// One merge performed during a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merge {
    /// Tile that survived, now holding `value`.
    pub absorber: TileId,
    /// Tile consumed by the merge.
    pub absorbed: TileId,
    /// Doubled value after the merge.
    pub value: u32,
}

/// Result of applying one direction input to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether any tile changed cell or value.
    pub moved: bool,
    /// Merges performed, in line order.
    pub merges: Vec<Merge>,
}

/// Collapse one compacted line (empties already removed, leading edge
/// first). Greedy left-to-right scan: a pair of equal consecutive values
/// merges into the leading tile at double value, and the result of a merge
/// never merges again in the same pass. `[2,2,2]` yields `[4,2]`, not
/// `[2,4]`; `[2,2,2,2]` yields `[4,4]`.
pub fn merge_line(line: &[Tile]) -> (Vec<Tile>, Vec<Merge>) {
    let mut merged = Vec::with_capacity(line.len());
    let mut merges = Vec::new();

    let mut i = 0;
    while i < line.len() {
        if i + 1 < line.len() && line[i].value == line[i + 1].value {
            let mut tile = line[i];
            tile.value *= 2;
            merges.push(Merge {
                absorber: tile.id,
                absorbed: line[i + 1].id,
                value: tile.value,
            });
            merged.push(tile);
            i += 2;
        } else {
            merged.push(line[i]);
            i += 1;
        }
    }

    (merged, merges)
}

/// Slide all tiles in `direction`, merging equal adjacent pairs once each.
///
/// A line counts as moved when any of its cells ends up with a different
/// occupant or value than before; a tile sliding across a gap with no
/// merge still moves. Lines of length 0 or 1, and lines already compacted
/// and unmergeable, report no movement.
pub fn apply_move(grid: &mut Grid, direction: Direction) -> MoveOutcome {
    let mut moved = false;
    let mut merges = Vec::new();

    for line in 0..SIZE {
        let mut before: [Option<(TileId, u32)>; SIZE] = [None; SIZE];
        let mut compacted: Vec<Tile> = Vec::with_capacity(SIZE);
        for slot in 0..SIZE {
            let (row, col) = direction.cell(line, slot);
            if let Some(tile) = grid.get(row, col) {
                before[slot] = Some((tile.id, tile.value));
                compacted.push(*tile);
            }
        }

        let (new_line, line_merges) = merge_line(&compacted);

        let mut after: [Option<(TileId, u32)>; SIZE] = [None; SIZE];
        for (slot, tile) in new_line.iter().enumerate() {
            after[slot] = Some((tile.id, tile.value));
        }
        if before != after {
            moved = true;
        }

        for slot in 0..SIZE {
            let (row, col) = direction.cell(line, slot);
            grid.clear_cell(row, col);
        }
        for (slot, tile) in new_line.iter().enumerate() {
            let (row, col) = direction.cell(line, slot);
            grid.put_tile(tile.id, row, col, tile.value);
        }
        for merge in &line_merges {
            grid.remove_tile(merge.absorbed);
        }
        merges.extend(line_merges);
    }

    MoveOutcome { moved, merges }
}
