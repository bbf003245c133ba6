//! Player inputs and the events they produce.
//!
//! A session consumes [`GameAction`]s and emits [`GameEvent`]s describing
//! what changed, so front-ends can animate moves without the core knowing
//! anything about rendering.

use crate::game::GameError;
use crate::grid::{TileId, SIZE};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A slide direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset (d_row, d_col) of the slide.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Board coordinates of `slot` within `line`, leading edge first.
    ///
    /// A line is a row (left/right) or a column (up/down); slot 0 is the
    /// cell tiles slide toward. One traversal order serves all four
    /// directions, so the move engine needs no per-direction loops.
    pub fn cell(&self, line: usize, slot: usize) -> (usize, usize) {
        match self {
            Direction::Left => (line, slot),
            Direction::Right => (line, SIZE - 1 - slot),
            Direction::Up => (slot, line),
            Direction::Down => (SIZE - 1 - slot, line),
        }
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" | "Up" => Ok(Direction::Up),
            "down" | "Down" => Ok(Direction::Down),
            "left" | "Left" => Ok(Direction::Left),
            "right" | "Right" => Ok(Direction::Right),
            other => Err(GameError::UnknownDirection(other.to_string())),
        }
    }
}

/// All possible actions a player can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Slide the board in a direction.
    Shift(Direction),
    /// Discard the session and start over with a fresh board.
    Restart,
}

/// Events that occur as a result of actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// At least one tile moved in response to a shift.
    BoardShifted { direction: Direction },

    /// Two equal tiles combined. The absorber kept its identity and now
    /// holds the doubled value; the absorbed tile no longer exists.
    TilesMerged {
        absorber: TileId,
        absorbed: TileId,
        value: u32,
    },

    /// A new tile appeared after a successful move.
    TileSpawned {
        id: TileId,
        value: u32,
        row: usize,
        col: usize,
    },

    /// No legal move remains; the session is over until restart.
    GameEnded,

    /// The session was rebuilt with a fresh board.
    GameRestarted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_orders_leading_edge_first() {
        assert_eq!(Direction::Left.cell(1, 0), (1, 0));
        assert_eq!(Direction::Right.cell(1, 0), (1, 3));
        assert_eq!(Direction::Up.cell(2, 0), (0, 2));
        assert_eq!(Direction::Down.cell(2, 0), (3, 2));
    }

    #[test]
    fn test_cell_covers_every_coordinate_once() {
        for direction in Direction::ALL {
            let mut seen = [[false; SIZE]; SIZE];
            for line in 0..SIZE {
                for slot in 0..SIZE {
                    let (row, col) = direction.cell(line, slot);
                    assert!(!seen[row][col]);
                    seen[row][col] = true;
                }
            }
        }
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("Left".parse::<Direction>().unwrap(), Direction::Left);
        assert!("northwest".parse::<Direction>().is_err());
    }
}
