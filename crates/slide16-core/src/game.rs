//! Session state machine and controller.
//!
//! This module contains the `GameSession` struct (board + phase + RNG), the
//! terminal-state check, and the `GameController` that wires a session to a
//! render collaborator.

use crate::actions::{Direction, GameAction, GameEvent};
use crate::grid::{Grid, Tile, SIZE};
use crate::moves;
use crate::spawn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tiles spawned when a session starts.
pub const INITIAL_TILES: usize = 2;

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Accepting direction input.
    Playing,
    /// No moves remain; direction input is ignored until restart.
    Ended,
}

/// Errors at the input-parsing boundary. Gameplay itself has no
/// recoverable errors: invalid inputs are ignored, not rejected.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("unknown direction: {0}")]
    UnknownDirection(String),
}

/// True when any cell is empty or any cell's right or down neighbor holds
/// an equal value. Checking two directions suffices since equality is
/// symmetric.
pub fn has_available_moves(grid: &Grid) -> bool {
    for row in 0..SIZE {
        for col in 0..SIZE {
            let Some(tile) = grid.get(row, col) else {
                return true;
            };
            if col + 1 < SIZE && grid.get(row, col + 1).map(|t| t.value) == Some(tile.value) {
                return true;
            }
            if row + 1 < SIZE && grid.get(row + 1, col).map(|t| t.value) == Some(tile.value) {
                return true;
            }
        }
    }
    false
}

/// One game from first spawn to terminal board. Recreated wholesale on
/// restart.
#[derive(Debug)]
pub struct GameSession {
    /// The board. Mutated only through [`GameSession::step`].
    pub grid: Grid,
    /// Current phase.
    pub phase: GamePhase,
    rng: StdRng,
}

/// Serializable snapshot of a session for wire/JSON consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Value matrix, 0 for empty cells.
    pub values: [[u32; SIZE]; SIZE],
    /// All tiles with their identities, for animation.
    pub tiles: Vec<Tile>,
    pub ended: bool,
}

impl GameSession {
    /// Start a fresh session with two spawned tiles.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Start a session with a deterministic RNG. Test and replay helper.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let mut grid = Grid::new();
        for _ in 0..INITIAL_TILES {
            spawn::spawn_tile(&mut grid, &mut rng);
        }
        Self {
            grid,
            phase: GamePhase::Playing,
            rng,
        }
    }

    pub fn is_ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    /// Process one direction input: slide and merge, then spawn and check
    /// for a terminal board. A move that changes nothing spawns nothing
    /// and checks nothing; input while ended is ignored. Either case
    /// returns no events.
    pub fn step(&mut self, direction: Direction) -> Vec<GameEvent> {
        if self.phase == GamePhase::Ended {
            return Vec::new();
        }

        let outcome = moves::apply_move(&mut self.grid, direction);
        if !outcome.moved {
            return Vec::new();
        }

        let mut events = vec![GameEvent::BoardShifted { direction }];
        for merge in &outcome.merges {
            events.push(GameEvent::TilesMerged {
                absorber: merge.absorber,
                absorbed: merge.absorbed,
                value: merge.value,
            });
        }

        // A successful move always leaves at least one gap to fill.
        if let Some(id) = spawn::spawn_tile(&mut self.grid, &mut self.rng) {
            let tile = self.grid.tile(id).copied();
            debug_assert!(tile.is_some());
            if let Some(tile) = tile {
                events.push(GameEvent::TileSpawned {
                    id: tile.id,
                    value: tile.value,
                    row: tile.row,
                    col: tile.col,
                });
            }
        }

        if !has_available_moves(&self.grid) {
            self.phase = GamePhase::Ended;
            events.push(GameEvent::GameEnded);
        }

        events
    }

    /// Snapshot the session for serialization.
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut tiles: Vec<Tile> = self.grid.tiles().copied().collect();
        tiles.sort_by_key(|t| t.id);
        SessionSnapshot {
            values: self.grid.values(),
            tiles,
            ended: self.is_ended(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Presentation contract consumed by [`GameController`], implemented by the
/// front-end. Called after every state-affecting change; never called for
/// ignored input.
pub trait Render {
    fn render(&mut self, grid: &Grid);
    fn render_game_over(&mut self);
    fn hide_game_over(&mut self);
}

/// Owns the session and the render collaborator; orchestrates move,
/// spawn, terminal check, and render on each input.
pub struct GameController<V: Render> {
    session: GameSession,
    view: V,
}

impl<V: Render> GameController<V> {
    /// Start a controller over a fresh session and render the initial
    /// board.
    pub fn new(view: V) -> Self {
        Self::with_session(GameSession::new(), view)
    }

    /// Start a controller over a prepared session (e.g. seeded for tests).
    pub fn with_session(session: GameSession, mut view: V) -> Self {
        view.render(&session.grid);
        if session.is_ended() {
            view.render_game_over();
        }
        Self { session, view }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn grid(&self) -> &Grid {
        &self.session.grid
    }

    /// Dispatch a player action.
    pub fn handle_action(&mut self, action: GameAction) -> Vec<GameEvent> {
        match action {
            GameAction::Shift(direction) => self.handle_direction(direction),
            GameAction::Restart => self.restart(),
        }
    }

    /// Process a direction input and re-render if the board changed.
    pub fn handle_direction(&mut self, direction: Direction) -> Vec<GameEvent> {
        let events = self.session.step(direction);
        if !events.is_empty() {
            self.view.render(&self.session.grid);
            if self.session.is_ended() {
                self.view.render_game_over();
            }
        }
        events
    }

    /// Discard the session and start over: two fresh spawns, `Playing`.
    pub fn restart(&mut self) -> Vec<GameEvent> {
        self.session = GameSession::new();
        self.view.hide_game_over();
        self.view.render(&self.session.grid);
        vec![GameEvent::GameRestarted]
    }

    /// Redraw the current state, e.g. after a terminal resize.
    pub fn refresh(&mut self) {
        self.view.render(&self.session.grid);
        if self.session.is_ended() {
            self.view.render_game_over();
        }
    }
}
