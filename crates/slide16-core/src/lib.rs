//! slide16 - a 4x4 sliding-tile merge puzzle engine
//!
//! This crate provides the core game logic for slide16, including:
//! - Board representation with identity-bearing tiles
//! - The slide-and-merge move engine
//! - Random tile spawning and terminal-state detection
//! - Session state machine with a render-collaborator contract
//!
//! # Architecture
//!
//! The engine is platform-agnostic and fully synchronous: one direction
//! input is processed to completion (slide, merge, spawn, terminal check)
//! before the next is accepted. It can be compiled to:
//! - Native Rust for a terminal or desktop front-end
//! - WebAssembly for a browser front-end
//!
//! # Modules
//!
//! - [`grid`]: the 4x4 board and tile arena
//! - [`actions`]: directions, player actions, and resulting events
//! - [`moves`]: the slide-and-merge algorithm
//! - [`spawn`]: random tile spawning
//! - [`game`]: session state machine, terminal detection, controller

pub mod actions;
pub mod game;
pub mod grid;
pub mod moves;
pub mod spawn;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::{Direction, GameAction, GameEvent};
pub use game::{
    has_available_moves, GameController, GameError, GamePhase, GameSession, Render,
    SessionSnapshot, INITIAL_TILES,
};
pub use grid::{Grid, Tile, TileId, SIZE};
pub use moves::{apply_move, merge_line, Merge, MoveOutcome};
pub use spawn::{spawn_tile, FOUR_PROBABILITY};
