//! WebAssembly bindings for the slide16 game engine.
//!
//! This module exposes the session to JavaScript through wasm-bindgen; the
//! browser front-end reads the state JSON and does its own rendering.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::actions::Direction;
#[cfg(feature = "wasm")]
use crate::game::GameSession;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed game wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmGame {
    session: GameSession,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmGame {
    /// Create a new game with two spawned tiles.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame {
            session: GameSession::new(),
        }
    }

    /// Create a deterministic game from a seed.
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(seed: u64) -> WasmGame {
        WasmGame {
            session: GameSession::with_seed(seed),
        }
    }

    /// Get the current session state as JSON.
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        serde_json::to_string(&self.session.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Process a direction ("up", "down", "left", "right"), returning the
    /// resulting events as a JSON array. Unrecognized input is a no-op and
    /// returns an empty array, as does input while the game is over.
    #[wasm_bindgen(js_name = handleDirection)]
    pub fn handle_direction(&mut self, direction: &str) -> String {
        let events = match direction.parse::<Direction>() {
            Ok(direction) => self.session.step(direction),
            Err(_) => Vec::new(),
        };
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    /// Discard the session and start over.
    pub fn restart(&mut self) {
        self.session = GameSession::new();
    }

    /// Check if the game is over.
    #[wasm_bindgen(js_name = isEnded)]
    pub fn is_ended(&self) -> bool {
        self.session.is_ended()
    }
}

#[cfg(feature = "wasm")]
impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}
