//! Snake web crate.
//!
//! Classic Snake on a canvas. The game core (`game`, `session`) is plain Rust
//! and runs natively under `cargo test`; the `web` module is the browser
//! adapter, mounted from JS with `start_game()`.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod session;
pub mod storage;
pub mod web;

pub use config::GameConfig;
pub use error::{Action, GameError};
pub use game::{Advance, Cell, Collision, Direction, GameState, Grid, Phase, StepOutcome};
pub use input::Command;
pub use session::{Session, TickReport, Ticker};
pub use storage::{HighScore, HighScoreStore, LocalStorageStore, MemoryStore};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Err only when another logger is already installed
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Entry point called from the page once the module is loaded.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::mount_game()
}
