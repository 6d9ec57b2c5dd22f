//! Glow Flow menu engine - falling-pieces background and haptics in WASM
//!
//! Architecture:
//! - core/        - Logging, randomness, timers, errors
//! - domain/      - Shapes, palette, viewport, scene config
//! - systems/     - Rigid bodies and the physics world
//! - simulation/  - Spawn controller, menu scene, haptics, title
//! - api/         - Public API

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

// Compatibility re-exports (keeps short internal paths working)
pub use systems::physics_world;
pub use systems::rigid_body;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    core::console::info(&format!("Glow Flow menu engine v{} initialized", version()));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::{Haptics, MenuBackground};
pub use api::web::start_menu;
pub use core::MenuError;
pub use domain::{SceneConfig, ShapeKind, Viewport};
pub use simulation::haptics::{HapticFeedback, LoadState, Pattern, Vibration};
pub use simulation::{MenuScene, SpawnController};
