//! Public API
//!
//! - `wasm`: `wasm_bindgen` classes for hosts that drive the scene themselves
//! - `web`: the ready-made menu page wiring

pub mod wasm;
pub mod web;
