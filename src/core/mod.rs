//! Core utilities shared by every system: logging, randomness,
//! deferred timers and start-up errors.

pub mod console;
pub mod error;
pub mod random;
pub mod timers;

pub use error::MenuError;
pub use random::Rng;
pub use timers::TimerQueue;
