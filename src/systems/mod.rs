//! Systems: rigid bodies and the world that simulates them.

pub mod physics_world;
pub mod rigid_body;
