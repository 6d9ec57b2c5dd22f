//! PhysicsWorld - the rigid-body engine seen from the menu background
//!
//! The spawn controller only needs to create and remove bodies, seed their
//! motion and read their position back. `SimpleWorld` is the bundled engine:
//! - Gravity and air drag integrated per fixed step.
//! - Two invisible static walls just outside the viewport's side edges.
//! - Bounding-circle contacts between bodies with restitution and friction.
//! - No floor: bodies fall out of the bottom and are pruned by the caller.

mod collision;
mod system;

pub use system::{SimpleWorld, BASE_DELTA_MS};

use crate::domain::{Geometry, Material, Viewport};
use crate::rigid_body::Vec2;

/// Stable reference to a body inside a world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub u32);

/// Everything needed to create a dynamic body.
#[derive(Clone, Debug)]
pub struct BodyDesc {
    pub position: Vec2,
    pub geometry: Geometry,
    pub material: Material,
}

pub trait PhysicsWorld {
    /// Returns `None` if the body cannot be placed.
    fn add_body(&mut self, desc: BodyDesc) -> Option<BodyHandle>;

    /// Returns false when the handle was not present.
    fn remove_body(&mut self, handle: BodyHandle) -> bool;

    fn contains(&self, handle: BodyHandle) -> bool;

    fn position(&self, handle: BodyHandle) -> Option<Vec2>;

    fn angle(&self, handle: BodyHandle) -> Option<f32>;

    fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec2);

    fn set_angular_velocity(&mut self, handle: BodyHandle, angular_velocity: f32);

    /// Advance the simulation by `delta_ms`.
    fn step(&mut self, delta_ms: f64);

    /// Move the side walls to hug a (possibly resized) viewport.
    fn place_walls(&mut self, viewport: Viewport);

    fn body_count(&self) -> usize;
}
