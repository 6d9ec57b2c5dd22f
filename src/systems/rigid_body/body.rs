use crate::domain::{Geometry, Material};

use super::vec2::Vec2;

/// Rigid Body - moves as a single unit
pub struct RigidBody {
    // === Physics State ===
    /// World position (center of mass)
    pub pos: Vec2,
    /// Velocity vector (pixels per 60 Hz tick)
    pub velocity: Vec2,
    /// Rotation angle (radians)
    pub angle: f32,
    /// Angular velocity (radians per tick)
    pub angular_vel: f32,
    /// area × density
    pub mass: f32,
    pub inverse_mass: f32,
    /// Moment of inertia for rotation
    pub moment_of_inertia: f32,
    /// Is body active (simulated)?
    pub active: bool,
    /// Unique ID for this body
    pub id: u32,

    // === Shape Definition ===
    /// Outline relative to center (0,0)
    pub geometry: Geometry,
    /// Contact radius used against walls and other bodies
    pub radius: f32,

    // === Material properties ===
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    pub friction: f32,
}

impl RigidBody {
    pub fn new(pos: Vec2, geometry: Geometry, material: &Material, id: u32) -> Self {
        let density = material.density.max(f32::EPSILON);
        let mass = (geometry.area() * density).max(f32::EPSILON);
        let moment_of_inertia = (geometry.inertia_per_density() * density).max(1.0);
        let radius = geometry.bounding_radius();

        Self {
            pos,
            velocity: Vec2::zero(),
            angle: 0.0,
            angular_vel: 0.0,
            mass,
            inverse_mass: 1.0 / mass,
            moment_of_inertia,
            active: true,
            id,
            geometry,
            radius,
            restitution: material.restitution.clamp(0.0, 1.0),
            friction: material.friction.max(0.0),
        }
    }

    /// Apply impulse at center of mass
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse * self.inverse_mass;
    }

    /// Apply torque (rotational impulse)
    pub fn apply_torque(&mut self, torque: f32) {
        self.angular_vel += torque / self.moment_of_inertia;
    }
}
