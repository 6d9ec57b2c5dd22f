use crate::domain::Viewport;
use crate::rigid_body::{RigidBody, Vec2};

use super::collision::{resolve_pair, resolve_wall, Wall, WALL_THICKNESS};
use super::{BodyDesc, BodyHandle, PhysicsWorld};

/// Reference step: velocities are expressed in pixels per 60 Hz tick.
pub const BASE_DELTA_MS: f64 = 1000.0 / 60.0;

/// Converts gravity units into px/ms² (same scale as the usual 2D engines).
const GRAVITY_SCALE: f32 = 0.001;

/// Fraction of linear and angular velocity lost per tick.
const AIR_FRICTION: f32 = 0.01;

/// Contact passes per step; more passes settle piles with less overlap.
const CONTACT_ITERATIONS: usize = 2;

/// Manages all bodies of the menu background
pub struct SimpleWorld {
    bodies: Vec<RigidBody>,
    walls: [Wall; 2],
    next_id: u32,
    gravity: Vec2,
}

impl SimpleWorld {
    pub fn new(viewport: Viewport, gravity_y: f32) -> Self {
        let mut world = Self {
            bodies: Vec::new(),
            walls: [Wall::new(Vec2::zero(), WALL_THICKNESS, 0.0); 2],
            next_id: 1,
            gravity: Vec2::new(0.0, gravity_y),
        };
        world.place_walls(viewport);
        world
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.iter().find(|b| b.id == handle.0)
    }

    fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.bodies.iter_mut().find(|b| b.id == handle.0)
    }

    fn integrate(&mut self, ticks: f32) {
        let accel = self.gravity * (GRAVITY_SCALE * (BASE_DELTA_MS * BASE_DELTA_MS) as f32);
        let damping = (1.0 - AIR_FRICTION * ticks).max(0.0);

        for body in self.bodies.iter_mut() {
            if !body.active {
                continue;
            }
            body.velocity += accel * ticks;
            body.velocity = body.velocity * damping;
            body.angular_vel *= damping;

            body.pos += body.velocity * ticks;
            body.angle += body.angular_vel * ticks;
        }
    }

    fn resolve_contacts(&mut self) {
        for _ in 0..CONTACT_ITERATIONS {
            for i in 0..self.bodies.len() {
                let (head, tail) = self.bodies.split_at_mut(i + 1);
                let a = &mut head[i];
                if !a.active {
                    continue;
                }
                for b in tail.iter_mut().filter(|b| b.active) {
                    resolve_pair(a, b);
                }
            }

            for body in self.bodies.iter_mut().filter(|b| b.active) {
                for wall in &self.walls {
                    resolve_wall(body, wall);
                }
            }
        }
    }
}

impl PhysicsWorld for SimpleWorld {
    fn add_body(&mut self, desc: BodyDesc) -> Option<BodyHandle> {
        if !desc.position.x.is_finite() || !desc.position.y.is_finite() {
            return None;
        }
        if !(desc.geometry.area() > 0.0) {
            return None;
        }

        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.bodies
            .push(RigidBody::new(desc.position, desc.geometry, &desc.material, id));
        Some(BodyHandle(id))
    }

    fn remove_body(&mut self, handle: BodyHandle) -> bool {
        match self.bodies.iter().position(|b| b.id == handle.0) {
            Some(idx) => {
                self.bodies.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    fn contains(&self, handle: BodyHandle) -> bool {
        self.body(handle).is_some()
    }

    fn position(&self, handle: BodyHandle) -> Option<Vec2> {
        self.body(handle).map(|b| b.pos)
    }

    fn angle(&self, handle: BodyHandle) -> Option<f32> {
        self.body(handle).map(|b| b.angle)
    }

    fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec2) {
        if let Some(body) = self.body_mut(handle) {
            body.velocity = velocity;
        }
    }

    fn set_angular_velocity(&mut self, handle: BodyHandle, angular_velocity: f32) {
        if let Some(body) = self.body_mut(handle) {
            body.angular_vel = angular_velocity;
        }
    }

    fn step(&mut self, delta_ms: f64) {
        if !(delta_ms > 0.0) {
            return;
        }
        let ticks = (delta_ms / BASE_DELTA_MS) as f32;
        self.integrate(ticks);
        self.resolve_contacts();
    }

    fn place_walls(&mut self, viewport: Viewport) {
        let center_y = viewport.height / 2.0;
        let height = viewport.height * 2.0;
        self.walls = [
            Wall::new(Vec2::new(-WALL_THICKNESS / 2.0, center_y), WALL_THICKNESS, height),
            Wall::new(
                Vec2::new(viewport.width + WALL_THICKNESS / 2.0, center_y),
                WALL_THICKNESS,
                height,
            ),
        ];
    }

    fn body_count(&self) -> usize {
        self.bodies.len()
    }
}
