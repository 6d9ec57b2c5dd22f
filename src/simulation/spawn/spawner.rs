//! SpawnController - keeps a bounded trickle of pieces falling
//!
//! Pieces are created just above the viewport, pruned once they drop more
//! than `offscreen_margin` below it, and replenished in small bursts. A burst
//! may only be scheduled once some piece has fallen past the trigger line and
//! no other burst is pending, which caps how fast the population can grow.

use crate::core::{Rng, TimerQueue};
use crate::domain::{Geometry, Material, SceneConfig, ShapeKind, Viewport, PALETTE};
use crate::physics_world::{BodyDesc, BodyHandle, PhysicsWorld};
use crate::rigid_body::Vec2;

/// Spin range at spawn: ±MAX_SPIN rad/tick
const MAX_SPIN: f32 = 0.025;

/// One falling decorative shape.
#[derive(Clone, Debug)]
pub struct Piece {
    pub handle: BodyHandle,
    pub shape: ShapeKind,
    /// Fill and outline styling plus contact properties
    pub material: Material,
    /// Local-space outline, fixed at creation
    pub geometry: Geometry,
}

impl Piece {
    pub fn color(&self) -> &'static str {
        self.material.fill
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SpawnEvent {
    /// Throttled refill: `burst_size` pieces, then reopen the throttle
    Burst,
    /// One staggered piece of the opening sequence
    Intro,
}

pub struct SpawnController {
    pieces: Vec<Piece>,
    can_spawn: bool,
    timers: TimerQueue<SpawnEvent>,
    rng: Rng,
    config: SceneConfig,
}

impl SpawnController {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            pieces: Vec::new(),
            can_spawn: true,
            timers: TimerQueue::new(),
            rng: config.seed.map_or_else(Rng::from_entropy, Rng::new),
            config,
        }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn active_count(&self) -> usize {
        self.pieces.len()
    }

    /// Whether a new burst may be scheduled right now.
    pub fn can_spawn(&self) -> bool {
        self.can_spawn
    }

    /// Spawn events still waiting for their time.
    pub fn pending_events(&self) -> usize {
        self.timers.len()
    }

    /// Create a random piece above the viewport and add it to the active list.
    ///
    /// `x` defaults to a uniform position across the viewport width.
    /// Returns `None` if the world refuses the body; nothing is tracked then.
    pub fn create_piece<W: PhysicsWorld + ?Sized>(
        &mut self,
        world: &mut W,
        viewport: Viewport,
        x: Option<f32>,
    ) -> Option<&Piece> {
        let x = x.unwrap_or_else(|| self.rng.next_f32() * viewport.width);
        let shape = ShapeKind::ALL[self.rng.index(ShapeKind::ALL.len())];
        let material = Material::piece(PALETTE[self.rng.index(PALETTE.len())])
            .with_chamfer(shape.chamfer_radius());
        let geometry = shape.geometry(self.config.target_area);

        let desc = BodyDesc {
            position: Vec2::new(x, -geometry.half_height()),
            geometry: geometry.clone(),
            material,
        };
        let handle = world.add_body(desc)?;

        let spin = self.rng.range(-MAX_SPIN, MAX_SPIN);
        let velocity = Vec2::new(self.rng.range(-1.0, 1.0), self.rng.range(0.5, 1.0));
        world.set_angular_velocity(handle, spin);
        world.set_velocity(handle, velocity);

        self.pieces.push(Piece {
            handle,
            shape,
            material,
            geometry,
        });
        self.pieces.last()
    }

    /// Per-tick bookkeeping: prune fallen pieces, then maybe schedule a burst.
    ///
    /// A piece is pruned when its body is gone or sits below
    /// `height + offscreen_margin`; its body is removed from the world in the
    /// same pass. Returns the number of pruned pieces.
    pub fn update_pieces<W: PhysicsWorld + ?Sized>(
        &mut self,
        world: &mut W,
        viewport: Viewport,
        now_ms: f64,
    ) -> usize {
        let limit = viewport.offscreen_y(self.config.offscreen_margin);
        let before = self.pieces.len();

        self.pieces.retain(|piece| match world.position(piece.handle) {
            Some(pos) if pos.y <= limit => true,
            Some(_) => {
                world.remove_body(piece.handle);
                false
            }
            None => false,
        });
        let pruned = before - self.pieces.len();

        if self.can_spawn {
            let trigger = viewport.trigger_y(self.config.spawn_trigger_fraction);
            let passed = self
                .pieces
                .iter()
                .any(|p| world.position(p.handle).is_some_and(|pos| pos.y >= trigger));
            if passed {
                self.can_spawn = false;
                self.timers
                    .schedule(now_ms, self.config.burst_delay_ms, SpawnEvent::Burst);
            }
        }

        pruned
    }

    /// Schedule the opening pieces, one every `intro_interval_ms` starting now.
    pub fn schedule_intro(&mut self, now_ms: f64) {
        for i in 0..self.config.intro_pieces {
            self.timers.schedule(
                now_ms,
                f64::from(i) * self.config.intro_interval_ms,
                SpawnEvent::Intro,
            );
        }
    }

    /// Run every spawn event that has come due. Returns pieces created.
    pub fn fire_due<W: PhysicsWorld + ?Sized>(
        &mut self,
        world: &mut W,
        viewport: Viewport,
        now_ms: f64,
    ) -> usize {
        let mut created = 0;
        while let Some(event) = self.timers.pop_due(now_ms) {
            match event {
                SpawnEvent::Burst => {
                    for _ in 0..self.config.burst_size {
                        if self.create_piece(world, viewport, None).is_some() {
                            created += 1;
                        }
                    }
                    self.can_spawn = true;
                }
                SpawnEvent::Intro => {
                    if self.create_piece(world, viewport, None).is_some() {
                        created += 1;
                    }
                }
            }
        }
        created
    }

    /// Drop every piece and its body. Pending events still fire later.
    pub fn clear<W: PhysicsWorld + ?Sized>(&mut self, world: &mut W) {
        for piece in self.pieces.drain(..) {
            world.remove_body(piece.handle);
        }
    }
}

#[cfg(test)]
#[path = "../tests/spawner_tests.rs"]
mod tests;
