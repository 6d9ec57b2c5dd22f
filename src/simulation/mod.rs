//! MenuScene - the menu background, one frame at a time
//!
//! Everything runs on one thread, driven by the host's animation callback:
//! - due spawn events fire (intro pieces, throttled bursts)
//! - the world advances by one fixed step
//! - fallen pieces are pruned and the next burst may be scheduled
//!
//! Haptics live alongside but share nothing with the scene.

use crate::domain::{SceneConfig, Viewport};
use crate::physics_world::{PhysicsWorld, SimpleWorld};

#[path = "spawn/spawner.rs"]
mod spawner;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "title/title.rs"]
pub mod title;
pub mod haptics;

pub use render_extract::{extract_sprites, Outline, PieceSprite};
pub use spawner::{Piece, SpawnController};

pub struct MenuScene<W: PhysicsWorld = SimpleWorld> {
    world: W,
    spawner: SpawnController,
    viewport: Viewport,
    step_ms: f64,
    frame: u64,
}

impl MenuScene<SimpleWorld> {
    pub fn new(viewport: Viewport, config: SceneConfig) -> Self {
        let world = SimpleWorld::new(viewport, config.gravity_y);
        Self::with_world(world, viewport, config)
    }
}

impl<W: PhysicsWorld> MenuScene<W> {
    pub fn with_world(mut world: W, viewport: Viewport, config: SceneConfig) -> Self {
        world.place_walls(viewport);
        Self {
            world,
            step_ms: config.step_ms,
            spawner: SpawnController::new(config),
            viewport,
            frame: 0,
        }
    }

    /// Queue the opening pieces. Call once, when the page has loaded.
    pub fn start(&mut self, now_ms: f64) {
        self.spawner.schedule_intro(now_ms);
    }

    /// Advance one animation frame.
    pub fn frame(&mut self, now_ms: f64) {
        self.spawner.fire_due(&mut self.world, self.viewport, now_ms);
        self.world.step(self.step_ms);
        self.spawner
            .update_pieces(&mut self.world, self.viewport, now_ms);
        self.frame += 1;
    }

    /// Follow a viewport resize. Pieces keep their positions.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.world.place_walls(viewport);
    }

    /// Spawn one piece right away, e.g. at a given x.
    pub fn spawn(&mut self, x: Option<f32>) -> bool {
        self.spawner
            .create_piece(&mut self.world, self.viewport, x)
            .is_some()
    }

    pub fn sprites(&self) -> Vec<PieceSprite> {
        extract_sprites(self.spawner.pieces(), &self.world)
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn spawner(&self) -> &SpawnController {
        &self.spawner
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn piece_count(&self) -> usize {
        self.spawner.active_count()
    }

    /// Remove every piece and body.
    pub fn clear(&mut self) {
        self.spawner.clear(&mut self.world);
    }
}

#[cfg(test)]
#[path = "tests/scene_tests.rs"]
mod tests;
