//! Domain data: piece shapes, palette and materials, viewport, scene config.

pub mod config;
pub mod palette;
pub mod shapes;
pub mod viewport;

pub use config::SceneConfig;
pub use palette::{Material, PALETTE};
pub use shapes::{Geometry, ShapeKind, CHAMFER_RADIUS, TARGET_AREA};
pub use viewport::Viewport;
