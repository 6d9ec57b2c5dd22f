use serde::Serialize;

use crate::physics_world::PhysicsWorld;
use crate::domain::Geometry;
use crate::rigid_body::Vec2;

use super::spawner::Piece;

/// World-space outline ready to draw.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outline {
    Circle { center: Vec2, radius: f32 },
    Polygon(Vec<Vec2>),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceSprite {
    pub outline: Outline,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub line_width: f32,
    /// Corner rounding radius for polygon outlines
    pub chamfer: f32,
}

/// Transform every live piece into world space. Pieces whose body has
/// vanished are skipped; the next `update_pieces` prunes them.
pub fn extract_sprites<W: PhysicsWorld + ?Sized>(pieces: &[Piece], world: &W) -> Vec<PieceSprite> {
    let mut sprites = Vec::with_capacity(pieces.len());
    for piece in pieces {
        let (Some(pos), Some(angle)) = (world.position(piece.handle), world.angle(piece.handle)) else {
            continue;
        };
        let outline = match &piece.geometry {
            Geometry::Circle { radius } => Outline::Circle {
                center: pos,
                radius: *radius,
            },
            Geometry::Polygon { vertices } => {
                Outline::Polygon(vertices.iter().map(|v| pos + v.rotate(angle)).collect())
            }
        };
        sprites.push(PieceSprite {
            outline,
            fill: piece.material.fill,
            stroke: piece.material.stroke,
            line_width: piece.material.line_width,
            chamfer: piece.material.chamfer,
        });
    }
    sprites
}
