//! Piece shapes and their geometry
//!
//! Every shape is sized from a single target area so all pieces carry a
//! comparable visual weight. Circle, square, rectangle, rhombus and the
//! regular polygons hit the area exactly. Trapezoid and oval stretch a fixed
//! template by a heuristic factor and land a few percent under it.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::rigid_body::Vec2;

/// Cross-sectional area every piece is sized for (units²)
pub const TARGET_AREA: f32 = 1500.0;

/// Corner rounding on the plain shapes (circle, square, rectangle)
pub const CHAMFER_RADIUS: f32 = 5.0;

/// Vertex count of the oval outline
const OVAL_SEGMENTS: usize = 20;

const TRAPEZOID_TEMPLATE: [(f32, f32); 4] = [(-50.0, -25.0), (50.0, -25.0), (30.0, 25.0), (-30.0, 25.0)];
const RHOMBUS_TEMPLATE: [(f32, f32); 4] = [(0.0, -50.0), (50.0, 0.0), (0.0, 50.0), (-50.0, 0.0)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    Circle,
    Square,
    Rectangle,
    Triangle,
    Pentagon,
    Hexagon,
    Trapezoid,
    Rhombus,
    Oval,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 9] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
        ShapeKind::Pentagon,
        ShapeKind::Hexagon,
        ShapeKind::Trapezoid,
        ShapeKind::Rhombus,
        ShapeKind::Oval,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Trapezoid => "trapezoid",
            ShapeKind::Rhombus => "rhombus",
            ShapeKind::Oval => "oval",
        }
    }

    /// False for the template-stretched shapes whose area is only approximate.
    pub fn is_area_exact(self) -> bool {
        !matches!(self, ShapeKind::Trapezoid | ShapeKind::Oval)
    }

    /// Corner rounding radius drawn on this shape.
    pub fn chamfer_radius(self) -> f32 {
        match self {
            ShapeKind::Circle | ShapeKind::Square | ShapeKind::Rectangle => CHAMFER_RADIUS,
            _ => 0.0,
        }
    }

    /// Local-space geometry (centered on the centroid) for the given area.
    pub fn geometry(self, area: f32) -> Geometry {
        match self {
            ShapeKind::Circle => Geometry::Circle {
                radius: (area / PI).sqrt(),
            },
            ShapeKind::Square => {
                let side = area.sqrt();
                Geometry::rect(side, side)
            }
            ShapeKind::Rectangle => {
                let width = area.sqrt() * 2.0;
                Geometry::rect(width, area / width)
            }
            ShapeKind::Triangle => Geometry::regular(3, area),
            ShapeKind::Pentagon => Geometry::regular(5, area),
            ShapeKind::Hexagon => Geometry::regular(6, area),
            ShapeKind::Trapezoid => {
                let width = (area * 1.5).sqrt();
                let height = (area / width) * 1.2;
                Geometry::from_template(&TRAPEZOID_TEMPLATE, width / 100.0, height / 50.0)
            }
            ShapeKind::Rhombus => {
                let width = (area * 3.5).sqrt();
                let height = (area / width) * 2.0;
                Geometry::from_template(&RHOMBUS_TEMPLATE, width / 100.0, height / 100.0)
            }
            ShapeKind::Oval => {
                let width = (area * 3.0).sqrt();
                let height = (area / width) * 1.2;
                let vertices = (0..OVAL_SEGMENTS)
                    .map(|i| {
                        let angle = (i as f32 / OVAL_SEGMENTS as f32) * PI * 2.0;
                        Vec2::new(width / 2.0 * angle.cos(), height / 2.0 * angle.sin())
                    })
                    .collect();
                Geometry::polygon(vertices)
            }
        }
    }
}

/// Shape outline in local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Circle { radius: f32 },
    /// Convex outline, recentred so the centroid sits at (0, 0)
    Polygon { vertices: Vec<Vec2> },
}

impl Geometry {
    fn rect(width: f32, height: f32) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        Geometry::Polygon {
            vertices: vec![
                Vec2::new(-hw, -hh),
                Vec2::new(hw, -hh),
                Vec2::new(hw, hh),
                Vec2::new(-hw, hh),
            ],
        }
    }

    /// Regular N-gon whose edge comes from A = N·s² / (4·tan(π/N)).
    fn regular(sides: usize, area: f32) -> Self {
        let n = sides as f32;
        let side = (4.0 * area * (PI / n).tan() / n).sqrt();
        let radius = side / (2.0 * (PI / n).sin());
        let theta = 2.0 * PI / n;
        let offset = theta * 0.5;
        let vertices = (0..sides)
            .map(|i| {
                let angle = offset + theta * i as f32;
                Vec2::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        Geometry::polygon(vertices)
    }

    fn from_template(template: &[(f32, f32)], sx: f32, sy: f32) -> Self {
        let vertices = template
            .iter()
            .map(|&(x, y)| Vec2::new(x * sx, y * sy))
            .collect();
        Geometry::polygon(vertices)
    }

    fn polygon(vertices: Vec<Vec2>) -> Self {
        let c = centroid(&vertices);
        Geometry::Polygon {
            vertices: vertices.into_iter().map(|v| v - c).collect(),
        }
    }

    pub fn area(&self) -> f32 {
        match self {
            Geometry::Circle { radius } => PI * radius * radius,
            Geometry::Polygon { vertices } => signed_area(vertices).abs(),
        }
    }

    /// Distance from the center to the topmost point.
    pub fn half_height(&self) -> f32 {
        match self {
            Geometry::Circle { radius } => *radius,
            Geometry::Polygon { vertices } => vertices
                .iter()
                .map(|v| -v.y)
                .fold(0.0, f32::max),
        }
    }

    /// Radius of the smallest origin-centered circle containing the shape.
    pub fn bounding_radius(&self) -> f32 {
        match self {
            Geometry::Circle { radius } => *radius,
            Geometry::Polygon { vertices } => vertices
                .iter()
                .map(|v| v.length())
                .fold(0.0, f32::max),
        }
    }

    /// Second moment of area about the centroid, per unit density.
    pub fn inertia_per_density(&self) -> f32 {
        match self {
            Geometry::Circle { radius } => 0.5 * PI * radius.powi(4),
            Geometry::Polygon { vertices } => {
                let numer: f32 = edges(vertices)
                    .map(|(a, b)| a.cross(b).abs() * (b.dot(b) + b.dot(a) + a.dot(a)))
                    .sum();
                (numer / 12.0).max(1.0)
            }
        }
    }
}

fn edges(vertices: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

fn signed_area(vertices: &[Vec2]) -> f32 {
    edges(vertices).map(|(a, b)| a.cross(b)).sum::<f32>() * 0.5
}

fn centroid(vertices: &[Vec2]) -> Vec2 {
    let area = signed_area(vertices);
    if area.abs() < f32::EPSILON {
        return Vec2::zero();
    }
    let mut c = Vec2::zero();
    for (a, b) in edges(vertices) {
        let cross = a.cross(b);
        c += (a + b) * cross;
    }
    c * (1.0 / (6.0 * area))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_err(actual: f32, expected: f32) -> f32 {
        ((actual - expected) / expected).abs()
    }

    #[test]
    fn exact_shapes_hit_target_area() {
        for kind in ShapeKind::ALL.iter().copied().filter(|k| k.is_area_exact()) {
            let area = kind.geometry(TARGET_AREA).area();
            assert!(
                rel_err(area, TARGET_AREA) < 1e-3,
                "{} area {} too far from {}",
                kind.name(),
                area,
                TARGET_AREA
            );
        }
    }

    #[test]
    fn template_shapes_stay_close_to_target_area() {
        let trapezoid = ShapeKind::Trapezoid.geometry(TARGET_AREA).area();
        let oval = ShapeKind::Oval.geometry(TARGET_AREA).area();
        // 0.96·A and ≈0.927·A respectively
        assert!(rel_err(trapezoid, TARGET_AREA * 0.96) < 1e-3, "trapezoid {trapezoid}");
        assert!(rel_err(oval, TARGET_AREA * 0.927) < 2e-3, "oval {oval}");
        assert!(rel_err(trapezoid, TARGET_AREA) < 0.1);
        assert!(rel_err(oval, TARGET_AREA) < 0.1);
    }

    #[test]
    fn hexagon_circumradius_equals_edge() {
        let side = (2.0 * TARGET_AREA / (3.0 * 3f32.sqrt())).sqrt();
        let geom = ShapeKind::Hexagon.geometry(TARGET_AREA);
        assert!(rel_err(geom.bounding_radius(), side) < 1e-3);
    }

    #[test]
    fn polygons_are_recentred_on_centroid() {
        let Geometry::Polygon { vertices } = ShapeKind::Trapezoid.geometry(TARGET_AREA) else {
            panic!("trapezoid should be a polygon");
        };
        let c = centroid(&vertices);
        assert!(c.length() < 1e-3, "centroid {c:?}");
    }

    #[test]
    fn rectangle_is_twice_as_wide_as_square() {
        let Geometry::Polygon { vertices } = ShapeKind::Rectangle.geometry(TARGET_AREA) else {
            panic!("rectangle should be a polygon");
        };
        let width = vertices[1].x - vertices[0].x;
        assert!(rel_err(width, TARGET_AREA.sqrt() * 2.0) < 1e-4);
    }

    #[test]
    fn every_shape_has_positive_extent() {
        for kind in ShapeKind::ALL {
            let geom = kind.geometry(TARGET_AREA);
            assert!(geom.half_height() > 0.0, "{}", kind.name());
            assert!(geom.bounding_radius() >= geom.half_height(), "{}", kind.name());
            assert!(geom.inertia_per_density() > 0.0, "{}", kind.name());
        }
    }

    #[test]
    fn only_plain_shapes_are_chamfered() {
        let chamfered: Vec<_> = ShapeKind::ALL
            .into_iter()
            .filter(|k| k.chamfer_radius() > 0.0)
            .collect();
        assert_eq!(chamfered, [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Rectangle]);
        assert_eq!(ShapeKind::Square.chamfer_radius(), CHAMFER_RADIUS);
    }
}
