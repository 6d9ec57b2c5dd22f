/// Fill colors for falling pieces, picked uniformly.
pub const PALETTE: [&str; 16] = [
    "#FE0000", "#3FFF0F", "#005DFF", "#F5FF00",
    "#FF009C", "#01FFE5", "#FF9C00", "#C500FF",
    "#960000", "#259609", "#00389C", "#999E00",
    "#99005E", "#019C8C", "#965C00", "#770099",
];

/// Outline shared by every piece.
pub const STROKE_COLOR: &str = "#FFFFFF";
pub const STROKE_WIDTH: f32 = 3.0;

/// Physical and visual material of a piece body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub friction: f32,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    pub density: f32,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub line_width: f32,
    /// Corner rounding radius, 0 for sharp corners
    pub chamfer: f32,
}

impl Material {
    pub fn piece(fill: &'static str) -> Self {
        Self {
            friction: 0.3,
            restitution: 0.2,
            density: 1.0,
            fill,
            stroke: STROKE_COLOR,
            line_width: STROKE_WIDTH,
            chamfer: 0.0,
        }
    }

    pub fn with_chamfer(self, radius: f32) -> Self {
        Self {
            chamfer: radius.max(0.0),
            ..self
        }
    }
}
