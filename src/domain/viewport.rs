/// Visible area in CSS pixels. Y grows downwards; y = 0 is the top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Pieces strictly below this line are gone for good.
    #[inline]
    pub fn offscreen_y(&self, margin: f32) -> f32 {
        self.height + margin
    }

    /// Depth a piece must reach before the next burst may be scheduled.
    #[inline]
    pub fn trigger_y(&self, fraction: f32) -> f32 {
        self.height * fraction
    }
}
