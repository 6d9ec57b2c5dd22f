//! Canvas 2D renderer for the menu background.

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement};

use crate::core::MenuError;
use crate::domain::Viewport;
use crate::rigid_body::Vec2;
use crate::simulation::{Outline, PieceSprite};

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Create a transparent canvas filling `container`.
    pub fn attach(document: &Document, container: &Element, viewport: Viewport) -> Result<Self, MenuError> {
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| MenuError::Dom("created element is not a <canvas>".to_string()))?;
        container.append_child(&canvas)?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| MenuError::Dom("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| MenuError::Dom("context is not 2d".to_string()))?;

        let renderer = Self { canvas, ctx };
        renderer.resize(viewport);
        Ok(renderer)
    }

    pub fn resize(&self, viewport: Viewport) {
        self.canvas.set_width(viewport.width as u32);
        self.canvas.set_height(viewport.height as u32);
    }

    pub fn draw(&self, sprites: &[PieceSprite]) -> Result<(), MenuError> {
        let ctx = &self.ctx;
        ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );

        for sprite in sprites {
            ctx.begin_path();
            match &sprite.outline {
                Outline::Circle { center, radius } => {
                    ctx.arc(f64::from(center.x), f64::from(center.y), f64::from(*radius), 0.0, TAU)?;
                }
                Outline::Polygon(points) if points.len() >= 3 => {
                    trace_polygon(ctx, points, sprite.chamfer)?;
                }
                Outline::Polygon(_) => continue,
            }
            ctx.set_fill_style_str(sprite.fill);
            ctx.fill();
            ctx.set_stroke_style_str(sprite.stroke);
            ctx.set_line_width(f64::from(sprite.line_width));
            ctx.stroke();
        }
        Ok(())
    }
}

/// Closed outline through `points`, corners rounded by `chamfer`.
fn trace_polygon(ctx: &CanvasRenderingContext2d, points: &[Vec2], chamfer: f32) -> Result<(), MenuError> {
    let n = points.len();
    if chamfer <= 0.0 {
        ctx.move_to(f64::from(points[0].x), f64::from(points[0].y));
        for p in &points[1..] {
            ctx.line_to(f64::from(p.x), f64::from(p.y));
        }
    } else {
        // Start mid-edge so every corner gets its own arc
        let start = (points[n - 1] + points[0]) * 0.5;
        ctx.move_to(f64::from(start.x), f64::from(start.y));
        for i in 0..n {
            let corner = points[i];
            let next = points[(i + 1) % n];
            ctx.arc_to(
                f64::from(corner.x),
                f64::from(corner.y),
                f64::from(next.x),
                f64::from(next.y),
                f64::from(chamfer),
            )?;
        }
    }
    ctx.close_path();
    Ok(())
}
