//! Browser canvas surface (`CanvasRenderingContext2d`)

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::DrawSurface;
use super::shapes::{ArcShape, PathCmd};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Grab the 2D context of `canvas`; `None` if the browser refuses one
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    /// Match the backing store to the viewport
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn trace_arc(&self, arc: &ArcShape) {
        self.ctx.begin_path();
        self.ctx
            .arc(
                arc.center.x as f64,
                arc.center.y as f64,
                arc.radius as f64,
                arc.start as f64,
                arc.end as f64,
            )
            .ok();
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_path(&mut self, path: &[PathCmd], color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        for cmd in path {
            match *cmd {
                PathCmd::MoveTo(p) => self.ctx.move_to(p.x as f64, p.y as f64),
                PathCmd::BezierTo(c1, c2, end) => self.ctx.bezier_curve_to(
                    c1.x as f64,
                    c1.y as f64,
                    c2.x as f64,
                    c2.y as f64,
                    end.x as f64,
                    end.y as f64,
                ),
            }
        }
        self.ctx.fill();
    }

    fn fill_arc(&mut self, arc: &ArcShape, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.trace_arc(arc);
        self.ctx.fill();
    }

    fn stroke_arc(&mut self, arc: &ArcShape, color: &str, line_width: f32) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.trace_arc(arc);
        self.ctx.stroke();
    }

    fn global_alpha(&self) -> f32 {
        self.ctx.global_alpha() as f32
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }
}
