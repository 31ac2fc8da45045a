//! 2D rendering
//!
//! The simulation never draws. A frame is produced by walking the session
//! state and issuing commands to a [`DrawSurface`]: the browser canvas in
//! production, an in-memory recorder in tests and headless runs.

pub mod recorder;
pub mod scene;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;

pub use recorder::{DrawCommand, RecordingSurface};
pub use scene::{draw_frame, draw_heart, draw_paddle, draw_particle};
pub use shapes::{ArcShape, PathCmd};

/// A 2D raster target with canvas-like semantics
///
/// Arcs sweep clockwise in screen space (y grows downward).
pub trait DrawSurface {
    /// Erase the whole `width` x `height` area
    fn clear(&mut self, width: f32, height: f32);

    /// Fill a closed path made of move/bezier commands
    fn fill_path(&mut self, path: &[PathCmd], color: &str);

    /// Fill a circular sector or disc
    fn fill_arc(&mut self, arc: &ArcShape, color: &str);

    fn stroke_arc(&mut self, arc: &ArcShape, color: &str, line_width: f32);

    fn global_alpha(&self) -> f32;

    fn set_global_alpha(&mut self, alpha: f32);

    /// Fill a full circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.fill_arc(&ArcShape::circle(center, radius), color);
    }
}
