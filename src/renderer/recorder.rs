//! In-memory draw surface
//!
//! Records every command instead of rasterizing. Used by tests and by the
//! native headless build.

use super::DrawSurface;
use super::shapes::{ArcShape, PathCmd};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    FillPath { segments: usize, color: String },
    FillArc { arc: ArcShape, color: String },
    StrokeArc { arc: ArcShape, color: String, line_width: f32 },
    Alpha(f32),
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    alpha: f32,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            alpha: 1.0,
        }
    }
}

impl RecordingSurface {
    /// Drop recorded commands, keep the current alpha
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn count_paths(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillPath { .. }))
            .count()
    }

    pub fn count_arc_fills(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillArc { .. }))
            .count()
    }

    pub fn count_strokes(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeArc { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_path(&mut self, path: &[PathCmd], color: &str) {
        self.commands.push(DrawCommand::FillPath {
            segments: path.len(),
            color: color.to_string(),
        });
    }

    fn fill_arc(&mut self, arc: &ArcShape, color: &str) {
        self.commands.push(DrawCommand::FillArc {
            arc: *arc,
            color: color.to_string(),
        });
    }

    fn stroke_arc(&mut self, arc: &ArcShape, color: &str, line_width: f32) {
        self.commands.push(DrawCommand::StrokeArc {
            arc: *arc,
            color: color.to_string(),
            line_width,
        });
    }

    fn global_alpha(&self) -> f32 {
        self.alpha
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
        self.commands.push(DrawCommand::Alpha(alpha));
    }
}
