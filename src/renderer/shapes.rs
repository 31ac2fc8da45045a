//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::{PI, TAU};

use crate::consts::PADDLE_RIM_LIFT;
use crate::sim::{Heart, Paddle};

/// One segment of a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    /// Cubic bezier: two control points then the end point
    BezierTo(Vec2, Vec2, Vec2),
}

/// A circular arc swept clockwise from `start` to `end` (radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcShape {
    pub center: Vec2,
    pub radius: f32,
    pub start: f32,
    pub end: f32,
}

impl ArcShape {
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            start: 0.0,
            end: TAU,
        }
    }
}

/// Heart outline: four cubic curves meeting at the top notch and bottom tip
///
/// `pos.x` is the notch/tip column, `pos.y` the top of the lobes.
pub fn heart_path(heart: &Heart) -> [PathCmd; 5] {
    let Vec2 { x, y } = heart.pos;
    let size = heart.size;
    let half = size / 2.0;
    let top_curve = size * 0.3;
    let mid = y + (size + top_curve) / 2.0;

    [
        PathCmd::MoveTo(Vec2::new(x, y + top_curve)),
        // Left lobe
        PathCmd::BezierTo(
            Vec2::new(x, y),
            Vec2::new(x - half, y),
            Vec2::new(x - half, y + top_curve),
        ),
        // Left side down to the tip
        PathCmd::BezierTo(
            Vec2::new(x - half, mid),
            Vec2::new(x, mid),
            Vec2::new(x, y + size),
        ),
        // Right side back up
        PathCmd::BezierTo(
            Vec2::new(x, mid),
            Vec2::new(x + half, mid),
            Vec2::new(x + half, y + top_curve),
        ),
        // Right lobe
        PathCmd::BezierTo(
            Vec2::new(x + half, y),
            Vec2::new(x, y),
            Vec2::new(x, y + top_curve),
        ),
    ]
}

/// Paddle bowl: filled lower half-disc plus a rim arc lifted above it
pub fn paddle_arcs(paddle: &Paddle) -> (ArcShape, ArcShape) {
    let radius = paddle.width / 2.0;
    let cx = paddle.center_x();
    let bowl = ArcShape {
        center: Vec2::new(cx, paddle.pos.y),
        radius,
        start: 0.0,
        end: PI,
    };
    let rim = ArcShape {
        center: Vec2::new(cx, paddle.pos.y - PADDLE_RIM_LIFT),
        radius,
        start: PI,
        end: 0.0,
    };
    (bowl, rim)
}
