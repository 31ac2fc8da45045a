//! Catch and miss detection
//!
//! The catch test is a point test on the heart's `x` column, not a full-width
//! overlap: a heart whose body brushes the paddle but whose tip column is
//! outside the paddle's span keeps falling.

use super::state::{Heart, Paddle};
use crate::within_span;

/// What happens to a heart this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartFate {
    /// Still falling
    Falling,
    /// Landed in the paddle
    Caught,
    /// Fell past the bottom of the canvas
    Missed,
}

/// Heart bottom has reached the paddle top and its column is strictly inside the paddle span
pub fn heart_caught(heart: &Heart, paddle: &Paddle) -> bool {
    heart.bottom() >= paddle.pos.y && within_span(heart.pos.x, paddle.pos.x, paddle.width)
}

/// Heart top is at or below the canvas bottom
pub fn heart_missed(heart: &Heart, canvas_height: f32) -> bool {
    heart.pos.y >= canvas_height
}

/// Catch wins over miss when both hold
pub fn classify(heart: &Heart, paddle: &Paddle, canvas_height: f32) -> HeartFate {
    if heart_caught(heart, paddle) {
        HeartFate::Caught
    } else if heart_missed(heart, canvas_height) {
        HeartFate::Missed
    } else {
        HeartFate::Falling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn paddle() -> Paddle {
        // Left edge 350, top 500 on an 800x600 canvas
        Paddle::new(Vec2::new(800.0, 600.0), 100.0, 80.0, 100.0)
    }

    fn heart(x: f32, y: f32) -> Heart {
        Heart {
            pos: Vec2::new(x, y),
            size: 30.0,
            speed: 3.0,
            hue: 350.0,
        }
    }

    #[test]
    fn test_caught_when_bottom_reaches_paddle_top() {
        let p = paddle();
        assert_eq!(classify(&heart(400.0, 470.0), &p, 600.0), HeartFate::Caught);
        assert_eq!(classify(&heart(400.0, 469.0), &p, 600.0), HeartFate::Falling);
    }

    #[test]
    fn test_horizontal_bounds_are_strict() {
        let p = paddle();
        assert!(!heart_caught(&heart(350.0, 480.0), &p));
        assert!(heart_caught(&heart(350.1, 480.0), &p));
        assert!(!heart_caught(&heart(450.0, 480.0), &p));
    }

    #[test]
    fn test_point_test_ignores_heart_width() {
        // Heart body overlaps the paddle's left edge, but its column is outside
        let p = paddle();
        let h = heart(340.0, 480.0);
        assert!(h.pos.x + h.size > p.pos.x);
        assert_eq!(classify(&h, &p, 600.0), HeartFate::Falling);
    }

    #[test]
    fn test_missed_below_canvas() {
        let p = paddle();
        assert_eq!(classify(&heart(10.0, 600.0), &p, 600.0), HeartFate::Missed);
        assert_eq!(classify(&heart(10.0, 599.0), &p, 600.0), HeartFate::Falling);
    }

    #[test]
    fn test_catch_beats_miss() {
        // Below the canvas but inside the paddle column (tiny canvas)
        let p = paddle();
        assert_eq!(classify(&heart(400.0, 700.0), &p, 600.0), HeartFate::Caught);
    }
}
