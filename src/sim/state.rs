//! Game state and core simulation types
//!
//! A `GameState` is one session: everything the loop driver mutates lives here
//! instead of in globals, so independent sessions can run side by side.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::clamp_span;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, nothing spawned yet
    Idle,
    /// Hearts falling, paddle follows the pointer
    Playing,
    /// Meter filled; gameplay frozen until an explicit restart
    ProposalTriggered,
}

/// Things that happened during a tick, drained by the loop driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Paddle caught a heart at this position
    HeartCaught { pos: Vec2 },
    /// A heart fell past the bottom of the canvas
    HeartMissed,
    /// Score changed; `progress` is score / win score in [0, 1]
    ScoreChanged { score: u32, progress: f32 },
    /// Score reached the win target (fires once per session)
    ThresholdReached { score: u32 },
}

/// The player's paddle (a bowl at the bottom of the screen)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal movement applied by the last tick (pixels)
    pub vel_x: f32,
    /// Desired left edge from pointer input, applied on the next tick
    #[serde(skip)]
    target_x: Option<f32>,
}

impl Paddle {
    /// Centered horizontally, `bottom_offset` above the bottom edge
    pub fn new(canvas: Vec2, width: f32, height: f32, bottom_offset: f32) -> Self {
        Self {
            pos: Vec2::new(canvas.x / 2.0 - width / 2.0, canvas.y - bottom_offset),
            width,
            height,
            vel_x: 0.0,
            target_x: None,
        }
    }

    /// Record the pointer's absolute x; the paddle centers itself under it
    pub fn set_target_x(&mut self, pointer_x: f32) {
        self.target_x = Some(pointer_x - self.width / 2.0);
    }

    pub fn target_x(&self) -> Option<f32> {
        self.target_x
    }

    /// Apply pending input and clamp into `[0, canvas_width - width]`
    pub fn tick(&mut self, canvas_width: f32) {
        let before = self.pos.x;
        if let Some(target) = self.target_x.take() {
            self.pos.x = target;
        }
        self.clamp_to(canvas_width);
        self.vel_x = self.pos.x - before;
    }

    pub fn clamp_to(&mut self, canvas_width: f32) {
        self.pos.x = clamp_span(self.pos.x, 0.0, self.max_x(canvas_width));
    }

    /// Largest legal left edge for a canvas of this width
    #[inline]
    pub fn max_x(&self, canvas_width: f32) -> f32 {
        (canvas_width - self.width).max(0.0)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }
}

/// A falling heart (the collectible)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heart {
    /// `x` is the heart's tip column; `y` is its top
    pub pos: Vec2,
    pub size: f32,
    /// Pixels per tick
    pub speed: f32,
    /// HSL hue in degrees
    pub hue: f32,
}

impl Heart {
    pub fn tick(&mut self) {
        self.pos.y += self.speed;
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    /// CSS fill color
    pub fn color(&self) -> String {
        format!("hsl({}, 100%, 60%)", self.hue)
    }
}

/// A spark from a catch burst
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub size: f32,
    /// Remaining life; the particle dies at zero or below
    pub life: i32,
}

impl Particle {
    pub fn tick(&mut self, decay: i32) {
        self.pos += self.vel;
        self.life -= decay;
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.life <= 0
    }

    /// Draw opacity relative to a fresh particle's life
    pub fn alpha(&self, full_life: i32) -> f32 {
        if full_life <= 0 {
            return 0.0;
        }
        (self.life as f32 / full_life as f32).clamp(0.0, 1.0)
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub settings: Settings,
    pub phase: GamePhase,
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Draw surface size in pixels
    pub canvas: Vec2,
    /// Present only while a session has been started
    pub paddle: Option<Paddle>,
    pub hearts: Vec<Heart>,
    pub particles: Vec<Particle>,
    threshold_fired: bool,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create an idle session; nothing moves until `reset` is called
    pub fn new(settings: Settings, seed: u64, canvas: Vec2) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            settings,
            phase: GamePhase::Idle,
            score: 0,
            time_ticks: 0,
            canvas,
            paddle: None,
            hearts: Vec::new(),
            particles: Vec::new(),
            threshold_fired: false,
            events: Vec::new(),
        }
    }

    /// Fresh paddle, empty collections, zero score, `Playing`
    pub fn reset(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self.paddle = Some(Paddle::new(
            self.canvas,
            self.settings.paddle_width,
            self.settings.paddle_height,
            self.settings.paddle_bottom_offset,
        ));
        self.hearts.clear();
        self.particles.clear();
        self.score = 0;
        self.time_ticks = 0;
        self.threshold_fired = false;
        self.events.clear();
        self.phase = GamePhase::Playing;
        self.push_score_event();
    }

    /// Forward pointer input; ignored when no paddle exists
    pub fn pointer_moved(&mut self, x: f32) -> bool {
        match self.paddle.as_mut() {
            Some(paddle) => {
                paddle.set_target_x(x);
                true
            }
            None => false,
        }
    }

    /// Adopt a new viewport size and re-anchor the paddle to the bottom
    pub fn resize(&mut self, canvas: Vec2) {
        self.canvas = canvas;
        let offset = self.settings.paddle_bottom_offset;
        if let Some(paddle) = self.paddle.as_mut() {
            paddle.pos.y = canvas.y - offset;
            paddle.clamp_to(canvas.x);
        }
    }

    /// Love meter fill in [0, 1]
    pub fn progress(&self) -> f32 {
        (self.score as f32 / self.settings.win_score.max(1) as f32).clamp(0.0, 1.0)
    }

    /// Love meter fill as a CSS percentage
    pub fn progress_percent(&self) -> f32 {
        self.progress() * 100.0
    }

    pub fn threshold_fired(&self) -> bool {
        self.threshold_fired
    }

    pub fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Score a catch and fire the threshold signal the first time the target is met
    pub(crate) fn register_catch(&mut self, pos: Vec2) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.score += 1;
        self.push_event(GameEvent::HeartCaught { pos });
        self.push_score_event();

        if self.score >= self.settings.win_score && !self.threshold_fired {
            self.threshold_fired = true;
            self.phase = GamePhase::ProposalTriggered;
            log::info!("Love meter full at {} catches", self.score);
            self.push_event(GameEvent::ThresholdReached { score: self.score });
        }
    }

    fn push_score_event(&mut self) {
        let event = GameEvent::ScoreChanged {
            score: self.score,
            progress: self.progress(),
        };
        self.push_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Vec2 {
        Vec2::new(800.0, 600.0)
    }

    #[test]
    fn test_paddle_spawns_centered_above_bottom() {
        let paddle = Paddle::new(canvas(), 100.0, 80.0, 100.0);
        assert_eq!(paddle.pos, Vec2::new(350.0, 500.0));
        assert_eq!(paddle.center_x(), 400.0);
    }

    #[test]
    fn test_paddle_centers_on_pointer_and_clamps() {
        let mut paddle = Paddle::new(canvas(), 100.0, 80.0, 100.0);

        paddle.set_target_x(200.0);
        paddle.tick(800.0);
        assert_eq!(paddle.pos.x, 150.0);
        assert_eq!(paddle.vel_x, -200.0);

        paddle.set_target_x(-500.0);
        paddle.tick(800.0);
        assert_eq!(paddle.pos.x, 0.0);

        paddle.set_target_x(10_000.0);
        paddle.tick(800.0);
        assert_eq!(paddle.pos.x, 700.0);

        // No new input: stays put
        paddle.tick(800.0);
        assert_eq!(paddle.pos.x, 700.0);
        assert_eq!(paddle.vel_x, 0.0);
    }

    #[test]
    fn test_particle_alpha_follows_life() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, -1.0),
            size: 3.0,
            life: 100,
        };
        assert_eq!(p.alpha(100), 1.0);
        p.tick(2);
        assert_eq!(p.life, 98);
        assert_eq!(p.pos, Vec2::new(1.0, -1.0));
        assert!((p.alpha(100) - 0.98).abs() < 1e-6);
        p.life = -4;
        assert!(p.is_dead());
        assert_eq!(p.alpha(100), 0.0);
    }

    #[test]
    fn test_heart_color_is_hsl() {
        let heart = Heart {
            pos: Vec2::ZERO,
            size: 30.0,
            speed: 3.0,
            hue: 350.0,
        };
        assert_eq!(heart.color(), "hsl(350, 100%, 60%)");
    }

    #[test]
    fn test_pointer_ignored_without_paddle() {
        let mut state = GameState::new(Settings::default(), 1, canvas());
        assert!(!state.pointer_moved(100.0));
        state.reset(1);
        assert!(state.pointer_moved(100.0));
    }

    #[test]
    fn test_reset_clears_session() {
        let mut state = GameState::new(Settings::default(), 1, canvas());
        state.reset(1);
        state.score = 9;
        state.hearts.push(Heart {
            pos: Vec2::new(10.0, 10.0),
            size: 20.0,
            speed: 2.0,
            hue: 345.0,
        });
        state.reset(2);
        assert_eq!(state.score, 0);
        assert!(state.hearts.is_empty());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::ScoreChanged {
                score: 0,
                progress: 0.0
            }]
        );
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut state = GameState::new(Settings::default(), 1, canvas());
        state.score = 30;
        assert_eq!(state.progress(), 1.0);
        state.score = 3;
        assert!((state.progress_percent() - 20.0).abs() < 1e-4);
    }
}
