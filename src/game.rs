//! Loop driver
//!
//! Owns one session and advances it exactly one tick per display frame. The
//! frame clock keeps running for the life of the page; only the gameplay
//! branch inside `tick` is gated by the session phase.

use glam::Vec2;

use crate::renderer::{DrawSurface, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, tick};

/// Frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;

/// Whether frames advance the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStatus {
    Stopped,
    Running,
}

/// Game loop holding the session and frame statistics
pub struct GameLoop {
    pub state: GameState,
    status: LoopStatus,
    /// Milliseconds simulated since the last `start`
    elapsed_ms: f64,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    frames: u64,
    fps: u32,
}

impl GameLoop {
    pub fn new(settings: Settings, seed: u64, canvas: Vec2) -> Self {
        Self {
            state: GameState::new(settings, seed, canvas),
            status: LoopStatus::Stopped,
            elapsed_ms: 0.0,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            frames: 0,
            fps: 0,
        }
    }

    /// (Re)start a session: fresh paddle, empty collections, zero score
    pub fn start(&mut self, seed: u64) {
        self.state.reset(seed);
        self.status = LoopStatus::Running;
        self.elapsed_ms = 0.0;
        log::info!(
            "Game started with seed {} on {}x{}",
            seed,
            self.state.canvas.x,
            self.state.canvas.y
        );
    }

    pub fn status(&self) -> LoopStatus {
        self.status
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Absolute pointer x in canvas pixels
    pub fn pointer_moved(&mut self, x: f32) {
        self.state.pointer_moved(x);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(Vec2::new(width, height));
        log::debug!("Canvas resized to {}x{}", width, height);
    }

    /// Run one tick and hand back what happened
    ///
    /// `elapsed_ms` is the frame delta from the clock; it feeds the frame
    /// statistics but does not scale movement.
    pub fn advance_one_tick(&mut self, elapsed_ms: f64) -> Vec<GameEvent> {
        if self.status == LoopStatus::Stopped {
            return Vec::new();
        }
        self.record_frame(elapsed_ms);
        tick(&mut self.state);
        self.state.drain_events()
    }

    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        draw_frame(&self.state, surface);
    }

    /// Advance and draw: everything one display refresh does
    pub fn frame<S: DrawSurface + ?Sized>(&mut self, elapsed_ms: f64, surface: &mut S) -> Vec<GameEvent> {
        let events = self.advance_one_tick(elapsed_ms);
        self.render(surface);
        events
    }

    /// Pointer position that centers the paddle under the lowest heart still above it
    pub fn autopilot_pointer(&self) -> Option<f32> {
        let paddle = self.state.paddle.as_ref()?;
        self.state
            .hearts
            .iter()
            .filter(|h| h.pos.y < paddle.pos.y)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|h| h.pos.x)
    }

    fn record_frame(&mut self, elapsed_ms: f64) {
        let elapsed_ms = elapsed_ms.clamp(0.0, 100.0);
        self.elapsed_ms += elapsed_ms;
        self.frames += 1;

        self.frame_times[self.frame_index] = elapsed_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        let window = self.frames.min(FPS_WINDOW as u64) as usize;
        let total: f64 = self.frame_times.iter().take(window.max(1)).sum();
        if total > 0.0 {
            self.fps = (window as f64 * 1000.0 / total).round() as u32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;
    use crate::sim::Heart;

    fn quiet_loop() -> GameLoop {
        let settings = Settings {
            spawn_chance: 0.0,
            ..Default::default()
        };
        GameLoop::new(settings, 1, Vec2::new(800.0, 600.0))
    }

    #[test]
    fn test_stopped_loop_does_not_tick() {
        let mut game = quiet_loop();
        assert_eq!(game.status(), LoopStatus::Stopped);
        assert!(game.advance_one_tick(16.0).is_empty());
        assert_eq!(game.state.time_ticks, 0);
        assert_eq!(game.phase(), GamePhase::Idle);
    }

    #[test]
    fn test_start_runs_and_reports_score() {
        let mut game = quiet_loop();
        game.start(5);
        assert_eq!(game.status(), LoopStatus::Running);
        assert_eq!(game.phase(), GamePhase::Playing);

        let events = game.advance_one_tick(16.0);
        assert_eq!(
            events,
            vec![GameEvent::ScoreChanged {
                score: 0,
                progress: 0.0
            }]
        );
        assert_eq!(game.state.time_ticks, 1);
    }

    #[test]
    fn test_loop_keeps_running_after_threshold() {
        let mut game = quiet_loop();
        game.start(5);
        game.state.score = game.state.settings.win_score - 1;
        game.state.hearts.push(Heart {
            pos: Vec2::new(400.0, 499.0),
            size: 30.0,
            speed: 5.0,
            hue: 350.0,
        });
        game.advance_one_tick(16.0);
        assert_eq!(game.phase(), GamePhase::ProposalTriggered);

        // Frames still arrive; no gameplay resumes
        let events = game.advance_one_tick(16.0);
        assert!(events.is_empty());
        assert_eq!(game.status(), LoopStatus::Running);
        assert_eq!(game.state.time_ticks, 2);

        game.start(6);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.state.score, 0);
    }

    #[test]
    fn test_fps_from_frame_deltas() {
        let mut game = quiet_loop();
        game.start(1);
        for _ in 0..120 {
            game.advance_one_tick(1000.0 / 60.0);
        }
        assert_eq!(game.fps(), 60);
        assert!((game.elapsed_ms() - 2000.0).abs() < 1e-6);
    }

    #[test]
    fn test_frame_clears_and_draws() {
        let mut game = quiet_loop();
        game.start(1);
        let mut surface = RecordingSurface::default();
        game.frame(16.0, &mut surface);
        assert!(matches!(
            surface.commands.first(),
            Some(crate::renderer::DrawCommand::Clear { .. })
        ));
        assert_eq!(surface.count_strokes(), 1);
    }

    #[test]
    fn test_autopilot_tracks_lowest_heart() {
        let mut game = quiet_loop();
        assert_eq!(game.autopilot_pointer(), None);
        game.start(1);
        for (x, y) in [(100.0, 50.0), (600.0, 300.0), (200.0, 550.0)] {
            game.state.hearts.push(Heart {
                pos: Vec2::new(x, y),
                size: 30.0,
                speed: 3.0,
                hue: 350.0,
            });
        }
        // The heart at y=550 is already below the paddle top (500)
        assert_eq!(game.autopilot_pointer(), Some(600.0));
    }
}
