//! Heart Catch - a falling-hearts mini-game that leads into a proposal
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle, hearts, particles, scoring)
//! - `game`: Loop driver that owns a session and advances it one tick per frame
//! - `renderer`: 2D draw surface abstraction and scene drawing
//! - `audio`: Background music and procedural sound effects
//! - `settings`: Data-driven game tuning
//! - `ui`: Screen flow that follows the game (proposal, celebration, gallery)

pub mod audio;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::{GameLoop, LoopStatus};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Catches needed to fill the love meter
    pub const WIN_SCORE: u32 = 15;
    /// Per-tick probability that a new heart appears
    pub const SPAWN_CHANCE: f64 = 0.02;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Distance from the bottom of the canvas to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 100.0;
    pub const PADDLE_FILL: &str = "#ff4d6d";
    pub const PADDLE_RIM: &str = "#c9184a";
    pub const PADDLE_RIM_WIDTH: f32 = 5.0;
    pub const PADDLE_RIM_LIFT: f32 = 10.0;

    /// Heart defaults (half-open ranges)
    pub const HEART_SIZE_MIN: f32 = 20.0;
    pub const HEART_SIZE_MAX: f32 = 50.0;
    pub const HEART_SPEED_MIN: f32 = 2.0;
    pub const HEART_SPEED_MAX: f32 = 5.0;
    pub const HEART_HUE_MIN: f32 = 340.0;
    pub const HEART_HUE_MAX: f32 = 360.0;

    /// Particle burst defaults
    pub const BURST_COUNT: usize = 5;
    pub const PARTICLE_LIFE: i32 = 100;
    pub const PARTICLE_LIFE_DECAY: i32 = 2;
    pub const PARTICLE_SIZE_MIN: f32 = 2.0;
    pub const PARTICLE_SIZE_MAX: f32 = 7.0;
    /// Max per-axis particle speed (pixels per tick)
    pub const PARTICLE_MAX_SPEED: f32 = 2.0;
    pub const PARTICLE_COLOR: &str = "rgba(255, 255, 255, 0.8)";

    /// Music volume preset
    pub const MUSIC_VOLUME: f32 = 0.3;

    /// Delay before the proposal screen appears after the meter fills
    pub const PROPOSAL_REVEAL_DELAY_MS: i32 = 500;
    /// Delay before gallery photos snap into the grid layout
    pub const GALLERY_ASSEMBLE_DELAY_MS: i32 = 3300 + 1000;
}

/// Clamp a value into `[min, max]`, collapsing to `min` when the range is empty.
///
/// A canvas narrower than the paddle yields `max < min`; `f32::clamp` panics on that.
#[inline]
pub fn clamp_span(value: f32, min: f32, max: f32) -> f32 {
    if max < min {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Canvas-space rectangle test with strict horizontal bounds
#[inline]
pub fn within_span(x: f32, left: f32, width: f32) -> bool {
    x > left && x < left + width
}
