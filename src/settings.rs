//! Game settings and tuning
//!
//! Every gameplay number lives here so a page can override it with an inline
//! `<script id="game-config" type="application/json">` block.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a settings document is rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("win_score must be at least 1")]
    ZeroWinScore,

    #[error("spawn_chance must be within [0, 1], got {0}")]
    SpawnChance(f64),

    #[error("range `{name}` is empty or inverted: [{min}, {max})")]
    EmptyRange {
        name: &'static str,
        min: f32,
        max: f32,
    },

    #[error("paddle dimensions must be positive, got {width}x{height}")]
    PaddleSize { width: f32, height: f32 },

    #[error("particle life and decay must be positive")]
    ParticleLife,
}

/// Half-open `[min, max)` range used for randomized attributes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    fn check(&self, name: &'static str) -> Result<(), SettingsError> {
        if self.min < self.max {
            Ok(())
        } else {
            Err(SettingsError::EmptyRange {
                name,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run seed; `None` picks one from the clock at startup
    pub seed: Option<u64>,

    // === Scoring ===
    /// Catches needed to trigger the proposal
    pub win_score: u32,

    // === Spawning ===
    /// Per-tick probability of a new heart
    pub spawn_chance: f64,
    pub heart_size: Range,
    pub heart_speed: Range,
    pub heart_hue: Range,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_bottom_offset: f32,

    // === Particles ===
    pub burst_count: usize,
    pub particle_life: i32,
    pub particle_life_decay: i32,
    pub particle_size: Range,
    pub particle_max_speed: f32,
    /// Keep animating in-flight particles after the meter fills
    pub particles_after_win: bool,

    // === Audio ===
    pub music_volume: f32,
    pub sfx_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,

            win_score: WIN_SCORE,

            spawn_chance: SPAWN_CHANCE,
            heart_size: Range::new(HEART_SIZE_MIN, HEART_SIZE_MAX),
            heart_speed: Range::new(HEART_SPEED_MIN, HEART_SPEED_MAX),
            heart_hue: Range::new(HEART_HUE_MIN, HEART_HUE_MAX),

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,

            burst_count: BURST_COUNT,
            particle_life: PARTICLE_LIFE,
            particle_life_decay: PARTICLE_LIFE_DECAY,
            particle_size: Range::new(PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX),
            particle_max_speed: PARTICLE_MAX_SPEED,
            particles_after_win: true,

            music_volume: MUSIC_VOLUME,
            sfx_enabled: true,
        }
    }
}

impl Settings {
    /// Parse and validate a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.win_score == 0 {
            return Err(SettingsError::ZeroWinScore);
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(SettingsError::SpawnChance(self.spawn_chance));
        }
        self.heart_size.check("heart_size")?;
        self.heart_speed.check("heart_speed")?;
        self.heart_hue.check("heart_hue")?;
        self.particle_size.check("particle_size")?;
        if self.paddle_width <= 0.0 || self.paddle_height <= 0.0 {
            return Err(SettingsError::PaddleSize {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.particle_life <= 0 || self.particle_life_decay <= 0 {
            return Err(SettingsError::ParticleLife);
        }
        Ok(())
    }

    /// Music volume clamped to what an audio element accepts
    pub fn effective_music_volume(&self) -> f32 {
        self.music_volume.clamp(0.0, 1.0)
    }

    /// Element id of the inline configuration block
    #[allow(dead_code)]
    const CONFIG_ELEMENT_ID: &'static str = "game-config";

    /// Load settings from the page's inline config block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", Self::CONFIG_ELEMENT_ID);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring page settings: {}", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Native: read `HEART_CATCH_CONFIG` if it names a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var("HEART_CATCH_CONFIG") else {
            return Self::default();
        };
        let loaded = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| Self::from_json(&json).map_err(|e| e.to_string()));
        match loaded {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path, e);
                Self::default()
            }
        }
    }
}
