//! Catch bursts

use glam::Vec2;
use rand::Rng;

use super::state::Particle;
use crate::settings::{Range, Settings};

/// Shape of one burst of sparks
#[derive(Debug, Clone, PartialEq)]
pub struct Burst {
    pub count: usize,
    pub life: i32,
    pub size: Range,
    /// Max per-axis speed (pixels per tick)
    pub max_speed: f32,
}

impl Burst {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            count: settings.burst_count,
            life: settings.particle_life,
            size: settings.particle_size,
            max_speed: settings.particle_max_speed,
        }
    }

    /// `count` particles starting at `at` with small random velocities
    pub fn spawn<R: Rng + ?Sized>(&self, rng: &mut R, at: Vec2) -> Vec<Particle> {
        (0..self.count)
            .map(|_| Particle {
                pos: at,
                vel: Vec2::new(self.axis_speed(rng), self.axis_speed(rng)),
                size: self.size.min + rng.random::<f32>() * (self.size.max - self.size.min),
                life: self.life,
            })
            .collect()
    }

    fn axis_speed<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        (rng.random::<f32>() - 0.5) * 2.0 * self.max_speed
    }

    /// Ticks a particle lives with the given per-tick decay
    pub fn lifetime_ticks(&self, decay: i32) -> u32 {
        if decay <= 0 {
            return u32::MAX;
        }
        (self.life.max(0) as u32).div_ceil(decay as u32)
    }
}
