//! Heart spawner
//!
//! One Bernoulli trial per tick. There is no cap on live hearts; turnover from
//! catches and misses keeps the count small in practice.

use glam::Vec2;
use rand::Rng;

use super::state::Heart;
use crate::settings::{Range, Settings};

/// Probabilistic heart generator
#[derive(Debug, Clone, PartialEq)]
pub struct Spawner {
    /// Per-tick probability in [0, 1]
    pub chance: f64,
    pub size: Range,
    pub speed: Range,
    pub hue: Range,
}

impl Spawner {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            chance: settings.spawn_chance,
            size: settings.heart_size,
            speed: settings.heart_speed,
            hue: settings.heart_hue,
        }
    }

    /// Roll for this tick; `Some` means a new heart enters above the canvas
    pub fn maybe_spawn<R: Rng + ?Sized>(&self, rng: &mut R, canvas_width: f32) -> Option<Heart> {
        if self.chance > 0.0 && rng.random_bool(self.chance.min(1.0)) {
            Some(self.spawn(rng, canvas_width))
        } else {
            None
        }
    }

    /// Unconditionally build a heart with randomized attributes
    pub fn spawn<R: Rng + ?Sized>(&self, rng: &mut R, canvas_width: f32) -> Heart {
        let size = sample(rng, self.size);
        let span = (canvas_width - size).max(0.0);
        let x = rng.random::<f32>() * span;
        Heart {
            pos: Vec2::new(x, -size),
            size,
            speed: sample(rng, self.speed),
            hue: sample(rng, self.hue),
        }
    }
}

/// Uniform sample from `[min, max)`; a degenerate range yields `min`
fn sample<R: Rng + ?Sized>(rng: &mut R, range: Range) -> f32 {
    if range.max > range.min {
        range.min + rng.random::<f32>() * (range.max - range.min)
    } else {
        range.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawned_heart_attributes_in_range() {
        let spawner = Spawner::from_settings(&Settings::default());
        let mut rng = Pcg32::seed_from_u64(42);

        for _ in 0..500 {
            let heart = spawner.spawn(&mut rng, 800.0);
            assert!((20.0..50.0).contains(&heart.size));
            assert!((2.0..5.0).contains(&heart.speed));
            assert!((340.0..360.0).contains(&heart.hue));
            assert!(heart.pos.x >= 0.0 && heart.pos.x <= 800.0 - heart.size);
            assert_eq!(heart.pos.y, -heart.size);
        }
    }

    #[test]
    fn test_zero_chance_never_spawns() {
        let spawner = Spawner {
            chance: 0.0,
            ..Spawner::from_settings(&Settings::default())
        };
        let mut rng = Pcg32::seed_from_u64(7);
        assert!((0..1000).all(|_| spawner.maybe_spawn(&mut rng, 800.0).is_none()));
    }

    #[test]
    fn test_certain_chance_always_spawns() {
        let spawner = Spawner {
            chance: 1.0,
            ..Spawner::from_settings(&Settings::default())
        };
        let mut rng = Pcg32::seed_from_u64(7);
        assert!((0..100).all(|_| spawner.maybe_spawn(&mut rng, 800.0).is_some()));
    }

    #[test]
    fn test_spawn_rate_near_configured_chance() {
        let spawner = Spawner::from_settings(&Settings::default());
        let mut rng = Pcg32::seed_from_u64(2024);
        let spawned = (0..100_000)
            .filter(|_| spawner.maybe_spawn(&mut rng, 800.0).is_some())
            .count();
        // 2% of 100k, generous band
        assert!((1500..2500).contains(&spawned), "spawned {spawned}");
    }

    #[test]
    fn test_same_seed_same_hearts() {
        let spawner = Spawner::from_settings(&Settings::default());
        let mut a = Pcg32::seed_from_u64(99);
        let mut b = Pcg32::seed_from_u64(99);
        for _ in 0..50 {
            assert_eq!(spawner.spawn(&mut a, 640.0), spawner.spawn(&mut b, 640.0));
        }
    }

    #[test]
    fn test_narrow_canvas_pins_heart_left() {
        let spawner = Spawner::from_settings(&Settings::default());
        let mut rng = Pcg32::seed_from_u64(3);
        let heart = spawner.spawn(&mut rng, 10.0);
        assert_eq!(heart.pos.x, 0.0);
    }
}
