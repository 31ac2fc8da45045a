//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, speeds in pixels per tick
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod particle;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{HeartFate, classify, heart_caught, heart_missed};
pub use particle::Burst;
pub use spawner::Spawner;
pub use state::{GameEvent, GamePhase, GameState, Heart, Paddle, Particle};
pub use tick::tick;
