//! One simulation step
//!
//! Hearts are resolved in two phases: every heart is classified against the
//! paddle first, then the collection is rebuilt from the survivors. No heart is
//! skipped or seen twice when several leave in the same tick.

use super::collision::{HeartFate, classify};
use super::particle::Burst;
use super::spawner::Spawner;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the session by one tick
pub fn tick(state: &mut GameState) {
    state.time_ticks += 1;

    match state.phase {
        GamePhase::Playing => play_tick(state),
        GamePhase::ProposalTriggered => {
            // Gameplay is frozen; sparks already in the air finish their arc
            if state.settings.particles_after_win {
                update_particles(state);
            }
        }
        GamePhase::Idle => {}
    }
}

fn play_tick(state: &mut GameState) {
    let canvas = state.canvas;

    let Some(paddle) = state.paddle.as_mut() else {
        return;
    };
    paddle.tick(canvas.x);
    let paddle = paddle.clone();

    let spawner = Spawner::from_settings(&state.settings);
    if let Some(heart) = spawner.maybe_spawn(state.rng_mut(), canvas.x) {
        state.hearts.push(heart);
    }

    for heart in &mut state.hearts {
        heart.tick();
    }

    // Mark
    let fates: Vec<HeartFate> = state
        .hearts
        .iter()
        .map(|heart| classify(heart, &paddle, canvas.y))
        .collect();

    // Sweep
    let burst = Burst::from_settings(&state.settings);
    let hearts = std::mem::take(&mut state.hearts);
    let mut survivors = Vec::with_capacity(hearts.len());
    for (heart, fate) in hearts.into_iter().zip(fates) {
        // Once the threshold fires mid-sweep the rest of this tick scores nothing
        if state.phase != GamePhase::Playing {
            survivors.push(heart);
            continue;
        }
        match fate {
            HeartFate::Falling => survivors.push(heart),
            HeartFate::Missed => state.push_event(GameEvent::HeartMissed),
            HeartFate::Caught => {
                let sparks = burst.spawn(state.rng_mut(), heart.pos);
                state.particles.extend(sparks);
                state.register_catch(heart.pos);
            }
        }
    }
    state.hearts = survivors;

    update_particles(state);
}

fn update_particles(state: &mut GameState) {
    let decay = state.settings.particle_life_decay;
    for particle in &mut state.particles {
        particle.tick(decay);
    }
    state.particles.retain(|p| !p.is_dead());
}
