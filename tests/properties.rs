// Property tests for the simulation invariants.

use glam::Vec2;
use heart_catch::sim::{GamePhase, GameState, Paddle, Particle, tick};
use heart_catch::Settings;
use proptest::prelude::*;

fn playing_state(seed: u64, width: f32, height: f32, spawn_chance: f64) -> GameState {
    let settings = Settings {
        spawn_chance,
        ..Default::default()
    };
    let mut state = GameState::new(settings, seed, Vec2::new(width, height));
    state.reset(seed);
    state
}

proptest! {
    #[test]
    fn paddle_stays_in_bounds(
        width in 50.0f32..3000.0,
        pointer_xs in prop::collection::vec(-5000.0f32..5000.0, 1..60),
    ) {
        let mut paddle = Paddle::new(Vec2::new(width, 600.0), 100.0, 80.0, 100.0);
        for x in pointer_xs {
            paddle.set_target_x(x);
            paddle.tick(width);
            prop_assert!(paddle.pos.x >= 0.0);
            prop_assert!(paddle.pos.x <= (width - paddle.width).max(0.0));
        }
    }

    #[test]
    fn score_never_decreases_or_overshoots(
        seed in any::<u64>(),
        pointer_xs in prop::collection::vec(0.0f32..800.0, 50..400),
    ) {
        // High spawn rate so catches actually happen
        let mut state = playing_state(seed, 800.0, 600.0, 0.3);
        let win = state.settings.win_score;
        let mut last = 0;
        let mut thresholds = 0;

        for x in pointer_xs {
            for _ in 0..10 {
                state.pointer_moved(x);
                tick(&mut state);
                prop_assert!(state.score >= last);
                prop_assert!(state.score <= win);
                last = state.score;
            }
            thresholds += state
                .drain_events()
                .iter()
                .filter(|e| matches!(e, heart_catch::sim::GameEvent::ThresholdReached { .. }))
                .count();
        }

        prop_assert!(thresholds <= 1);
        prop_assert_eq!(thresholds == 1, state.phase == GamePhase::ProposalTriggered);
    }

    #[test]
    fn particles_live_exactly_their_budget(
        life in 1i32..300,
        decay in 1i32..10,
    ) {
        let mut state = playing_state(1, 800.0, 600.0, 0.0);
        state.settings.particle_life_decay = decay;
        state.particles.push(Particle {
            pos: Vec2::new(400.0, 300.0),
            vel: Vec2::ZERO,
            size: 3.0,
            life,
        });

        let budget = (life + decay - 1) / decay;
        for _ in 0..budget - 1 {
            tick(&mut state);
            prop_assert_eq!(state.particles.len(), 1);
            prop_assert!(state.particles[0].life > 0);
        }
        tick(&mut state);
        prop_assert!(state.particles.is_empty());
    }

    #[test]
    fn nothing_dead_survives_a_tick(seed in any::<u64>(), ticks in 1usize..600) {
        let mut state = playing_state(seed, 640.0, 480.0, 0.2);
        for i in 0..ticks {
            state.pointer_moved((i as f32 * 13.0) % 640.0);
            tick(&mut state);
            prop_assert!(state.particles.iter().all(|p| p.life > 0));
            if state.phase == GamePhase::Playing {
                prop_assert!(state.hearts.iter().all(|h| h.pos.y < 480.0));
            }
        }
    }
}
