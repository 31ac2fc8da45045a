//! Draw a session frame

use super::DrawSurface;
use super::shapes::{heart_path, paddle_arcs};
use crate::consts::{PADDLE_FILL, PADDLE_RIM, PADDLE_RIM_WIDTH, PARTICLE_COLOR};
use crate::sim::{GamePhase, GameState, Heart, Paddle, Particle};

pub fn draw_paddle<S: DrawSurface + ?Sized>(surface: &mut S, paddle: &Paddle) {
    let (bowl, rim) = paddle_arcs(paddle);
    surface.fill_arc(&bowl, PADDLE_FILL);
    surface.stroke_arc(&rim, PADDLE_RIM, PADDLE_RIM_WIDTH);
}

pub fn draw_heart<S: DrawSurface + ?Sized>(surface: &mut S, heart: &Heart) {
    surface.fill_path(&heart_path(heart), &heart.color());
}

/// Fades with remaining life; the surface's alpha is restored afterwards
pub fn draw_particle<S: DrawSurface + ?Sized>(surface: &mut S, particle: &Particle, full_life: i32) {
    let previous = surface.global_alpha();
    surface.set_global_alpha(particle.alpha(full_life));
    surface.fill_circle(particle.pos, particle.size, PARTICLE_COLOR);
    surface.set_global_alpha(previous);
}

/// Clear and draw everything alive in the session
pub fn draw_frame<S: DrawSurface + ?Sized>(state: &GameState, surface: &mut S) {
    surface.clear(state.canvas.x, state.canvas.y);

    let full_life = state.settings.particle_life;
    match state.phase {
        GamePhase::Playing => {
            if let Some(paddle) = &state.paddle {
                draw_paddle(surface, paddle);
            }
            for heart in &state.hearts {
                draw_heart(surface, heart);
            }
            for particle in &state.particles {
                draw_particle(surface, particle, full_life);
            }
        }
        GamePhase::ProposalTriggered if state.settings.particles_after_win => {
            for particle in &state.particles {
                draw_particle(surface, particle, full_life);
            }
        }
        _ => {}
    }
}
