//! Fixed timestep simulation tick
//!
//! The ball moves through three regimes each bounce cycle: airborne under
//! gravity, rolling against drag, then at rest until the next impulse. The
//! regime is derived from the ball's velocity and height at the start of
//! every tick, so an impulse applied between ticks takes effect on the very
//! next one.

use glam::Vec2;

use super::collision::{FloorContact, resolve_floor, resolve_walls};
use super::state::{Ball, Phase, SimulationConfig};

/// Whether the ball is still in projectile motion
pub fn is_airborne(ball: &Ball, config: &SimulationConfig) -> bool {
    ball.pos.y > config.floor_threshold || ball.vel.y.abs() > config.up_rest_threshold
}

/// Advance the ball by one tick and report the regime it moved in
///
/// Pending input must already be applied; this function never blocks and
/// never fails.
pub fn advance_tick(ball: &mut Ball, config: &SimulationConfig) -> Phase {
    if is_airborne(ball, config) {
        airborne_step(ball, config);
        return Phase::Airborne;
    }

    // Residual vertical velocity below the rest threshold is discarded
    ball.vel.y = 0.0;

    if ball.vel.x.abs() >= config.roll_rest_threshold {
        rolling_step(ball, config);
        Phase::Rolling
    } else {
        ball.vel = Vec2::ZERO;
        Phase::AtRest
    }
}

/// Projectile motion: collide on the projected position, commit, then gravity
fn airborne_step(ball: &mut Ball, config: &SimulationConfig) {
    let floor = resolve_floor(ball, config);
    resolve_walls(ball, config);

    ball.pos += ball.vel;
    if floor != FloorContact::Land {
        ball.vel.y += config.gravity_accel;
    }
    ball.clamp_to_grid(config);
}

/// Rolling along the floor: walls, then drag, then commit
fn rolling_step(ball: &mut Ball, config: &SimulationConfig) {
    resolve_walls(ball, config);

    ball.vel.x *= config.drag;
    ball.pos.x += ball.vel.x;
    ball.clamp_to_grid(config);
}
