//! Floor and wall collisions
//!
//! Collisions are detected on the projected position (position + velocity)
//! before the move is committed, so the ball is clamped to the boundary one
//! tick early instead of drawing past it.

use super::state::{Ball, SimulationConfig};

/// Outcome of the floor check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorContact {
    /// Projected height stays above the floor
    None,
    /// Reflected upward with energy loss
    Bounce,
    /// Reflected speed too small to bounce; vertical velocity zeroed
    Land,
}

/// Which wall the ball hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
}

/// Resolve a collision with the floor at `y = 0`
pub fn resolve_floor(ball: &mut Ball, config: &SimulationConfig) -> FloorContact {
    if ball.pos.y + ball.vel.y > 0.0 {
        return FloorContact::None;
    }

    ball.pos.y = 0.0;
    ball.vel.y *= -config.elasticity;
    if ball.vel.y.abs() <= config.settle_speed() {
        ball.vel.y = 0.0;
        log::trace!("floor landing at x={:.2}", ball.pos.x);
        return FloorContact::Land;
    }
    log::trace!("floor bounce at x={:.2}, v_up={:.3}", ball.pos.x, ball.vel.y);
    FloorContact::Bounce
}

/// Resolve a collision with the left or right wall
///
/// A right-wall hit clamps the ball to `cols`, a left-wall hit to `0`.
/// At most one wall is hit per tick.
pub fn resolve_walls(ball: &mut Ball, config: &SimulationConfig) -> Option<Wall> {
    let projected = ball.pos.x + ball.vel.x;
    let wall = if projected >= config.right_wall() {
        ball.pos.x = config.cols as f32;
        Wall::Right
    } else if projected <= 0.0 {
        ball.pos.x = 0.0;
        Wall::Left
    } else {
        return None;
    };

    ball.vel.x *= -config.elasticity;
    log::trace!("{:?} wall hit, v_right={:.3}", wall, ball.vel.x);
    Some(wall)
}
