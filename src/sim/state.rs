//! Simulation state and configuration
//!
//! The ball is the only mutable state in the simulation. Everything else is
//! fixed once the grid size is known.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Motion regime the ball was integrated in for a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Projectile motion under gravity, bouncing off the floor and walls
    Airborne,
    /// On the floor, slowing down under drag
    Rolling,
    /// Both velocities zero, waiting for an impulse
    AtRest,
}

/// Physics parameters for a run
///
/// Built once from the grid size and never changed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid height in rows
    pub lines: u16,
    /// Grid width in columns
    pub cols: u16,
    /// Vertical acceleration per tick (negative pulls down)
    pub gravity_accel: f32,
    /// Wall-clock duration of one tick
    pub tick_interval: Duration,
    /// Velocity added per impulse keypress
    pub fire_speed: f32,
    /// Speed retained after a floor or wall collision, in (0, 1)
    pub elasticity: f32,
    /// Horizontal speed retained per rolling tick, in (0, 1)
    pub drag: f32,
    /// Height above which the ball counts as airborne regardless of speed
    pub floor_threshold: f32,
    /// Vertical speed above which the ball counts as airborne
    pub up_rest_threshold: f32,
    /// Horizontal speed below which a grounded ball stops rolling
    pub roll_rest_threshold: f32,
}

impl SimulationConfig {
    /// Derive the configuration for a terminal of `lines` x `cols` cells
    ///
    /// Gravity is scaled by the grid height so a fall across the screen
    /// takes roughly the same wall-clock time on any terminal.
    pub fn from_grid(lines: u16, cols: u16) -> Self {
        let lines = lines.max(1);
        let cols = cols.max(2);
        Self {
            lines,
            cols,
            gravity_accel: GRAVITY / lines as f32,
            tick_interval: TICK_INTERVAL,
            fire_speed: FIRE_SPEED,
            elasticity: COLLISION_ELASTICITY,
            drag: DRAG_COEFFICIENT,
            floor_threshold: FLOOR_THRESHOLD,
            up_rest_threshold: UP_REST_THRESHOLD,
            roll_rest_threshold: ROLL_REST_THRESHOLD,
        }
    }

    /// Bounce speed at or below which the ball lands instead of bouncing
    ///
    /// Gravity is applied after the position commit, so every bounce hands
    /// the ball up to one tick of gravity back. Below this speed the bounces
    /// would settle into a small cycle that never reaches the rest threshold.
    pub fn settle_speed(&self) -> f32 {
        self.gravity_accel.abs() * self.elasticity / (1.0 - self.elasticity)
    }

    /// Column of the right wall's collision line
    #[inline]
    pub fn right_wall(&self) -> f32 {
        self.cols as f32 - 1.0
    }
}

/// The ball
///
/// `vel.y` is the upward velocity and `vel.x` the rightward velocity, both in
/// cells per tick. `pos.y` is measured upward from the floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Spawn a ball at the top-left of the grid, drifting right
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            pos: Vec2::new(BALL_START_X, config.lines as f32),
            vel: Vec2::new(BALL_START_V_RIGHT, 0.0),
        }
    }

    #[inline]
    pub fn v_up(&self) -> f32 {
        self.vel.y
    }

    #[inline]
    pub fn v_right(&self) -> f32 {
        self.vel.x
    }

    pub fn is_at_rest(&self) -> bool {
        self.vel == Vec2::ZERO
    }

    /// Keep the ball inside the grid after a position commit
    pub fn clamp_to_grid(&mut self, config: &SimulationConfig) {
        self.pos.x = self.pos.x.clamp(0.0, config.cols as f32);
        self.pos.y = self.pos.y.max(0.0);
    }
}
