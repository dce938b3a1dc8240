//! Bouncy Ball - a bouncing ball toy for the terminal
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, input impulses)
//! - `renderer`: Character-grid rendering and tick pacing
//! - `platform`: Terminal abstraction and the crossterm backend
//! - `diagnostics`: Optional per-tick state log
//! - `game`: The control loop tying it all together

pub mod diagnostics;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use diagnostics::DiagnosticLog;
pub use game::Game;
pub use settings::Settings;

/// Simulation constants
pub mod consts {
    use std::time::Duration;

    /// Wall-clock duration of one simulation tick
    pub const TICK_INTERVAL: Duration = Duration::from_millis(25);

    /// Gravity in cells per tick², before scaling by the grid height
    pub const GRAVITY: f32 = -9.81;
    /// Velocity added per keypress (cells per tick)
    pub const FIRE_SPEED: f32 = 4.0;

    /// Fraction of speed kept after hitting the floor or a wall
    pub const COLLISION_ELASTICITY: f32 = 0.7;
    /// Fraction of horizontal speed kept per tick while rolling
    pub const DRAG_COEFFICIENT: f32 = 0.8;

    /// Height below which the ball counts as on the floor
    pub const FLOOR_THRESHOLD: f32 = 1.0;
    /// Vertical speed below which a grounded ball stops bouncing
    pub const UP_REST_THRESHOLD: f32 = 0.1;
    /// Horizontal speed below which a rolling ball stops
    pub const ROLL_REST_THRESHOLD: f32 = 0.5;

    /// Spawn column
    pub const BALL_START_X: f32 = 5.0;
    /// Spawn horizontal velocity
    pub const BALL_START_V_RIGHT: f32 = 1.0;

    /// Glyph drawn for the ball
    pub const BALL_GLYPH: char = 'o';
}
