//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure:
//! - One fixed tick per call, no wall-clock time
//! - No rendering or terminal dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{FloorContact, Wall, resolve_floor, resolve_walls};
pub use input::{Command, Key, Signal, apply_keypress};
pub use state::{Ball, Phase, SimulationConfig};
pub use tick::{advance_tick, is_airborne};
