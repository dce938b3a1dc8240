//! Keyboard impulses
//!
//! Keys arrive one at a time from a non-blocking poll. Each recognized key is
//! an additive velocity impulse or a request to quit.

use super::state::{Ball, SimulationConfig};

/// A key as seen by the simulation, independent of the terminal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    /// Ctrl-C (raw mode swallows the signal)
    Interrupt,
}

/// What a key asks the simulation to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    FireUp,
    FireDown,
    FireLeft,
    FireRight,
    Quit,
}

impl Command {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char('w' | 'W') | Key::ArrowUp => Some(Command::FireUp),
            Key::Char('s' | 'S') | Key::ArrowDown => Some(Command::FireDown),
            Key::Char('a' | 'A') | Key::ArrowLeft => Some(Command::FireLeft),
            Key::Char('d' | 'D') | Key::ArrowRight => Some(Command::FireRight),
            Key::Char('q' | 'Q') | Key::Escape | Key::Interrupt => Some(Command::Quit),
            Key::Char(_) => None,
        }
    }
}

/// Whether the control loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Quit,
}

/// Apply one polled key to the ball
///
/// `None` means the poll found nothing. Quitting leaves the ball untouched.
pub fn apply_keypress(key: Option<Key>, ball: &mut Ball, config: &SimulationConfig) -> Signal {
    let Some(command) = key.and_then(Command::from_key) else {
        return Signal::Continue;
    };

    let speed = config.fire_speed;
    match command {
        Command::FireUp => ball.vel.y += speed,
        Command::FireDown => ball.vel.y -= speed,
        Command::FireRight => ball.vel.x += speed,
        Command::FireLeft => ball.vel.x -= speed,
        Command::Quit => return Signal::Quit,
    }
    Signal::Continue
}
